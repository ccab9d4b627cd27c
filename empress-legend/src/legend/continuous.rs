use empress_dom::node::{Element, Node};

use crate::{config::LegendConfig, legend::title_node};

pub const NON_NUMERIC_WARNING: &str = "Some value(s) in this field were not numeric. \
These value(s) have been left out of the gradient, and no bar(s) have been drawn for them.";

/// Gradient key. The SVG markup is produced by the caller and is never
/// inspected here.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousKey {
    title: String,
    gradient_svg: String,
    has_non_numeric_values: bool,
}

impl ContinuousKey {
    pub fn new(title: &str, gradient_svg: &str, has_non_numeric_values: bool) -> Self {
        Self {
            title: title.to_string(),
            gradient_svg: gradient_svg.to_string(),
            has_non_numeric_values,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn gradient_svg(&self) -> &str {
        &self.gradient_svg
    }

    pub fn has_non_numeric_values(&self) -> bool {
        self.has_non_numeric_values
    }

    pub(crate) fn render(&self, config: &LegendConfig) -> Vec<Node> {
        let svg = Element::new_svg("svg")
            .with_style_text(&config.gradient_style)
            .with_markup(&self.gradient_svg);

        let mut nodes = vec![title_node(&self.title, config), svg.into()];
        if self.has_non_numeric_values {
            // Legends default to `white-space: nowrap`; the warning is prose.
            let warning = Element::new("p")
                .with_style("white-space", "normal")
                .with_text(NON_NUMERIC_WARNING);
            nodes.push(warning.into());
        }
        nodes
    }
}
