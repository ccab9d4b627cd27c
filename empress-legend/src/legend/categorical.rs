use empress_common::{natural_sort::natural_cmp, types::ColorSpec};
use empress_dom::node::{Element, Node};
use indexmap::IndexMap;

use crate::{config::LegendConfig, error::LegendError, legend::title_node};

const NO_CATEGORIES: &str =
    "Can't create a categorical legend when there are no categories in the info";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub label: String,
    pub color: ColorSpec,
}

/// Discrete label -> color key, rows kept in natural-sort order of labels
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalKey {
    title: String,
    rows: Vec<CategoryRow>,
}

impl CategoricalKey {
    /// Build from a label -> color mapping. Repeated labels keep the last color.
    pub fn from_color_info<I, L, C>(title: &str, color_info: I) -> Result<Self, LegendError>
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: Into<ColorSpec>,
    {
        let info: IndexMap<String, ColorSpec> = color_info
            .into_iter()
            .map(|(label, color)| (label.into(), color.into()))
            .collect();

        if info.is_empty() {
            return Err(LegendError::InvalidInput(NO_CATEGORIES.to_string()));
        }

        let mut rows: Vec<CategoryRow> = info
            .into_iter()
            .map(|(label, color)| CategoryRow { label, color })
            .collect();
        rows.sort_by(|a, b| natural_cmp(&a.label, &b.label));

        Ok(Self {
            title: title.to_string(),
            rows,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[CategoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn render(&self, config: &LegendConfig) -> Vec<Node> {
        let table = Element::new("table").with_children(
            self.rows
                .iter()
                .map(|row| make_row(row, config))
                .collect::<Vec<_>>(),
        );
        vec![title_node(&self.title, config), table.into()]
    }
}

fn make_row(row: &CategoryRow, config: &LegendConfig) -> Element {
    let swatch = Element::new("td")
        .with_class(&config.swatch_class)
        .with_style("background", &row.color.to_css());

    // title attribute so long labels cut off by the stylesheet stay readable on hover
    let label = Element::new("td")
        .with_class(&config.label_class)
        .with_attr("title", &row.label)
        .with_text(&row.label);

    Element::new("tr").with_child(swatch).with_child(label)
}
