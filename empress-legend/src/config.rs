use serde::{Deserialize, Serialize};

/// Class names and styling used when rendering a legend.
///
/// The defaults match the stylesheet shipped with the tree viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LegendConfig {
    /// Class toggled on the container to hide it
    pub hidden_class: String,

    /// Class of the title `<div>`
    pub title_class: String,

    /// Class of the color cell in each categorical row
    pub swatch_class: String,

    /// Class of the label cell in each categorical row
    pub label_class: String,

    /// Inline style of the `<svg>` element wrapping a gradient
    pub gradient_style: String,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            hidden_class: "hidden".to_string(),
            title_class: "legend-title".to_string(),
            swatch_class: "category-color".to_string(),
            label_class: "gradient-label".to_string(),
            gradient_style: "display: block; margin: auto;".to_string(),
        }
    }
}
