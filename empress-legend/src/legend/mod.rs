pub mod categorical;
pub mod continuous;

use empress_common::types::ColorSpec;
use empress_dom::{
    container::Container,
    node::{Element, Node},
};

use crate::{config::LegendConfig, error::LegendError};

pub use categorical::{CategoricalKey, CategoryRow};
pub use continuous::{ContinuousKey, NON_NUMERIC_WARNING};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Visibility {
    Visible,
    Hidden,
}

/// What a legend currently shows. Populating replaces the whole value and the
/// container is re-rendered from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LegendContent {
    #[default]
    Empty,
    Categorical(CategoricalKey),
    Continuous(ContinuousKey),
}

impl LegendContent {
    fn render(&self, config: &LegendConfig) -> Vec<Node> {
        match self {
            LegendContent::Empty => vec![],
            LegendContent::Categorical(key) => key.render(config),
            LegendContent::Continuous(key) => key.render(config),
        }
    }
}

/// A legend bound to one container.
///
/// The legend takes ownership of the container for as long as it's attached;
/// use [`Legend::into_container`] to get it back.
#[derive(Debug, Clone)]
pub struct Legend {
    container: Container,
    content: LegendContent,
    config: LegendConfig,
}

impl Legend {
    /// Bind to `container`. Existing children and classes are left alone until
    /// the legend is first populated or cleared.
    pub fn new(container: Container) -> Self {
        Self::with_config(container, LegendConfig::default())
    }

    pub fn with_config(container: Container, config: LegendConfig) -> Self {
        Self {
            container,
            content: LegendContent::Empty,
            config,
        }
    }

    /// Show a table of colored swatches, one row per category, ordered by
    /// natural sort of the labels.
    pub fn add_categorical_key<I, L, C>(
        &mut self,
        title: &str,
        color_info: I,
    ) -> Result<(), LegendError>
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: Into<ColorSpec>,
    {
        let key = CategoricalKey::from_color_info(title, color_info)?;
        log::debug!(
            "Rendering categorical legend {:?} with {} categories",
            title,
            key.len()
        );
        self.populate(LegendContent::Categorical(key));
        Ok(())
    }

    /// Show a pre-rendered gradient, plus a warning when some values were left
    /// out of it for not being numeric.
    pub fn add_continuous_key(
        &mut self,
        title: &str,
        gradient_svg: &str,
        has_non_numeric_values: bool,
    ) {
        log::debug!(
            "Rendering continuous legend {:?} (non-numeric warning: {})",
            title,
            has_non_numeric_values
        );
        self.populate(LegendContent::Continuous(ContinuousKey::new(
            title,
            gradient_svg,
            has_non_numeric_values,
        )));
    }

    /// Remove everything from the container and hide it
    pub fn clear(&mut self) {
        self.container.clear_children();
        self.content = LegendContent::Empty;
        self.container.add_class(&self.config.hidden_class);
        log::debug!("Cleared legend, now {}", self.visibility());
    }

    /// Show the container again without touching its content
    pub fn unhide(&mut self) {
        self.container.remove_class(&self.config.hidden_class);
        log::debug!("Legend is {}", self.visibility());
    }

    pub fn visibility(&self) -> Visibility {
        if self.is_hidden() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.container.has_class(&self.config.hidden_class)
    }

    pub fn content(&self) -> &LegendContent {
        &self.content
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn config(&self) -> &LegendConfig {
        &self.config
    }

    pub fn into_container(self) -> Container {
        self.container
    }

    pub fn to_html(&self) -> String {
        self.container.to_html()
    }

    fn populate(&mut self, content: LegendContent) {
        self.clear();
        for node in content.render(&self.config) {
            self.container.append_child(node);
        }
        self.content = content;
        self.unhide();
    }
}

pub(crate) fn title_node(title: &str, config: &LegendConfig) -> Node {
    Element::new("div")
        .with_class(&config.title_class)
        .with_text(title)
        .into()
}
