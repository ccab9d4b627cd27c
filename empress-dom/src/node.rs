use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::markup;

pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    #[default]
    Html,
    Svg,
}

impl Namespace {
    pub fn uri(&self) -> &'static str {
        match self {
            Namespace::Html => HTML_NAMESPACE,
            Namespace::Svg => SVG_NAMESPACE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-rendered markup inserted as-is (the equivalent of assigning `innerHTML`)
    Markup(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            _ => &[],
        }
    }

    /// Text content with markup stripped
    pub fn inner_text(&self) -> String {
        match self {
            Node::Element(element) => element.inner_text(),
            Node::Text(text) => text.clone(),
            Node::Markup(raw) => markup::strip_tags(raw),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        markup::write_node(&mut out, self);
        out
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub namespace: Namespace,
    pub classes: Vec<String>,
    pub style: IndexMap<String, String>,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Element created in the SVG namespace. SVG tag names are case sensitive.
    pub fn new_svg(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            namespace: Namespace::Svg,
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.set_style(property, value);
        self
    }

    /// Apply a `style` attribute string such as `"display: block; margin: auto;"`
    pub fn with_style_text(mut self, style: &str) -> Self {
        for (property, value) in markup::parse_style(style) {
            self.set_style(&property, &value);
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Replace all children with a single text node
    pub fn with_text(mut self, text: &str) -> Self {
        self.children = vec![Node::Text(text.to_string())];
        self
    }

    /// Replace all children with pre-rendered markup
    pub fn with_markup(mut self, markup: &str) -> Self {
        self.children = vec![Node::Markup(markup.to_string())];
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Tag name as reported by a browser: upper case for HTML elements,
    /// unchanged for SVG elements.
    pub fn tag_name(&self) -> String {
        match self.namespace {
            Namespace::Html => self.tag.to_ascii_uppercase(),
            Namespace::Svg => self.tag.clone(),
        }
    }

    pub fn namespace_uri(&self) -> &'static str {
        self.namespace.uri()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style
            .insert(property.trim().to_string(), value.trim().to_string());
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Element children only, skipping text and raw markup
    pub fn child_elements(&self) -> Vec<&Element> {
        self.children.iter().filter_map(Node::as_element).collect()
    }

    /// All descendant elements with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_by_tag(&self.children, tag, &mut found);
        found
    }

    pub fn inner_text(&self) -> String {
        self.children.iter().map(Node::inner_text).collect()
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            markup::write_node(&mut out, child);
        }
        out
    }

    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        markup::write_element(&mut out, self);
        out
    }
}

pub(crate) fn collect_by_tag<'a>(nodes: &'a [Node], tag: &str, found: &mut Vec<&'a Element>) {
    for node in nodes {
        let Node::Element(element) = node else {
            continue;
        };
        if element.tag.eq_ignore_ascii_case(tag) {
            found.push(element);
        }
        collect_by_tag(&element.children, tag, found);
    }
}
