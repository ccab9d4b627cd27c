use serde::{Deserialize, Serialize};

use crate::{
    markup,
    node::{collect_by_tag, Element, Node},
};

/// A region of the page that a widget renders into.
///
/// Only the container's own class list and its children are modelled; the
/// surrounding page decides what a class such as `hidden` means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub children: Vec<Node>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Element children only, like `Element.children` in the DOM
    pub fn child_elements(&self) -> Vec<&Element> {
        self.children.iter().filter_map(Node::as_element).collect()
    }

    pub fn child_element(&self, index: usize) -> Option<&Element> {
        self.children.iter().filter_map(Node::as_element).nth(index)
    }

    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_by_tag(&self.children, tag, &mut found);
        found
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child and return a reference to it
    pub fn append_child(&mut self, node: impl Into<Node>) -> &Node {
        self.children.push(node.into());
        &self.children[self.children.len() - 1]
    }

    /// Remove every child node, equivalent to `innerHTML = ""`
    pub fn clear_children(&mut self) {
        self.children.clear();
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

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            markup::write_node(&mut out, child);
        }
        out
    }

    /// The container itself serialized as a `<div>`
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div");
        let id = self.id.iter().map(|id| ("id", id.as_str()));
        markup::write_attributes(&mut out, &self.classes, "", id);
        out.push('>');
        out.push_str(&self.inner_html());
        out.push_str("</div>");
        out
    }
}
