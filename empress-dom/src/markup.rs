//! HTML serialization for [`Node`] trees.

use crate::node::{Element, Node};

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Split a `style` attribute into `(property, value)` declarations
pub fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let property = property.trim();
            if property.is_empty() {
                return None;
            }
            Some((property.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Drop anything between `<` and `>` and decode the five predefined XML
/// entities. Good enough for text content of trusted pre-rendered markup;
/// numeric character references are left as written.
pub fn strip_tags(markup: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    unescape(&out)
}

/// Decode `&lt;`, `&gt;`, `&quot;`, `&apos;` and `&amp;`
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let decoded = [
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&apos;", '\''),
            ("&amp;", '&'),
        ]
        .into_iter()
        .find(|(entity, _)| tail.starts_with(entity));
        match decoded {
            Some((entity, c)) => {
                out.push(c);
                rest = &tail[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

pub(crate) fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Markup(raw) => out.push_str(raw),
    }
}

pub(crate) fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);
    write_attributes(
        out,
        &element.classes,
        &style_text(element),
        element
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );
    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

pub(crate) fn write_attributes<'a>(
    out: &mut String,
    classes: &[String],
    style: &str,
    attributes: impl Iterator<Item = (&'a str, &'a str)>,
) {
    if !classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape_attr(&classes.join(" "))));
    }
    if !style.is_empty() {
        out.push_str(&format!(" style=\"{}\"", escape_attr(style)));
    }
    for (name, value) in attributes {
        out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }
}

fn style_text(element: &Element) -> String {
    element
        .style
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
