//! XML element view: the parsed-tree surface the body reader walks.
//!
//! This crate never parses raw XML itself — an upstream stage (or a test)
//! builds this tree and hands it to the readers. The view is deliberately
//! small: name, attributes, children, and a handful of child-lookup
//! helpers. Namespace prefixes are already folded into the name
//! (`"w:p"`, `"a:blip"`, …) by the producing stage.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A node in the parsed XML tree: either an element or a text node.
///
/// Comments and processing instructions are dropped by the producing
/// stage, so readers only ever see these two variants.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with a prefixed name, attributes, and ordered children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<XmlNode>,
}

/// Shared sentinel returned by `find_child_or_null` for missing children.
///
/// Modelling "no such child" as an element with no attributes and no
/// children lets call sites chain attribute probes without branching:
/// `e.find_child_or_null("w:rPr").find_child_or_null("w:b").attribute("w:val")`.
static NULL_ELEMENT: LazyLock<XmlElement> = LazyLock::new(XmlElement::default);

impl XmlElement {
    /// Returns the value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the first child element with the given name.
    pub fn find_child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find_map(|child| match child {
            XmlNode::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// Returns the first child element with the given name, or the shared
    /// empty sentinel if there is none.
    pub fn find_child_or_null(&self, name: &str) -> &XmlElement {
        self.find_child(name).unwrap_or(&NULL_ELEMENT)
    }

    /// Returns all child elements with the given name, in document order.
    pub fn find_children(&self, name: &str) -> Vec<&XmlElement> {
        self.children
            .iter()
            .filter_map(|child| match child {
                XmlNode::Element(element) if element.name == name => Some(element),
                _ => None,
            })
            .collect()
    }

    /// Concatenates all descendant text nodes, in document order.
    pub fn inner_text(&self) -> String {
        let mut text = String::new();
        collect_text(&self.children, &mut text);
        text
    }
}

fn collect_text(children: &[XmlNode], out: &mut String) {
    for child in children {
        match child {
            XmlNode::Text(value) => out.push_str(value),
            XmlNode::Element(element) => collect_text(&element.children, out),
        }
    }
}

impl From<XmlElement> for XmlNode {
    fn from(element: XmlElement) -> Self {
        XmlNode::Element(element)
    }
}

// ── Construction helpers ─────────────────────────────────────────────────────

/// Builds an element with the given name, attributes, and children.
///
/// Used by the part readers' tests and by upstream tree producers.
pub fn element(name: &str, attributes: &[(&str, &str)], children: Vec<XmlNode>) -> XmlElement {
    XmlElement {
        name: name.to_string(),
        attributes: attributes
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
        children,
    }
}

/// Builds a text node.
pub fn text(value: &str) -> XmlNode {
    XmlNode::Text(value.to_string())
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
