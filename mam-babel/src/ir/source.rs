//! Source tree: the attributed element tree handed to the reducer.

use serde::Serialize;

/// Reserved attribute selecting the handler variant of a tag.
pub const CLASS_ATTR: &str = "class";
/// Reserved attribute carrying the text of a leaf node.
pub const TEXT_ATTR: &str = "text";

/// A tagged node with ordered attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceNode {
    pub tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SourceNode>,
}

impl SourceNode {
    pub fn new(tag: impl Into<String>) -> Self {
        SourceNode {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter; replaces an existing value for `key`.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
        self
    }

    pub fn with_child(mut self, child: SourceNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = SourceNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// A leaf node carrying `text` in the reserved text attribute.
    pub fn text_leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        SourceNode::new(tag).with_attr(TEXT_ATTR, text)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn class(&self) -> Option<&str> {
        self.attribute(CLASS_ATTR)
    }

    pub fn text(&self) -> Option<&str> {
        self.attribute(TEXT_ATTR)
    }

    /// Pre-order walk collecting every node (self included) with the given tag.
    pub fn descendants_with_tag<'a>(&'a self, tag: &str) -> Vec<&'a SourceNode> {
        let mut found = Vec::new();
        collect_with_tag(self, tag, &mut found);
        found
    }
}

fn collect_with_tag<'a>(node: &'a SourceNode, tag: &str, found: &mut Vec<&'a SourceNode>) {
    if node.tag == tag {
        found.push(node);
    }
    for child in &node.children {
        collect_with_tag(child, tag, found);
    }
}
