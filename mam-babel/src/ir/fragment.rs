//! Output fragments produced by the reducer.

use crate::error::BabelError;
use serde::{Deserialize, Serialize};

/// A unit of output: a plain text run or a structured element.
///
/// Serialized untagged so that a JSON string is a text run and an object is an
/// element, which keeps dumped fragments readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fragment {
    Text(String),
    Element(Element),
}

/// A structured element. Empty `contents` marks a self-closing marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<Fragment>,
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Fragment::Element(Element::new(tag))
    }

    /// Element with a single `class` attribute wrapping `contents`.
    pub fn span(class: impl Into<String>, contents: Vec<Fragment>) -> Self {
        Fragment::Element(
            Element::new("span")
                .with_attr("class", class)
                .with_contents(contents),
        )
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attrs: Vec::new(),
            contents: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn with_contents(mut self, contents: Vec<Fragment>) -> Self {
        self.contents = contents;
        self
    }

    pub fn is_self_closing(&self) -> bool {
        self.contents.is_empty()
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Fragment::Element(element)
    }
}

/// Plain-text rendering: all text runs concatenated, structure stripped.
pub fn plain_text(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    push_plain_text(fragments, &mut out);
    out
}

fn push_plain_text(fragments: &[Fragment], out: &mut String) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Element(element) => push_plain_text(&element.contents, out),
        }
    }
}

/// Read a fragment sequence from JSON, rejecting values of any other shape.
pub fn fragments_from_json(source: &str) -> Result<Vec<Fragment>, BabelError> {
    serde_json::from_str(source).map_err(|e| BabelError::UnexpectedFragment(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_strips_structure() {
        let fragments = vec![
            Fragment::text("ab"),
            Fragment::span("x", vec![Fragment::text("c"), Fragment::element("br")]),
            Fragment::text("d"),
        ];
        assert_eq!(plain_text(&fragments), "abcd");
    }

    #[test]
    fn json_shapes() {
        let fragments =
            fragments_from_json(r#"["a", {"tag": "span", "attrs": [["class", "x"]]}]"#)
                .expect("valid fragments");
        assert_eq!(
            fragments,
            vec![
                Fragment::text("a"),
                Element::new("span").with_attr("class", "x").into()
            ]
        );
    }

    #[test]
    fn json_rejects_other_shapes() {
        for bad in [r#"[42]"#, r#"[null]"#, r#"[{"name": "span"}]"#] {
            match fragments_from_json(bad) {
                Err(BabelError::UnexpectedFragment(_)) => {}
                other => panic!("expected UnexpectedFragment for {bad}, got {other:?}"),
            }
        }
    }
}
