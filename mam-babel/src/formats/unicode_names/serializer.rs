//! Line serializer for the Unicode-names format.
//!
//! Text runs are split into separator and non-separator pieces, and every
//! piece becomes one line of comma-joined character names. Elements become a
//! `START` line, their contents one level deeper, and a `STOP` line at the
//! `START` line's level; elements without contents only get the `START` line.

use crate::common::split::split_run;
use crate::error::BabelError;
use crate::ir::fragment::{Element, Fragment};
use crate::ir::verse::{Variant, VerseRecord};
use crate::names::comma_names;

/// Serialize a fragment sequence into lines.
///
/// With a `label`, the label is emitted first and the fragments one level deeper.
pub fn serialize_fragments(fragments: &[Fragment], label: Option<&str>, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let depth = match label {
        Some(label) => {
            lines.push(label.to_string());
            1
        }
        None => 0,
    };
    write_fragments(fragments, depth, indent, &mut lines);
    lines
}

fn write_fragments(fragments: &[Fragment], depth: usize, indent: &str, lines: &mut Vec<String>) {
    let prefix = indent.repeat(depth);
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => {
                for piece in split_run(text) {
                    lines.push(format!("{prefix}{}", comma_names(&piece)));
                }
            }
            Fragment::Element(element) => {
                let tag_line = tag_line(element);
                lines.push(format!("{prefix}START {tag_line}"));
                if !element.is_self_closing() {
                    write_fragments(&element.contents, depth + 1, indent, lines);
                    lines.push(format!("{prefix}STOP {tag_line}"));
                }
            }
        }
    }
}

/// `<tag> <k=v ...>`; the space after the tag is kept even without attributes.
fn tag_line(element: &Element) -> String {
    let attrs: Vec<String> = element
        .attrs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    format!("{} {}", element.tag, attrs.join(" "))
}

/// Serialize one verse: identifier line, variant blocks, blank line.
pub fn serialize_verse(record: &VerseRecord, indent: &str) -> Result<Vec<String>, BabelError> {
    let mut lines = vec![record.key.to_string()];
    if record.has_alternates()? {
        for variant in Variant::ALL {
            let fragments = record.variant(variant).unwrap_or_default();
            lines.extend(serialize_fragments(fragments, Some(variant.label()), indent));
        }
    } else {
        lines.extend(serialize_fragments(&record.dual, None, indent));
    }
    lines.push(String::new());
    Ok(lines)
}
