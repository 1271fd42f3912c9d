//! MAM-XML input
//!
//! MAM-XML documents hold one book group: one or more books whose verses are
//! `verse` elements carrying an `osisID` such as `Gen.1.1`. Everything below a
//! verse is reduced by the handler registry.

mod parser;

pub use parser::parse_to_source;

use crate::error::BabelError;
use crate::ir::source::SourceNode;

pub const VERSE_TAG: &str = "verse";
pub const OSIS_ID_ATTR: &str = "osisID";

/// Parse a MAM-XML document and return its verse subtrees in document order.
pub fn parse_verses(source: &str) -> Result<Vec<SourceNode>, BabelError> {
    let root = parse_to_source(source)?;
    Ok(root
        .descendants_with_tag(VERSE_TAG)
        .into_iter()
        .cloned()
        .collect())
}

/// The `osisID` of a verse node.
pub fn osis_id(verse: &SourceNode) -> Result<&str, BabelError> {
    verse
        .attribute(OSIS_ID_ATTR)
        .ok_or_else(|| BabelError::MissingAttribute {
            tag: verse.tag.clone(),
            attribute: OSIS_ID_ATTR.to_string(),
        })
}
