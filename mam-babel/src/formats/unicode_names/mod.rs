//! Unicode-names format
//!
//! Spells out every character of every verse as a short name, one text piece
//! per line, so that two renderings of the same text can be diffed down to
//! individual points and accents.
//!
//! ## Example
//!
//! ```text
//! unicode_names Genesis
//! Gen 1:1 in vtrad sef
//! v,·,:,r,‥,α,$,·sh,i,(ti),y,τ
//! SPACE
//! START span class=mam-kq
//!     v,r,α
//! STOP span class=mam-kq
//!
//! ```

mod serializer;

pub use serializer::{serialize_fragments, serialize_verse};

use crate::error::BabelError;
use crate::format::{Format, RenderOptions};
use crate::ir::verse::{BookVerses, VerseRecord};

/// Serialize a book to the names format.
pub fn serialize_book(
    book: &BookVerses,
    title: &str,
    options: &RenderOptions,
) -> Result<String, BabelError> {
    let mut out = format!("unicode_names {title}\n");
    for record in &book.verses {
        let lines = if options.include_alternates {
            serialize_verse(record, &options.indent)?
        } else {
            serialize_verse(
                &VerseRecord::new(record.key.clone(), record.dual.clone()),
                &options.indent,
            )?
        };
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
    }
    Ok(out)
}

/// Format implementation for the Unicode-names format
pub struct UnicodeNamesFormat;

impl Format for UnicodeNamesFormat {
    fn name(&self) -> &str {
        "unicode-names"
    }

    fn description(&self) -> &str {
        "One line per text piece, characters spelled out as short names"
    }

    fn folder(&self) -> &str {
        "unicode-names"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }

    fn serialize(
        &self,
        book: &BookVerses,
        title: &str,
        options: &RenderOptions,
    ) -> Result<String, BabelError> {
        serialize_book(book, title, options)
    }
}
