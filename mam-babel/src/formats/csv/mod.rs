//! Tabular (CSV) format
//!
//! One row per verse: a `Book chapter:verse` label followed by the plain text of
//! each rendered variant (primary first). Optional `key,value` header rows come
//! before the verse rows. Records end in CRLF, as spreadsheet-style CSV does.

use crate::books::english_name;
use crate::error::BabelError;
use crate::format::{Format, RenderOptions};
use crate::ir::fragment::plain_text;
use crate::ir::verse::BookVerses;
use ::csv::{QuoteStyle, Terminator, WriterBuilder};

/// Placeholder in header values replaced by the English book name.
pub const BOOK_PLACEHOLDER: &str = "{book}";

pub fn serialize_book(book: &BookVerses, options: &RenderOptions) -> Result<String, BabelError> {
    let book_name = english_name(&book.book)?;
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    if !options.exclude_csv_header {
        for (key, value) in &options.csv_header {
            writer.write_record([
                key.as_str(),
                value.replace(BOOK_PLACEHOLDER, book_name).as_str(),
            ])?;
        }
    }

    for record in &book.verses {
        let mut row = vec![format!(
            "{} {}:{}",
            book_name, record.key.chapter, record.key.verse
        )];
        row.push(plain_text(&record.dual));
        if options.include_alternates {
            row.push(record.alef.as_deref().map(plain_text).unwrap_or_default());
            row.push(record.bet.as_deref().map(plain_text).unwrap_or_default());
        }
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BabelError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| BabelError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Format implementation for the CSV format
pub struct CsvFormat;

impl Format for CsvFormat {
    fn name(&self) -> &str {
        "csv"
    }

    fn description(&self) -> &str {
        "One row per verse with the plain text of each variant"
    }

    fn folder(&self) -> &str {
        "csv"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn serialize(
        &self,
        book: &BookVerses,
        _title: &str,
        options: &RenderOptions,
    ) -> Result<String, BabelError> {
        serialize_book(book, options)
    }
}
