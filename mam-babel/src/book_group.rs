//! Reads one MAM-XML book group into reduced verses grouped by book.

use crate::books;
use crate::common::reduce::Reducer;
use crate::error::BabelError;
use crate::formats::mam_xml::{osis_id, parse_verses};
use crate::ir::source::SourceNode;
use crate::ir::verse::{BookGroup, VerseKey, VerseRecord};
use crate::registry::HandlerRegistry;
use tracing::{debug, info};

/// Parse `source`, reduce every verse and group the results by book.
pub fn read_book_group(
    source: &str,
    handlers: &HandlerRegistry,
    vtrad: &str,
) -> Result<BookGroup, BabelError> {
    let verses = parse_verses(source)?;
    reduce_verses(&verses, &Reducer::new(handlers), vtrad)
}

/// Reduce verse trees one at a time, appending each to its book's list.
pub fn reduce_verses(
    verses: &[SourceNode],
    reducer: &Reducer<'_>,
    vtrad: &str,
) -> Result<BookGroup, BabelError> {
    let mut group = BookGroup::new();
    for verse in verses {
        let key = verse_key(verse, vtrad)?;
        debug!(verse = %key, "reducing");
        let fragments = reducer.reduce(verse)?;
        group.push(VerseRecord::new(key, fragments));
    }
    info!(
        books = group.books.len(),
        verses = group.verse_count(),
        "reduced book group"
    );
    Ok(group)
}

fn verse_key(verse: &SourceNode, vtrad: &str) -> Result<VerseKey, BabelError> {
    let key = VerseKey::from_osis_id(osis_id(verse)?, vtrad)?;
    if !books::is_known(&key.book) {
        return Err(BabelError::UnknownBook(key.book));
    }
    Ok(key)
}
