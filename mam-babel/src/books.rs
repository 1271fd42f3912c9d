//! Book identifiers of the Hebrew Bible.
//!
//! Books are identified by their OSIS abbreviation, which is also what MAM-XML
//! uses in `osisID`. Output files and CSV labels use the Sefaria English name.

use crate::error::BabelError;

/// (OSIS id, Sefaria English name), in canonical order.
pub const BOOKS: &[(&str, &str)] = &[
    ("Gen", "Genesis"),
    ("Exod", "Exodus"),
    ("Lev", "Leviticus"),
    ("Num", "Numbers"),
    ("Deut", "Deuteronomy"),
    ("Josh", "Joshua"),
    ("Judg", "Judges"),
    ("1Sam", "I Samuel"),
    ("2Sam", "II Samuel"),
    ("1Kgs", "I Kings"),
    ("2Kgs", "II Kings"),
    ("Isa", "Isaiah"),
    ("Jer", "Jeremiah"),
    ("Ezek", "Ezekiel"),
    ("Hos", "Hosea"),
    ("Joel", "Joel"),
    ("Amos", "Amos"),
    ("Obad", "Obadiah"),
    ("Jonah", "Jonah"),
    ("Mic", "Micah"),
    ("Nah", "Nahum"),
    ("Hab", "Habakkuk"),
    ("Zeph", "Zephaniah"),
    ("Hag", "Haggai"),
    ("Zech", "Zechariah"),
    ("Mal", "Malachi"),
    ("Ps", "Psalms"),
    ("Prov", "Proverbs"),
    ("Job", "Job"),
    ("Song", "Song of Songs"),
    ("Ruth", "Ruth"),
    ("Lam", "Lamentations"),
    ("Eccl", "Ecclesiastes"),
    ("Esth", "Esther"),
    ("Dan", "Daniel"),
    ("Ezra", "Ezra"),
    ("Neh", "Nehemiah"),
    ("1Chr", "I Chronicles"),
    ("2Chr", "II Chronicles"),
];

pub fn is_known(book: &str) -> bool {
    BOOKS.iter().any(|(id, _)| *id == book)
}

/// Sefaria English name of an OSIS book id.
pub fn english_name(book: &str) -> Result<&'static str, BabelError> {
    BOOKS
        .iter()
        .find(|(id, _)| *id == book)
        .map(|(_, name)| *name)
        .ok_or_else(|| BabelError::UnknownBook(book.to_string()))
}
