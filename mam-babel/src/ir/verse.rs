//! Reduced verses and their grouping by book.

use crate::error::BabelError;
use crate::ir::fragment::Fragment;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Identifies a verse: book, chapter, verse and versification tradition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VerseKey {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub vtrad: String,
}

impl VerseKey {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32, vtrad: impl Into<String>) -> Self {
        VerseKey {
            book: book.into(),
            chapter,
            verse,
            vtrad: vtrad.into(),
        }
    }

    /// Parse an OSIS verse id such as `Gen.1.1`.
    pub fn from_osis_id(osis_id: &str, vtrad: &str) -> Result<Self, BabelError> {
        let bad = || BabelError::Parse(format!("malformed osisID '{osis_id}'"));
        let mut parts = osis_id.split('.');
        let (Some(book), Some(chapter), Some(verse), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        if book.is_empty() {
            return Err(bad());
        }
        let chapter = chapter.parse().map_err(|_| bad())?;
        let verse = verse.parse().map_err(|_| bad())?;
        Ok(VerseKey::new(book, chapter, verse, vtrad))
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{} in vtrad {}",
            self.book, self.chapter, self.verse, self.vtrad
        )
    }
}

/// The named renderings a verse may carry, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Primary rendering (both chant traditions merged)
    Dual,
    /// First alternate chant rendering
    Alef,
    /// Second alternate chant rendering
    Bet,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Dual, Variant::Alef, Variant::Bet];

    pub fn label(self) -> &'static str {
        match self {
            Variant::Dual => "cant_dual",
            Variant::Alef => "cant_alef",
            Variant::Bet => "cant_bet",
        }
    }
}

/// One reduced verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseRecord {
    pub key: VerseKey,
    pub dual: Vec<Fragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alef: Option<Vec<Fragment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet: Option<Vec<Fragment>>,
}

impl VerseRecord {
    pub fn new(key: VerseKey, dual: Vec<Fragment>) -> Self {
        VerseRecord {
            key,
            dual,
            alef: None,
            bet: None,
        }
    }

    pub fn with_alternates(mut self, alef: Vec<Fragment>, bet: Vec<Fragment>) -> Self {
        self.alef = Some(alef);
        self.bet = Some(bet);
        self
    }

    /// The fragments of `variant`, if present. Empty alternates count as absent.
    pub fn variant(&self, variant: Variant) -> Option<&[Fragment]> {
        let fragments = match variant {
            Variant::Dual => return Some(&self.dual),
            Variant::Alef => self.alef.as_deref(),
            Variant::Bet => self.bet.as_deref(),
        };
        fragments.filter(|f| !f.is_empty())
    }

    /// Whether the alternates are present; errors when only one of them is.
    pub fn has_alternates(&self) -> Result<bool, BabelError> {
        match (self.variant(Variant::Alef), self.variant(Variant::Bet)) {
            (Some(_), Some(_)) => Ok(true),
            (None, None) => Ok(false),
            (alef, _) => {
                let (present, missing) = if alef.is_some() {
                    (Variant::Alef, Variant::Bet)
                } else {
                    (Variant::Bet, Variant::Alef)
                };
                Err(BabelError::InconsistentVariants {
                    verse: self.key.to_string(),
                    reason: format!(
                        "{} is present but {} is not",
                        present.label(),
                        missing.label()
                    ),
                })
            }
        }
    }
}

/// The verses of one book, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookVerses {
    pub book: String,
    pub verses: Vec<VerseRecord>,
}

impl BookVerses {
    pub fn new(book: impl Into<String>) -> Self {
        BookVerses {
            book: book.into(),
            verses: Vec::new(),
        }
    }

    /// Join alternate renderings onto the primary records by verse key.
    ///
    /// Verses missing from a list keep `None` for that variant; entries with no
    /// matching primary record are ignored.
    pub fn attach_alternates(
        &mut self,
        alef: Vec<(VerseKey, Vec<Fragment>)>,
        bet: Vec<(VerseKey, Vec<Fragment>)>,
    ) {
        let mut alef: HashMap<_, _> = alef.into_iter().collect();
        let mut bet: HashMap<_, _> = bet.into_iter().collect();
        for record in &mut self.verses {
            if let Some(fragments) = alef.remove(&record.key) {
                record.alef = Some(fragments);
            }
            if let Some(fragments) = bet.remove(&record.key) {
                record.bet = Some(fragments);
            }
        }
    }
}

/// Verses of one source document, grouped by book in order of first encounter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookGroup {
    pub books: Vec<BookVerses>,
}

impl BookGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its book's list, creating the list on first use.
    pub fn push(&mut self, record: VerseRecord) {
        let index = match self.books.iter().position(|b| b.book == record.key.book) {
            Some(index) => index,
            None => {
                self.books.push(BookVerses::new(record.key.book.clone()));
                self.books.len() - 1
            }
        };
        self.books[index].verses.push(record);
    }

    pub fn get(&self, book: &str) -> Option<&BookVerses> {
        self.books.iter().find(|b| b.book == book)
    }

    pub fn verse_count(&self) -> usize {
        self.books.iter().map(|b| b.verses.len()).sum()
    }
}
