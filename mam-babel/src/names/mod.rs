//! Short names for characters.
//!
//! Every character of a rendered line is spelled out as a short name so that
//! two renderings can be diffed line by line even where they differ only in
//! invisible marks. Lookup order:
//!
//! 1. the Hebrew mnemonic tables ([`tables`]): letters, points, punctuation
//!    and accents;
//! 2. a few non-Hebrew characters with fixed names (e.g. `CGJ`);
//! 3. the Unicode character name, with a known two-word prefix such as
//!    `HEBREW MARK` collapsed to a code (`HMA`) when the name has three or more
//!    words.
//!
//! The tables are built once per process. Building them checks that no
//! mnemonic is used twice and panics otherwise: the tables are constants, so a
//! duplicate is a programming error that must surface before any output.

pub mod tables;

use crate::error::BabelError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static SHORT_NAMES: Lazy<ShortNames> = Lazy::new(|| {
    ShortNames::new().unwrap_or_else(|e| panic!("invalid short-name tables: {e}"))
});

/// Read-only lookup maps built from the mnemonic tables.
#[derive(Debug, Clone)]
pub struct ShortNames {
    hebrew: HashMap<char, &'static str>,
    accents: HashMap<char, &'static str>,
    misc: HashMap<char, &'static str>,
    prefixes: HashMap<String, &'static str>,
}

impl ShortNames {
    /// Build the maps from the standard tables.
    pub fn new() -> Result<Self, BabelError> {
        Self::from_tables(
            &[
                tables::LETTERS,
                tables::POINTS,
                tables::PUNCTUATION,
                tables::ACCENTS,
            ],
            tables::ACCENTS,
            tables::MISC,
        )
    }

    /// Build the maps from explicit tables, rejecting duplicate mnemonics
    /// across all of `hebrew`.
    pub fn from_tables(
        hebrew: &[&[(char, &'static str)]],
        accents: &[(char, &'static str)],
        misc: &[(char, &'static str)],
    ) -> Result<Self, BabelError> {
        let mut seen: HashMap<&'static str, char> = HashMap::new();
        let mut map = HashMap::new();
        for &(c, name) in hebrew.iter().flat_map(|table| table.iter()) {
            if let Some(&first) = seen.get(name) {
                return Err(BabelError::DuplicateShortName {
                    name,
                    first,
                    second: c,
                });
            }
            seen.insert(name, c);
            map.insert(c, name);
        }
        Ok(ShortNames {
            hebrew: map,
            accents: accents.iter().copied().collect(),
            misc: misc.iter().copied().collect(),
            prefixes: tables::NAME_PREFIXES
                .iter()
                .map(|&((first, second), code)| (format!("{first} {second}"), code))
                .collect(),
        })
    }

    /// The process-wide tables.
    pub fn global() -> &'static ShortNames {
        &SHORT_NAMES
    }

    pub fn shorten(&self, c: char) -> String {
        if let Some(name) = self.hebrew.get(&c).or_else(|| self.misc.get(&c)) {
            return name.to_string();
        }
        let Some(fullname) = unicode_names2::name(c).map(|n| n.to_string()) else {
            return format!("U+{:04X}", c as u32);
        };
        let words: Vec<&str> = fullname.split_whitespace().collect();
        if words.len() < 3 {
            return fullname;
        }
        let head = format!("{} {}", words[0], words[1]);
        let prefix = match self.prefixes.get(head.as_str()) {
            Some(code) => code.to_string(),
            None => head,
        };
        format!("{} {}", prefix, words[2..].join(" "))
    }

    pub fn hebrew_name(&self, c: char) -> Option<&'static str> {
        self.hebrew.get(&c).copied()
    }

    pub fn accent_name(&self, c: char) -> Option<&'static str> {
        self.accents.get(&c).copied()
    }
}

/// Short name of a single character.
pub fn shorten(c: char) -> String {
    ShortNames::global().shorten(c)
}

/// Accent mnemonic of `c`, or `None` when `c` is not an accent.
pub fn accent_name(c: char) -> Option<&'static str> {
    ShortNames::global().accent_name(c)
}

/// Short names of every character of `s`.
pub fn short_names(s: &str) -> Vec<String> {
    s.chars().map(shorten).collect()
}

/// Comma-joined short names of every character of `s`.
pub fn comma_names(s: &str) -> String {
    short_names(s).join(",")
}

/// Accent mnemonics of the accents in `s`, skipping other characters.
pub fn accent_names(s: &str) -> Vec<&'static str> {
    s.chars().filter_map(accent_name).collect()
}

/// Table mnemonics of every character of `s`; all must be in the Hebrew tables.
pub fn hechar_names(s: &str) -> Result<Vec<&'static str>, BabelError> {
    let names = ShortNames::global();
    s.chars()
        .map(|c| names.hebrew_name(c).ok_or(BabelError::UnknownCharacter(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_are_unique() {
        assert!(ShortNames::new().is_ok());
    }

    #[test]
    fn duplicates_are_rejected() {
        let letters: &[(char, &'static str)] = &[('\u{05D0}', "a")];
        let points: &[(char, &'static str)] = &[('\u{05B8}', "a")];
        match ShortNames::from_tables(&[letters, points], &[], &[]) {
            Err(BabelError::DuplicateShortName {
                name,
                first,
                second,
            }) => {
                assert_eq!(name, "a");
                assert_eq!(first, '\u{05D0}');
                assert_eq!(second, '\u{05B8}');
            }
            other => panic!("Expected DuplicateShortName, got {other:?}"),
        }
    }

    #[test]
    fn every_table_entry_round_trips() {
        for table in [
            tables::LETTERS,
            tables::POINTS,
            tables::PUNCTUATION,
            tables::ACCENTS,
            tables::MISC,
        ] {
            for &(c, name) in table {
                assert_eq!(shorten(c), name, "U+{:04X}", c as u32);
            }
        }
    }

    #[test]
    fn letters() {
        assert_eq!(comma_names("אב"), "α,v");
        assert_eq!(comma_names("שלום"), "$,l,w,m.");
    }

    #[test]
    fn short_unicode_names_are_verbatim() {
        assert_eq!(shorten(' '), "SPACE");
        assert_eq!(shorten('\u{00A0}'), "NO-BREAK SPACE");
        assert_eq!(shorten('A'), "LATIN CAPITAL LETTER A");
    }

    #[test]
    fn hebrew_prefixes_are_collapsed() {
        assert_eq!(shorten('\u{05C4}'), "HMA UPPER DOT");
        assert_eq!(shorten('\u{05C6}'), "HPU NUN HAFUKHA");
        assert_eq!(shorten('\u{05AF}'), "HMA MASORA CIRCLE");
    }

    #[test]
    fn unnamed_characters_use_code_point() {
        assert_eq!(shorten('\u{0378}'), "U+0378");
    }

    #[test]
    fn accents_only() {
        assert_eq!(accent_name('\u{0591}'), Some("⅄"));
        assert_eq!(accent_name('\u{05BD}'), Some("𝓂"));
        assert_eq!(accent_name('\u{05B8}'), None);
        assert_eq!(accent_names("\u{05D0}\u{05B8}\u{0591}\u{05BD}"), vec!["⅄", "𝓂"]);
    }

    #[test]
    fn hechar_names_require_table_entries() {
        assert_eq!(hechar_names("\u{05D0}\u{05B8}").unwrap(), vec!["α", "a"]);
        assert!(matches!(
            hechar_names("\u{05D0} "),
            Err(BabelError::UnknownCharacter(' '))
        ));
    }
}
