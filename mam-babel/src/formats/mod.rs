//! Format implementations
//!
//! `mam_xml` reads source documents; `csv` and `unicode_names` render reduced
//! books.

pub mod csv;
pub mod mam_xml;
pub mod unicode_names;

pub use self::csv::CsvFormat;
pub use self::unicode_names::UnicodeNamesFormat;
