//! Format trait and registry
//!
//! A format turns the reduced verses of one book into the text of one output
//! file. Formats are looked up by name so that callers (the CLI, tests) can pick
//! which renderings to produce.

use crate::error::BabelError;
use crate::ir::verse::BookVerses;
use std::collections::HashMap;

/// Knobs shared by the output formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render the alternate chant variants alongside the primary one
    pub include_alternates: bool,
    /// Indentation added per nesting level in the names format
    pub indent: String,
    /// Leading (key, value) rows of the CSV format; `{book}` expands to the book name
    pub csv_header: Vec<(String, String)>,
    /// Skip the CSV header rows
    pub exclude_csv_header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            include_alternates: false,
            indent: "    ".to_string(),
            csv_header: Vec::new(),
            exclude_csv_header: false,
        }
    }
}

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn folder(&self) -> &str {
///         "my-format"
///     }
///
///     fn file_extension(&self) -> &str {
///         "txt"
///     }
///
///     fn serialize(
///         &self,
///         book: &BookVerses,
///         title: &str,
///         options: &RenderOptions,
///     ) -> Result<String, BabelError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "csv", "unicode-names")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Output folder name, before any path qualifier is appended
    fn folder(&self) -> &str;

    /// File extension without the leading dot
    fn file_extension(&self) -> &str;

    /// Serialize the verses of one book; `title` names the output (usually the
    /// English book name)
    fn serialize(
        &self,
        book: &BookVerses,
        title: &str,
        options: &RenderOptions,
    ) -> Result<String, BabelError>;
}

/// Registry of output formats
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, BabelError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| BabelError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize a book using the specified format
    pub fn serialize(
        &self,
        book: &BookVerses,
        title: &str,
        format: &str,
        options: &RenderOptions,
    ) -> Result<String, BabelError> {
        self.get(format)?.serialize(book, title, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::formats::csv::CsvFormat);
        registry.register(crate::formats::unicode_names::UnicodeNamesFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
