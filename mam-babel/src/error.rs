//! Error types for reduction, rendering and publishing

use thiserror::Error;

/// Errors that can occur while reducing verse trees or writing their renderings.
///
/// None of these are recoverable: inputs are deterministic, so a retry would
/// reproduce the same failure. Callers abort the whole run.
#[derive(Debug, Error)]
pub enum BabelError {
    /// No handler registered for a (tag, class) pair found in the input
    #[error("no handler for tag '{tag}' with class {}", display_class(.class))]
    SchemaGap { tag: String, class: Option<String> },
    /// A node that violates the tree invariants (e.g. a text leaf with children)
    #[error("malformed <{tag}> node: {reason}")]
    MalformedNode { tag: String, reason: String },
    /// A fragment that is neither a text run nor an element
    #[error("unexpected fragment shape: {0}")]
    UnexpectedFragment(String),
    /// Some, but not all, alternate renderings are present for a verse
    #[error("inconsistent variants for {verse}: {reason}")]
    InconsistentVariants { verse: String, reason: String },
    /// A required attribute is missing from a source node
    #[error("<{tag}> is missing required attribute '{attribute}'")]
    MissingAttribute { tag: String, attribute: String },
    /// Book id not present in the book tables
    #[error("unknown book '{0}'")]
    UnknownBook(String),
    /// Character has no entry in the Hebrew short-name table
    #[error("no short name for {}", codepoint(.0))]
    UnknownCharacter(char),
    /// Two characters of the short-name table map to the same mnemonic
    #[error("duplicate short name '{name}' for {} and {}", codepoint(.first), codepoint(.second))]
    DuplicateShortName {
        name: &'static str,
        first: char,
        second: char,
    },
    /// Format not found in registry
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    /// Error while parsing input
    #[error("parse error: {0}")]
    Parse(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_class(class: &Option<String>) -> String {
    match class {
        Some(class) => format!("'{class}'"),
        None => "<none>".to_string(),
    }
}

fn codepoint(c: &char) -> String {
    format!("U+{:04X}", *c as u32)
}
