//! CLI-specific transforms
//!
//! This module defines the views available to `mam inspect`. Each transform
//! shows one stage of the pipeline:
//!
//! 1. **Ingest** - MAM-XML → source trees
//!    - `source-json`: the verse subtrees as parsed, one JSON object per verse
//!
//! 2. **Reduce** - source trees → fragments
//!    - `fragments-json`: the reduced verses grouped by book
//!
//! 3. **Render** - fragments → output text
//!    - `unicode-names`: the names listing of every book
//!    - `csv`: the CSV rows of every book
//!
//! ## Extra Parameters
//!
//! - `book`: restrict the output to one book (OSIS id, e.g. `Gen`)
//!
//! Example: `mam inspect group.xml fragments-json --extra-book Exod`

use mam_babel::book_group::read_book_group;
use mam_babel::books::english_name;
use mam_babel::formats::mam_xml::{osis_id, parse_verses};
use mam_babel::formats::unicode_names::serialize_fragments;
use mam_babel::ir::fragment::fragments_from_json;
use mam_babel::ir::verse::BookGroup;
use mam_babel::FormatRegistry;
use mam_config::MamConfig;
use std::collections::HashMap;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] =
    &["source-json", "fragments-json", "unicode-names", "csv"];

/// Execute a named transform on a MAM-XML source with optional extra parameters
///
/// # Arguments
///
/// * `source` - The MAM-XML text
/// * `transform_name` - The transform to apply (e.g., "fragments-json")
/// * `config` - Supplies handler rules, the vtrad and render options
/// * `extra_params` - Optional parameters for the transform
///
/// # Returns
///
/// The transformed output as a string, or an error message
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    config: &MamConfig,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let book = extra_params.get("book").map(String::as_str);

    match transform_name {
        "source-json" => {
            let verses = parse_verses(source).map_err(|e| format!("Transform failed: {e}"))?;
            let verses: Vec<_> = match book {
                Some(book) => verses
                    .into_iter()
                    .filter(|v| osis_id(v).is_ok_and(|id| id.split('.').next() == Some(book)))
                    .collect(),
                None => verses,
            };
            serde_json::to_string_pretty(&verses)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "fragments-json" => {
            let group = reduce_group(source, config, book)?;
            serde_json::to_string_pretty(&group)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "unicode-names" | "csv" => {
            let group = reduce_group(source, config, book)?;
            render_group(&group, transform_name, config)
        }
        _ => Err(format!(
            "Unknown transform: {transform_name}. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn reduce_group(source: &str, config: &MamConfig, book: Option<&str>) -> Result<BookGroup, String> {
    let mut group = read_book_group(source, &config.handler_registry(), &config.reduce.vtrad)
        .map_err(|e| format!("Transform failed: {e}"))?;
    if let Some(book) = book {
        group.books.retain(|b| b.book == book);
    }
    Ok(group)
}

/// Render every book of `group` in `format`, concatenated.
pub fn render_group(group: &BookGroup, format: &str, config: &MamConfig) -> Result<String, String> {
    let registry = FormatRegistry::default();
    let options = config.render_options();
    let mut out = String::new();
    for book in &group.books {
        let title = english_name(&book.book).map_err(|e| e.to_string())?;
        let text = registry
            .serialize(book, title, format, &options)
            .map_err(|e| format!("Serialization error: {e}"))?;
        out.push_str(&text);
    }
    Ok(out)
}

/// Names listing of a JSON fragment array, such as the `dual` of a verse
/// printed by the `fragments-json` transform.
pub fn fragment_names(json: &str, indent: &str) -> Result<String, String> {
    let fragments = fragments_from_json(json).map_err(|e| format!("Transform failed: {e}"))?;
    Ok(serialize_fragments(&fragments, None, indent)
        .into_iter()
        .map(|line| line + "\n")
        .collect())
}
