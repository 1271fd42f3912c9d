//! Book-group publishing pipeline.
//!
//! Renders every book of a [`BookGroup`] in each requested format and either
//! returns the text or writes one file per (format, book). Files are replaced
//! atomically: the content is written to a temporary file in the target
//! directory and then renamed over the destination, so readers never see a
//! half-written file.
//!
//! For more control over the rendering, use [`FormatRegistry`] directly.

use crate::books::english_name;
use crate::error::BabelError;
use crate::format::{Format, FormatRegistry, RenderOptions};
use crate::ir::verse::BookGroup;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Specifies how to publish a book group.
///
/// ```ignore
/// let spec = PublishSpec::new(&group, &["csv", "unicode-names"])
///     .with_output_root("out")
///     .with_path_qual("-ajf");
/// ```
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The reduced verses to render.
    pub group: &'a BookGroup,
    /// Format names (e.g., "csv", "unicode-names").
    pub formats: &'a [&'a str],
    /// Root directory for output files; `None` keeps results in memory.
    pub output_root: Option<PathBuf>,
    /// Suffix appended to each format folder (e.g. "-ajf").
    pub path_qual: String,
    pub options: RenderOptions,
}

impl<'a> PublishSpec<'a> {
    pub fn new(group: &'a BookGroup, formats: &'a [&'a str]) -> Self {
        Self {
            group,
            formats,
            output_root: None,
            path_qual: String::new(),
            options: RenderOptions::default(),
        }
    }

    /// Sets the output root. If provided, content is written to disk.
    pub fn with_output_root(mut self, path: impl AsRef<Path>) -> Self {
        self.output_root = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_path_qual(mut self, path_qual: impl Into<String>) -> Self {
        self.path_qual = path_qual.into();
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}

/// One published rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (no output root given).
    InMemory {
        format: String,
        title: String,
        content: String,
    },
    /// Path to the written file.
    File(PathBuf),
}

/// Render and publish every book of the group in every requested format.
///
/// Books are processed in group order and, within a book, formats in the
/// order given. The first failure aborts the run.
pub fn publish(spec: PublishSpec<'_>) -> Result<Vec<PublishArtifact>, BabelError> {
    let registry = FormatRegistry::with_defaults();
    let formats = spec
        .formats
        .iter()
        .map(|name| registry.get(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut artifacts = Vec::new();
    for book in &spec.group.books {
        let title = english_name(&book.book)?;
        for format in &formats {
            let content = format.serialize(book, title, &spec.options)?;
            let artifact = match &spec.output_root {
                Some(root) => {
                    let path = bkg_path(root, *format, &spec.path_qual, title);
                    write_atomic(&path, content.as_bytes())?;
                    info!(path = %path.display(), "wrote");
                    PublishArtifact::File(path)
                }
                None => PublishArtifact::InMemory {
                    format: format.name().to_string(),
                    title: title.to_string(),
                    content,
                },
            };
            artifacts.push(artifact);
        }
    }
    Ok(artifacts)
}

/// `<root>/<folder><path_qual>/<name>.<ext>`
pub fn bkg_path(root: &Path, format: &dyn Format, path_qual: &str, name: &str) -> PathBuf {
    root.join(format!("{}{}", format.folder(), path_qual))
        .join(format!("{}.{}", name, format.file_extension()))
}

/// Replace `path` with `bytes` atomically, creating parent directories.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), BabelError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| BabelError::Io(e.error))?;
    Ok(())
}
