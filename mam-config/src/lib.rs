//! Shared configuration loader for the mam toolchain.
//!
//! `defaults/mam.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MamConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mam_babel::format::RenderOptions;
use mam_babel::registry::{HandlerAction, HandlerKey, HandlerRegistry};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/mam.default.toml");

/// Top-level configuration consumed by mam applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MamConfig {
    pub reduce: ReduceConfig,
    pub output: OutputConfig,
    pub csv: CsvConfig,
    #[serde(default)]
    pub handlers: Vec<HandlerRuleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReduceConfig {
    pub vtrad: String,
}

/// Where and how rendered books are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: String,
    pub path_qual: String,
    pub include_alternates: bool,
    pub indent_string: String,
}

impl OutputConfig {
    /// The output root, or `None` when output goes to stdout.
    pub fn dir(&self) -> Option<PathBuf> {
        if self.dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CsvConfig {
    pub exclude_header: bool,
    #[serde(default)]
    pub header: Vec<CsvHeaderRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CsvHeaderRow {
    pub key: String,
    pub value: String,
}

/// One handler rule: nodes with this tag (and class, if given) get `action`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HandlerRuleConfig {
    pub tag: String,
    #[serde(default)]
    pub class: Option<String>,
    pub action: HandlerAction,
}

impl HandlerRuleConfig {
    pub fn key(&self) -> HandlerKey {
        HandlerKey::new(self.tag.as_str(), self.class.as_deref())
    }
}

impl MamConfig {
    /// Registry holding one action handler per configured rule.
    pub fn handler_registry(&self) -> HandlerRegistry {
        HandlerRegistry::from_entries(
            self.handlers
                .iter()
                .map(|rule| (rule.key(), rule.action.clone())),
        )
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from(self)
    }
}

impl From<&MamConfig> for RenderOptions {
    fn from(config: &MamConfig) -> Self {
        RenderOptions {
            include_alternates: config.output.include_alternates,
            indent: config.output.indent_string.clone(),
            csv_header: config
                .csv
                .header
                .iter()
                .map(|row| (row.key.clone(), row.value.clone()))
                .collect(),
            exclude_csv_header: config.csv.exclude_header,
        }
    }
}

impl From<MamConfig> for RenderOptions {
    fn from(config: MamConfig) -> Self {
        RenderOptions {
            include_alternates: config.output.include_alternates,
            indent: config.output.indent_string,
            csv_header: config
                .csv
                .header
                .into_iter()
                .map(|row| (row.key, row.value))
                .collect(),
            exclude_csv_header: config.csv.exclude_header,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MamConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MamConfig, ConfigError> {
    Loader::new().build()
}
