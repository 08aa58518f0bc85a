//! Shared configuration loader for mdconv.
//!
//! `defaults/mdconv.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`MdconvConfig`], then turn it into a [`Filters`] with `From`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdconv_filters::{EmbeddedOptions, EmbeddedRenderer, Filters, PandocBackend};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdconv.default.toml");

/// Top-level configuration consumed by mdconv applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdconvConfig {
    pub pandoc: PandocConfig,
    pub embedded: EmbeddedConfig,
}

/// External converter settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PandocConfig {
    #[serde(default)]
    pub executable: Option<String>,
    pub html_args: Vec<String>,
}

/// Mirrors the extension switches of the embedded renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddedConfig {
    pub tables: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
}

impl From<&PandocConfig> for PandocBackend {
    fn from(config: &PandocConfig) -> Self {
        match &config.executable {
            Some(exe) if !exe.is_empty() => PandocBackend::new(exe.clone()),
            _ => PandocBackend::from_env(),
        }
    }
}

impl From<&EmbeddedConfig> for EmbeddedOptions {
    fn from(config: &EmbeddedConfig) -> Self {
        EmbeddedOptions {
            tables: config.tables,
            strikethrough: config.strikethrough,
            autolink: config.autolink,
            tasklist: config.tasklist,
        }
    }
}

impl From<&MdconvConfig> for Filters {
    fn from(config: &MdconvConfig) -> Self {
        Filters::new(
            PandocBackend::from(&config.pandoc),
            EmbeddedRenderer::new(EmbeddedOptions::from(&config.embedded)),
        )
        .with_html_pandoc_args(config.pandoc.html_args.clone())
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
    pub fn build(self) -> Result<MdconvConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdconvConfig, ConfigError> {
    Loader::new().build()
}
