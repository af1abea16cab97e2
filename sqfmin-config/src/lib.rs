//! Shared configuration loader for the sqfmin toolchain.
//!
//! `defaults/sqfmin.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SqfminConfig`].
//! The CLI picks up `sqfmin.toml` from the working directory and lets
//! `--config` and command-line flags override it.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use sqfmin_core::StripOptions;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/sqfmin.default.toml");

/// Name of the optional per-project config file
pub const PROJECT_FILE: &str = "sqfmin.toml";

/// Top-level configuration consumed by sqfmin applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SqfminConfig {
    pub strip: StripConfig,
    pub output: OutputConfig,
}

/// Mirrors the knobs exposed by the stripper.
#[derive(Debug, Clone, Deserialize)]
pub struct StripConfig {
    pub string_aware: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub suffix: String,
}

impl SqfminConfig {
    /// Options for `sqfmin_core::strip_with`
    pub fn strip_options(&self) -> StripOptions {
        StripOptions::from(&self.strip)
    }
}

impl From<&StripConfig> for StripOptions {
    fn from(config: &StripConfig) -> Self {
        StripOptions {
            string_aware: config.string_aware,
        }
    }
}

/// Builds a [`SqfminConfig`] from the embedded defaults, an optional project
/// file, an explicit `--config` file and command-line flags, in that order.
/// Later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from `defaults/sqfmin.default.toml`
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer `<dir>/sqfmin.toml` when it exists
    pub fn with_project_file(self, dir: impl AsRef<Path>) -> Self {
        self.with_optional_file(dir.as_ref().join(PROJECT_FILE))
    }

    /// Layer a file named on the command line. It has to exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a file that may be absent
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Force string literal protection on or off (`--string-aware`)
    pub fn with_string_aware(self, enabled: bool) -> Result<Self, ConfigError> {
        self.set_override("strip.string_aware", enabled)
    }

    /// Replace the suffix used for derived output paths
    pub fn with_suffix(self, suffix: &str) -> Result<Self, ConfigError> {
        self.set_override("output.suffix", suffix)
    }

    /// Merge all layers and check the result
    ///
    /// An empty `output.suffix` is rejected: the derived output path would be
    /// the input file itself.
    pub fn build(self) -> Result<SqfminConfig, ConfigError> {
        let config: SqfminConfig = self.builder.build()?.try_deserialize()?;
        if config.output.suffix.is_empty() {
            return Err(ConfigError::Message(
                "output.suffix must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    fn layer(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in configuration with nothing layered on top
pub fn load_defaults() -> Result<SqfminConfig, ConfigError> {
    Loader::new().build()
}
