//! Shared configuration loader for the inkdown toolchain.
//!
//! `defaults/inkdown.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`InkdownConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/inkdown.default.toml");

/// Top-level configuration consumed by inkdown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct InkdownConfig {
    pub tokens: TokensConfig,
    pub convert: ConvertConfig,
}

/// Settings for the design-token flattener. These were fixed constants in
/// earlier versions of the tooling; they are overridable here with the
/// original values as defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct TokensConfig {
    /// Container entry at the export's root holding the token collection.
    pub container: String,
    /// Mode whose token tree is flattened.
    pub mode: String,
    /// Input path used when none is given on the command line.
    pub input: String,
    /// Output path used when none is given on the command line.
    pub output: String,
}

/// Markdown conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub theme: String,
    pub pdf: PdfConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    pub size: PdfPageSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PdfPageSize {
    Desktop,
    Mobile,
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
    pub fn build(self) -> Result<InkdownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<InkdownConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.tokens.container, "TailwindCSS");
        assert_eq!(config.tokens.mode, "Default");
        assert_eq!(config.tokens.input, "ys-variables.json");
        assert_eq!(config.tokens.output, "variables.md");
        assert_eq!(config.convert.theme, "default");
        assert_eq!(config.convert.pdf.size, PdfPageSize::Desktop);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("convert.pdf.size", "mobile")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.pdf.size, PdfPageSize::Mobile);

        let config = Loader::new()
            .set_override("tokens.mode", "Dark")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.tokens.mode, "Dark");
    }

    #[test]
    fn layers_a_user_file_over_the_defaults() {
        let dir = std::env::temp_dir().join("inkdown-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("user.toml");
        std::fs::write(&path, "[convert]\ntheme = \"academic\"\n").unwrap();

        let config = Loader::new()
            .with_file(&path)
            .build()
            .expect("config to build");
        assert_eq!(config.convert.theme, "academic");
        // Untouched sections keep their defaults.
        assert_eq!(config.tokens.container, "TailwindCSS");
    }

    #[test]
    fn optional_missing_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/inkdown.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.theme, "default");
    }
}
