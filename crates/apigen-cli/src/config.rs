//! Configuration file parsing (apigen.toml)
//!
//! One file describes a whole run: the target type, where the signatures
//! come from, the registry to resolve against, logging and output.

use apigen_parser::{RegistryError, RegistryManifest, TypeRegistry};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "apigen.toml";

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config or a signatures file
    #[error("Failed to read {path}: {source}")]
    IoError {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid config: {0}")]
    ValidationError(String),

    /// The registry section could not be built
    #[error("Invalid registry: {0}")]
    RegistryError(#[from] RegistryError),
}

/// Complete configuration (apigen.toml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApigenConfig {
    /// What to parse and bind against
    pub parser: ParserConfig,

    /// Resolvable types and bindable classes
    #[serde(default)]
    pub registry: RegistryManifest,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    base_dir: PathBuf,
}

/// `[parser]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ParserConfig {
    /// Fully qualified target type
    pub target: String,

    /// Inline signatures, parsed before those from `signatures_file`
    #[serde(default)]
    pub signatures: Vec<String>,

    /// File with one signature per line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures_file: Option<String>,
}

/// `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `debug` or `apigen_parser=trace`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// `[output]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Rendering of the finished batch
    #[serde(default)]
    pub format: OutputFormat,

    /// Output file; stdout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// How the finished batch is rendered
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One `UNIQUE_NAME = signature` line per method
    Text,
}

impl ApigenConfig {
    /// Parse a config from a file; relative paths resolve against its directory
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = read(path)?;
        let mut config = Self::from_str(&content)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Parse a config from a string; relative paths resolve against the working directory
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: ApigenConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.target.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "parser.target cannot be empty".to_string(),
            ));
        }

        if self.parser.signatures.is_empty() && self.parser.signatures_file.is_none() {
            return Err(ConfigError::ValidationError(
                "parser.signatures or parser.signatures-file must be set".to_string(),
            ));
        }

        if let Some(level) = &self.logging.level {
            EnvFilter::try_new(level).map_err(|e| {
                ConfigError::ValidationError(format!("Invalid logging.level '{}': {}", level, e))
            })?;
        }

        Ok(())
    }

    /// Resolve a path from the config against the config's directory
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }

    /// All signatures: inline ones first, then the signatures file
    pub fn load_signatures(&self) -> Result<Vec<String>, ConfigError> {
        let mut signatures = self.parser.signatures.clone();
        if let Some(file) = &self.parser.signatures_file {
            let content = read(&self.resolve_path(file))?;
            signatures.extend(parse_signature_lines(&content));
        }
        Ok(signatures)
    }

    /// Build the registry described by `[registry]`
    pub fn build_registry(&self) -> Result<TypeRegistry, ConfigError> {
        Ok(TypeRegistry::from_manifest(&self.registry)?)
    }
}

/// Split a signatures file into trimmed signatures
///
/// Blank lines and lines starting with `#` or `//` are skipped.
pub fn parse_signature_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("//"))
        .map(str::to_string)
        .collect()
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })
}
