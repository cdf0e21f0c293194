//! Error types for loading and validating a [`crate::config::FieldConfig`].
//!
//! The animation itself has no failure modes; only configuration can fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or does not match the schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A palette needs at least one colour to draw from.
    #[error("palette must contain at least one colour")]
    EmptyPalette,

    /// A value is out of its allowed range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
