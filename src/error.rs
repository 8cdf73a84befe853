//! Fatal error kinds raised while preparing a build.
//!
//! Anything that goes wrong after the inputs are accepted (I/O, ZIP encoding)
//! travels as an `anyhow::Error` with context instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("missing required configuration: {}", .0.join(", "))]
    ConfigurationMissing(Vec<&'static str>),

    #[error("invalid configuration for {name}: {reason}")]
    InvalidConfiguration { name: &'static str, reason: String },

    #[error("failed to fetch chapter list from {source_url}: {cause}")]
    FetchFailure { source_url: String, cause: String },

    #[error("chapter list is not valid: {0}")]
    SchemaViolation(String),
}

impl BuildError {
    pub fn fetch<U: ToString, C: ToString>(source_url: U, cause: C) -> BuildError {
        BuildError::FetchFailure {
            source_url: source_url.to_string(),
            cause: cause.to_string(),
        }
    }
}
