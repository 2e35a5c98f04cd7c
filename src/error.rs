//! Error types for inlay operations.
//!
//! Errors are grouped by the component that raises them and wrapped into a
//! single top-level [`Error`] at the crate boundary. Causes are preserved,
//! never swallowed: the CLI reports one actionable failure and exits non-zero.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Interpolate(#[from] InterpolateError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors raised while parsing a raw secrets specification.
#[derive(Error, Debug)]
pub enum ReferenceError {
    /// Entry could not be split into a locator and an output key.
    #[error("malformed secret reference '{entry}': expected 'locator:OUTPUT_KEY'")]
    Malformed { entry: String },

    /// Output key is not usable as a placeholder identifier.
    #[error("invalid output key '{key}': {reason}")]
    InvalidOutputKey { key: String, reason: String },

    /// Two entries resolve to the same output key.
    #[error("duplicate output key '{0}': each reference must use a distinct output key")]
    DuplicateOutputKey(String),
}

/// Errors raised while interpolating a YAML document.
#[derive(Error, Debug)]
pub enum InterpolateError {
    /// The input text is not valid YAML.
    #[error("invalid YAML document: {0}")]
    DocumentParse(#[source] serde_yaml::Error),

    /// The mutated tree could not be written back out.
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// Traversal hit the nesting limit. The path names the offending node.
    #[error("document nesting exceeds {max} levels at '{path}'")]
    TooDeep { path: String, max: usize },
}

/// Errors raised while fetching a secret value from a source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("environment variable '{0}' is not set")]
    MissingEnv(String),

    #[error("environment variable '{0}' is not valid UTF-8")]
    NotUtf8(String),

    #[error("secret command failed for '{locator}': {reason}")]
    Exec { locator: String, reason: String },

    #[error("secret command timed out after {timeout}s for '{locator}'")]
    Timeout { locator: String, timeout: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
