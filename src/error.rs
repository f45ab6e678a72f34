//! Error types for resource lookup and path matching

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for respath operations
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Errors raised by registries, matchers and the walker
///
/// None of these are retried internally; every operation either fully
/// succeeds or fails with one of these variants.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An identifier or resource of a foreign type was handed to a registry
    #[error("cannot {operation} for '{value}'; it is not of type {expected}")]
    TypeMismatch {
        /// What the registry was asked to do
        operation: &'static str,
        /// Display form of the offending value
        value: String,
        /// The type the registry natively handles
        expected: &'static str,
    },

    /// The key carries a qualifier different from the registry's own
    #[error(
        "qualifier of '{key}' does not match qualifier '{qualifier}' of this resource registry"
    )]
    QualifierMismatch {
        /// The offending key string
        key: String,
        /// Qualifier of the registry that rejected the key
        qualifier: String,
    },

    /// A location string could not be parsed into a path
    #[error("could not create path from '{input}': {message}")]
    Parse {
        /// The offending location string
        input: String,
        /// Description of what went wrong
        message: String,
        /// Underlying URI parse failure, if any
        #[source]
        source: Option<url::ParseError>,
    },

    /// A glob or regex source failed to compile
    #[error("invalid pattern '{pattern}': {message}")]
    PatternCompile {
        /// The offending pattern source
        pattern: String,
        /// Description of the compile failure
        message: String,
    },

    /// A qualifier is not an unreserved token of at least two characters
    #[error("invalid qualifier '{0}': expected at least two of [A-Za-z0-9._~-]")]
    InvalidQualifier(String),

    /// No registry is registered for the qualifier
    #[error("no resource registry for qualifier '{0}'")]
    UnknownQualifier(String),

    /// A registry with the same qualifier is already registered
    #[error("a resource registry for qualifier '{0}' is already registered")]
    DuplicateQualifier(String),

    /// Walk root does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Error walking the directory tree
    #[error("walkdir error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ResourceError {
    /// Create a type mismatch error for a value of a foreign type
    #[must_use]
    pub fn type_mismatch(
        operation: &'static str,
        value: impl std::fmt::Display,
        expected: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            operation,
            value: value.to_string(),
            expected,
        }
    }

    /// Create a parse error without an underlying URI error
    #[must_use]
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a pattern compile error
    #[must_use]
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PatternCompile {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
