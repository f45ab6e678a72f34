//! respath - Typed resource identifiers and path matching
//!
//! This library resolves qualified key strings such as `java:file:///tmp/x.txt`
//! to resources through pluggable registries, and selects paths under a root
//! with glob, regex and type matchers.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod walker;

pub use adapters::fs::{FS_QUALIFIER, FsResourceRegistry};
pub use config::{Config, ConfigError, WalkConfig};
pub use crate::core::models::{
    AntPattern, FsPath, FsResource, QualifiedResourceKeyString, RegexPattern, Resource,
    ResourceKey, ResourceKeyString, is_valid_qualifier,
};
pub use crate::core::ports::ResourceRegistry;
pub use crate::core::services::{PathMatcher, ResourceRegistries};
pub use error::{ResourceError, Result};
pub use walker::Walker;
