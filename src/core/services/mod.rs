//! Services over the domain models
//!
//! - [`matcher`] - Decide which paths under a root are included
//! - [`registries`] - Dispatch key strings to registries by qualifier

pub mod matcher;
pub mod registries;

pub use matcher::PathMatcher;
pub use registries::ResourceRegistries;
