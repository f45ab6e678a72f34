//! Domain models for respath
//!
//! Pure data structures; the only I/O is the existence checks on paths.
//!
//! - [`FsPath`] - A normalized filesystem location
//! - [`ResourceKeyString`] - A `qualifier:id` key
//! - [`Resource`] / [`ResourceKey`] - Opaque handles and identifiers
//! - [`AntPattern`] - A compiled Ant-style glob
//! - [`RegexPattern`] - A compiled, fully anchored regex

mod ant;
mod key_string;
mod path;
mod regex_pattern;
mod resource;

pub use ant::AntPattern;
pub use key_string::{
    QUALIFIER_SEPARATOR, QualifiedResourceKeyString, ResourceKeyString, is_valid_qualifier,
};
pub use path::FsPath;
pub use regex_pattern::RegexPattern;
pub use resource::{FsResource, Resource, ResourceKey};
