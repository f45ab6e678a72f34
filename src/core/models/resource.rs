//! Resource identifiers and handles
//!
//! Registries work with opaque identifiers ([`ResourceKey`]) and hand out
//! resource handles ([`Resource`]). Each registry only understands its own
//! concrete types and recovers them with [`ResourceKey::as_any`].

use std::any::Any;
use std::fmt::{Debug, Display};

use super::FsPath;
use crate::error::Result;

/// Opaque identifier of a resource
pub trait ResourceKey: Debug + Display + Send + Sync + 'static {
    /// Upcast for downcasting to the registry's native identifier type
    fn as_any(&self) -> &dyn Any;
}

/// Handle to a resource, bound to exactly one identifier
pub trait Resource: Debug + Display + Send + Sync + 'static {
    /// The identifier this resource is bound to
    fn key(&self) -> &dyn ResourceKey;

    /// Upcast for downcasting to the registry's native resource type
    fn as_any(&self) -> &dyn Any;
}

impl ResourceKey for FsPath {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A resource on the local filesystem
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FsResource {
    path: FsPath,
}

impl FsResource {
    /// Create a resource for a path
    #[must_use]
    pub const fn new(path: FsPath) -> Self {
        Self { path }
    }

    /// Create a resource from a location string in URI syntax
    pub fn from_uri(uri: &str) -> Result<Self> {
        FsPath::from_uri(uri).map(Self::new)
    }

    /// The path this resource is bound to
    #[must_use]
    pub const fn path(&self) -> &FsPath {
        &self.path
    }

    /// Whether the resource currently exists
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whether the resource is currently a regular file
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }

    /// Whether the resource is currently a directory
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.path.is_dir()
    }
}

impl Resource for FsResource {
    fn key(&self) -> &dyn ResourceKey {
        &self.path
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Display for FsResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}
