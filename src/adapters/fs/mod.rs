//! Local filesystem resource registry
//!
//! Implements the `ResourceRegistry` port for [`FsPath`] identifiers. Key
//! strings carry `file:` URIs or plain URI paths:
//!
//! ```
//! use respath::adapters::fs::FsResourceRegistry;
//! use respath::core::models::{FsPath, ResourceKeyString};
//! use respath::core::ports::ResourceRegistry;
//!
//! let registry = FsResourceRegistry::new();
//! let key = registry.get_resource_key(&ResourceKeyString::parse("java:/tmp/x.txt")).unwrap();
//! assert_eq!(key.to_string(), "/tmp/x.txt");
//! assert_eq!(registry.key_to_string(&FsPath::new("/tmp/x.txt")).unwrap(), "java:file:///tmp/x.txt");
//! ```

use std::path::PathBuf;

use log::{debug, trace};

use crate::core::models::{
    FsPath, FsResource, QualifiedResourceKeyString, Resource, ResourceKey, ResourceKeyString,
    is_valid_qualifier,
};
use crate::core::ports::ResourceRegistry;
use crate::error::{ResourceError, Result};

/// Qualifier of the local filesystem registry
pub const FS_QUALIFIER: &str = "java";

/// Registry for resources on the local filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsResourceRegistry {
    qualifier: String,
}

impl FsResourceRegistry {
    /// Create a registry with the default qualifier
    #[must_use]
    pub fn new() -> Self {
        Self {
            qualifier: FS_QUALIFIER.to_string(),
        }
    }

    /// Create a registry with a custom qualifier
    ///
    /// Fails with [`ResourceError::InvalidQualifier`] unless the qualifier
    /// would be recognized when parsing a key string.
    pub fn with_qualifier(qualifier: impl Into<String>) -> Result<Self> {
        let qualifier = qualifier.into();
        if !is_valid_qualifier(&qualifier) {
            return Err(ResourceError::InvalidQualifier(qualifier));
        }
        Ok(Self { qualifier })
    }

    fn parse_key(&self, key: &ResourceKeyString) -> Result<FsPath> {
        if !key.qualifier_matches_or_missing(&self.qualifier) {
            debug!("rejecting key '{key}' for registry '{}'", self.qualifier);
            return Err(ResourceError::QualifierMismatch {
                key: key.to_string(),
                qualifier: self.qualifier.clone(),
            });
        }
        let path = FsPath::from_uri(key.id())?;
        trace!("parsed key '{key}' as {path}");
        Ok(path)
    }
}

fn path_of<'a>(id: &'a dyn ResourceKey, operation: &'static str) -> Result<&'a FsPath> {
    id.as_any()
        .downcast_ref::<FsPath>()
        .ok_or_else(|| ResourceError::type_mismatch(operation, id, "FsPath"))
}

impl Default for FsResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceRegistry for FsResourceRegistry {
    fn qualifier(&self) -> &str {
        &self.qualifier
    }

    fn get_resource(&self, id: &dyn ResourceKey) -> Result<Box<dyn Resource>> {
        let path = path_of(id, "get resource")?;
        Ok(Box::new(FsResource::new(path.clone())))
    }

    fn get_resource_key(&self, key: &ResourceKeyString) -> Result<Box<dyn ResourceKey>> {
        Ok(Box::new(self.parse_key(key)?))
    }

    fn get_resource_for_key(&self, key: &ResourceKeyString) -> Result<Box<dyn Resource>> {
        Ok(Box::new(FsResource::new(self.parse_key(key)?)))
    }

    fn to_resource_key_string(&self, id: &dyn ResourceKey) -> Result<QualifiedResourceKeyString> {
        let path = path_of(id, "convert identifier to its string representation")?;
        Ok(QualifiedResourceKeyString::of(&self.qualifier, path.id_string()))
    }

    fn to_local_file(&self, id: &dyn ResourceKey) -> Result<Option<PathBuf>> {
        let path = path_of(id, "convert identifier to a local file")?;
        Ok(path.to_local_file())
    }

    fn resource_to_local_file(&self, resource: &dyn Resource) -> Result<Option<PathBuf>> {
        let resource = resource.as_any().downcast_ref::<FsResource>().ok_or_else(|| {
            ResourceError::type_mismatch("convert resource to a local file", resource, "FsResource")
        })?;
        Ok(resource.path().to_local_file())
    }
}
