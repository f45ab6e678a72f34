//! Resource registry port
//!
//! Defines the interface for turning identifiers and key strings into
//! resources.

use std::path::PathBuf;

use crate::core::models::{QualifiedResourceKeyString, Resource, ResourceKey, ResourceKeyString};
use crate::error::Result;

/// Factory for resources of one backend, scoped by a qualifier
///
/// Every method taking an identifier or resource fails with
/// [`ResourceError::TypeMismatch`](crate::ResourceError::TypeMismatch) when
/// handed a type the backend does not own. Key strings are rejected with
/// [`ResourceError::QualifierMismatch`](crate::ResourceError::QualifierMismatch)
/// when they carry a different qualifier; a missing qualifier is accepted.
pub trait ResourceRegistry: std::fmt::Debug + Send + Sync {
    /// Qualifier of this registry, unique among composed registries
    fn qualifier(&self) -> &str;

    /// Get the resource for a native identifier
    fn get_resource(&self, id: &dyn ResourceKey) -> Result<Box<dyn Resource>>;

    /// Parse the id portion of a key string into a native identifier
    fn get_resource_key(&self, key: &ResourceKeyString) -> Result<Box<dyn ResourceKey>>;

    /// Parse a key string and create the resource it names
    fn get_resource_for_key(&self, key: &ResourceKeyString) -> Result<Box<dyn Resource>>;

    /// Convert a native identifier to its qualified key string
    fn to_resource_key_string(&self, id: &dyn ResourceKey) -> Result<QualifiedResourceKeyString>;

    /// Convert a native identifier to its `qualifier:id` string
    fn key_to_string(&self, id: &dyn ResourceKey) -> Result<String> {
        self.to_resource_key_string(id).map(String::from)
    }

    /// Native local file for an identifier, `None` if it is not locally
    /// addressable
    fn to_local_file(&self, id: &dyn ResourceKey) -> Result<Option<PathBuf>>;

    /// Native local file for a resource, `None` if it is not locally
    /// addressable
    fn resource_to_local_file(&self, resource: &dyn Resource) -> Result<Option<PathBuf>>;
}
