//! Registry composition - dispatches key strings by qualifier
//!
//! Several registries share one flat key namespace: `java:/tmp/x.txt` goes to
//! the registry with qualifier `java`, a key without qualifier goes to the
//! default registry. There is no global registration; callers build the
//! mapping explicitly.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use crate::core::models::{Resource, ResourceKey, ResourceKeyString, is_valid_qualifier};
use crate::core::ports::ResourceRegistry;
use crate::error::{ResourceError, Result};

/// Qualifier-to-registry mapping with a default for short-form keys
#[derive(Debug, Clone)]
pub struct ResourceRegistries {
    default_qualifier: String,
    registries: BTreeMap<String, Arc<dyn ResourceRegistry>>,
}

impl ResourceRegistries {
    /// Create a mapping whose default is `registry`
    #[must_use]
    pub fn new(registry: impl ResourceRegistry + 'static) -> Self {
        let default_qualifier = registry.qualifier().to_string();
        let mut registries: BTreeMap<String, Arc<dyn ResourceRegistry>> = BTreeMap::new();
        registries.insert(default_qualifier.clone(), Arc::new(registry));
        Self {
            default_qualifier,
            registries,
        }
    }

    /// Add a registry; its qualifier must be valid and not taken yet
    pub fn add(&mut self, registry: impl ResourceRegistry + 'static) -> Result<()> {
        let qualifier = registry.qualifier().to_string();
        if !is_valid_qualifier(&qualifier) {
            return Err(ResourceError::InvalidQualifier(qualifier));
        }
        if self.registries.contains_key(&qualifier) {
            return Err(ResourceError::DuplicateQualifier(qualifier));
        }
        debug!("registering resource registry '{qualifier}'");
        self.registries.insert(qualifier, Arc::new(registry));
        Ok(())
    }

    /// Builder form of [`ResourceRegistries::add`]
    pub fn with(mut self, registry: impl ResourceRegistry + 'static) -> Result<Self> {
        self.add(registry)?;
        Ok(self)
    }

    /// Qualifier used for keys without one
    #[must_use]
    pub fn default_qualifier(&self) -> &str {
        &self.default_qualifier
    }

    /// Registered qualifiers, sorted
    pub fn qualifiers(&self) -> impl Iterator<Item = &str> {
        self.registries.keys().map(String::as_str)
    }

    /// Registry for a qualifier
    pub fn get(&self, qualifier: &str) -> Result<&dyn ResourceRegistry> {
        self.registries
            .get(qualifier)
            .map(AsRef::as_ref)
            .ok_or_else(|| ResourceError::UnknownQualifier(qualifier.to_string()))
    }

    /// The registry responsible for a key string
    pub fn registry_for(&self, key: &ResourceKeyString) -> Result<&dyn ResourceRegistry> {
        self.get(key.qualifier().unwrap_or(&self.default_qualifier))
    }

    /// Parse a key string with the registry its qualifier names
    pub fn get_resource_key(&self, key: &ResourceKeyString) -> Result<Box<dyn ResourceKey>> {
        self.registry_for(key)?.get_resource_key(key)
    }

    /// Create the resource a key string names
    pub fn get_resource(&self, key: &ResourceKeyString) -> Result<Box<dyn Resource>> {
        self.registry_for(key)?.get_resource_for_key(key)
    }

    /// Convert an identifier owned by the registry `qualifier` to its key string
    pub fn key_to_string(&self, qualifier: &str, id: &dyn ResourceKey) -> Result<String> {
        self.get(qualifier)?.key_to_string(id)
    }
}
