//! Resolve a key string through the registries

use anyhow::Context;
use respath::output::{KeyResult, OutputMode};
use respath::{FsResourceRegistry, ResourceKeyString, ResourceRegistries};

/// Resolve `input` and print its canonical key and local file
pub fn key(input: &str, mode: OutputMode) -> anyhow::Result<()> {
    let registries = ResourceRegistries::new(FsResourceRegistry::new());
    let key_string = ResourceKeyString::parse(input);

    let registry = registries.registry_for(&key_string)?;
    let resource = registry
        .get_resource_for_key(&key_string)
        .with_context(|| format!("failed to resolve '{input}'"))?;
    let key = registry.to_resource_key_string(resource.key())?;
    let local_file = registry.resource_to_local_file(&*resource)?;

    let result = KeyResult {
        input: input.to_string(),
        key: key.to_string(),
        path: resource.to_string(),
        exists: local_file.as_ref().is_some_and(|p| p.exists()),
        local_file: local_file.map(|p| p.display().to_string()),
    };
    result.render(mode);

    Ok(())
}
