//! Port traits (interfaces) for resource backends
//!
//! These traits define the boundary between path matching and the
//! backends that own resources. Implementations live in the `adapters`
//! module.
//!
//! The core depends only on these traits, never on a concrete backend, so
//! several registries can share one key namespace and tests can plug in
//! their own.

mod registry;

pub use registry::ResourceRegistry;
