//! Core domain logic for respath
//!
//! Matching is pure; the only filesystem access is the existence checks done
//! by the file and directory matchers. Backends are abstracted through port
//! traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`FsPath`, key strings, patterns, resources)
//! - `services/` - Matchers and registry composition
//! - `ports/` - Trait definitions for resource backends

pub mod models;
pub mod ports;
pub mod services;
