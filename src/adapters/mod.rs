//! Adapter implementations for port traits
//!
//! This module contains concrete registries that handle I/O:
//!
//! - `fs/` - Local filesystem paths (`java:` keys)

pub mod fs;
