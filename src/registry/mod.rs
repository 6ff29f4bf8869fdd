//! Package registry access.
//!
//! The registry is a remotely hosted YAML document listing every known
//! integration package and its metadata. This module only consumes it;
//! the schema is owned upstream.

mod client;
mod types;

pub use client::{DEFAULT_REGISTRY_URL, FetchRegistry, RegistryClient, RegistryError};
pub use types::{Registry, RegistryPackage};

#[cfg(test)]
pub use client::MockFetchRegistry;
