pub mod config;
pub mod enrich;
pub mod generate;
pub mod registry;
pub mod render;
pub mod runtime;

/// Test fixtures shared across unit tests.
#[cfg(test)]
pub mod test_utils {
    use crate::registry::RegistryPackage;

    /// Returns a registry entry with just a name and owning repo set.
    pub fn package(name: &str, repo: &str) -> RegistryPackage {
        RegistryPackage {
            name: name.to_string(),
            repo: repo.to_string(),
            ..Default::default()
        }
    }
}
