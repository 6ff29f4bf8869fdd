use anyhow::Result;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use crate::registry::{FetchRegistry, RegistryClient};
use crate::runtime::Runtime;

/// Fixed timeout for the registry fetch.
pub const REGISTRY_TIMEOUT: Duration = Duration::from_secs(10);

/// Provider page sources, relative to the docs repository root.
pub const PROVIDERS_SOURCE_DIR: &str = "src/oss/python/integrations/providers";

/// Resolved collaborators and paths for one generation run.
pub struct Config<R: Runtime, F: FetchRegistry> {
    pub runtime: R,
    pub registry: F,
    pub docs_dir: PathBuf,
    pub output: PathBuf,
}

impl<R: Runtime> Config<R, RegistryClient> {
    pub fn new(
        runtime: R,
        docs_dir: Option<PathBuf>,
        registry_url: Option<String>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent("provtab")
            .timeout(REGISTRY_TIMEOUT)
            .build()?;
        let registry = RegistryClient::new(client, registry_url);

        let docs_dir = docs_dir.unwrap_or_else(|| PathBuf::from("."));
        let output = output
            .unwrap_or_else(|| docs_dir.join(PROVIDERS_SOURCE_DIR).join("index.mdx"));

        Ok(Self {
            runtime,
            registry,
            docs_dir,
            output,
        })
    }
}

impl<R: Runtime, F: FetchRegistry> Config<R, F> {
    /// Directory probed for provider pages.
    pub fn providers_dir(&self) -> PathBuf {
        self.docs_dir.join(PROVIDERS_SOURCE_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DEFAULT_REGISTRY_URL;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_config_defaults() {
        let config = Config::new(MockRuntime::new(), None, None, None).unwrap();
        assert_eq!(config.docs_dir, PathBuf::from("."));
        assert_eq!(
            config.output,
            PathBuf::from("./src/oss/python/integrations/providers/index.mdx")
        );
        assert_eq!(config.registry.registry_url, DEFAULT_REGISTRY_URL);
    }

    #[test]
    fn test_config_docs_dir_moves_output_and_probe_dir() {
        let config =
            Config::new(MockRuntime::new(), Some(PathBuf::from("/docs")), None, None).unwrap();
        assert_eq!(
            config.providers_dir(),
            PathBuf::from("/docs/src/oss/python/integrations/providers")
        );
        assert_eq!(
            config.output,
            PathBuf::from("/docs/src/oss/python/integrations/providers/index.mdx")
        );
    }

    #[test]
    fn test_config_explicit_output_wins() {
        let config = Config::new(
            MockRuntime::new(),
            Some(PathBuf::from("/docs")),
            None,
            Some(PathBuf::from("/elsewhere/index.mdx")),
        )
        .unwrap();
        assert_eq!(config.output, PathBuf::from("/elsewhere/index.mdx"));
    }
}
