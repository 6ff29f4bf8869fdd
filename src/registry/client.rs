use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::fmt;

use super::types::Registry;

/// Canonical location of the package registry.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/langchain-ai/langchain/refs/heads/master/libs/packages.yml";

/// Errors retrieving or decoding the registry document.
#[derive(Debug)]
pub enum RegistryError {
    /// Network or HTTP failure fetching the document.
    Fetch(String),
    /// The document is not valid YAML or lacks the expected layout.
    Parse(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Fetch(msg) => {
                write!(f, "Failed to fetch package registry: {}", msg)
            }
            RegistryError::Parse(msg) => {
                write!(f, "Failed to parse package registry: {}", msg)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchRegistry: Send + Sync {
    async fn fetch(&self) -> Result<Registry>;
    fn registry_url(&self) -> &str;
}

pub struct RegistryClient {
    pub client: Client,
    pub registry_url: String,
}

impl RegistryClient {
    #[tracing::instrument(skip(client, registry_url))]
    pub fn new(client: Client, registry_url: Option<String>) -> Self {
        let registry_url = registry_url.unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());
        Self {
            client,
            registry_url,
        }
    }
}

#[async_trait]
impl FetchRegistry for RegistryClient {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self) -> Result<Registry> {
        debug!("Fetching package registry from {}...", self.registry_url);

        let response = self
            .client
            .get(&self.registry_url)
            .send()
            .await
            .map_err(|e| RegistryError::Fetch(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| RegistryError::Fetch(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| RegistryError::Fetch(e.to_string()))?;

        let registry: Registry =
            serde_yaml::from_str(&body).map_err(|e| RegistryError::Parse(e.to_string()))?;

        debug!("Registry lists {} package(s)", registry.packages.len());

        Ok(registry)
    }

    #[tracing::instrument(skip(self))]
    fn registry_url(&self) -> &str {
        &self.registry_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::Fetch("connection refused".to_string());
        assert!(err.to_string().contains("fetch package registry"));
        assert!(err.to_string().contains("connection refused"));

        let err = RegistryError::Parse("missing field `name`".to_string());
        assert!(err.to_string().contains("parse package registry"));
    }

    #[test]
    fn test_default_registry_url() {
        let client = RegistryClient::new(Client::new(), None);
        assert_eq!(client.registry_url(), DEFAULT_REGISTRY_URL);

        let client = RegistryClient::new(Client::new(), Some("http://localhost/p.yml".into()));
        assert_eq!(client.registry_url(), "http://localhost/p.yml");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/packages.yml")
            .with_status(200)
            .with_body(concat!(
                "packages:\n",
                "- name: langchain-acme\n",
                "  repo: langchain-ai/langchain-acme\n",
                "  downloads: 500\n",
            ))
            .create_async()
            .await;

        let client = RegistryClient::new(
            Client::new(),
            Some(format!("{}/packages.yml", server.url())),
        );
        let registry = client.fetch().await.unwrap();

        mock.assert_async().await;
        assert_eq!(registry.packages.len(), 1);
        assert_eq!(registry.packages[0].name, "langchain-acme");
        assert_eq!(registry.packages[0].downloads, Some(500));
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/packages.yml")
            .with_status(500)
            .create_async()
            .await;

        let client = RegistryClient::new(
            Client::new(),
            Some(format!("{}/packages.yml", server.url())),
        );
        let err = client.fetch().await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::Fetch(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_invalid_yaml() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/packages.yml")
            .with_status(200)
            .with_body("packages: [not, {closed")
            .create_async()
            .await;

        let client = RegistryClient::new(
            Client::new(),
            Some(format!("{}/packages.yml", server.url())),
        );
        let err = client.fetch().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_missing_packages_key() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/packages.yml")
            .with_status(200)
            .with_body("repos: []\n")
            .create_async()
            .await;

        let client = RegistryClient::new(
            Client::new(),
            Some(format!("{}/packages.yml", server.url())),
        );
        let err = client.fetch().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::Parse(_))
        ));
    }
}
