//! crates.io registry API implementation

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::config::FETCH_TIMEOUT_MS;
use crate::registry::client::RegistryClient;
use crate::registry::error::RegistryError;

/// Default base URL for the crates.io API
const DEFAULT_BASE_URL: &str = "https://crates.io";

/// Response from the crate metadata endpoint
#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    newest_version: String,
}

/// Response from the per-version dependency endpoint
#[derive(Debug, Deserialize)]
struct DependenciesResponse {
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    crate_id: String,
}

/// Registry client for the crates.io API
pub struct CratesIoClient {
    client: reqwest::Client,
    base_url: String,
}

impl CratesIoClient {
    /// Creates a new CratesIoClient with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("crate-deps")
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for CratesIoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl RegistryClient for CratesIoClient {
    async fn newest_version(&self, package: &str) -> Result<String, RegistryError> {
        let url = format!("{}/api/v1/crates/{}", self.base_url, package);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package.to_string()));
        }

        if !status.is_success() {
            warn!("crates.io returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let info: CrateResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse crate metadata response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(info.krate.newest_version)
    }

    async fn dependencies(
        &self,
        package: &str,
        version: &str,
    ) -> Result<Vec<String>, RegistryError> {
        let url = format!(
            "{}/api/v1/crates/{}/{}/dependencies",
            self.base_url, package, version
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::VersionNotFound {
                package: package.to_string(),
                version: version.to_string(),
            });
        }

        if !status.is_success() {
            warn!("crates.io returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: DependenciesResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse dependencies response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(body
            .dependencies
            .into_iter()
            .map(|dep| dep.crate_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn newest_version_returns_version_from_crate_metadata() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v1/crates/serde")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "crate": {
                        "name": "serde",
                        "newest_version": "1.0.228"
                    }
                }"#,
            )
            .create_async()
            .await;

        let client = CratesIoClient::new(&server.url());
        let result = client.newest_version("serde").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, "1.0.228");
    }

    #[tokio::test]
    async fn newest_version_returns_not_found_for_nonexistent_package() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v1/crates/nonexistent-package")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errors": [{"detail": "Not Found"}]}"#)
            .create_async()
            .await;

        let client = CratesIoClient::new(&server.url());
        let result = client.newest_version("nonexistent-package").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn newest_version_returns_invalid_response_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v1/crates/serde")
            .with_status(500)
            .create_async()
            .await;

        let client = CratesIoClient::new(&server.url());
        let result = client.newest_version("serde").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn dependencies_returns_names_in_registry_order() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v1/crates/serde/1.0.228/dependencies")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "dependencies": [
                        {"crate_id": "serde_derive", "req": "^1"},
                        {"crate_id": "serde_core", "req": "^1"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = CratesIoClient::new(&server.url());
        let result = client.dependencies("serde", "1.0.228").await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            result,
            vec!["serde_derive".to_string(), "serde_core".to_string()]
        );
    }

    #[tokio::test]
    async fn dependencies_returns_version_not_found_for_missing_version() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v1/crates/serde/99.0.0/dependencies")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errors": [{"detail": "Not Found"}]}"#)
            .create_async()
            .await;

        let client = CratesIoClient::new(&server.url());
        let result = client.dependencies("serde", "99.0.0").await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(RegistryError::VersionNotFound { package, version })
                if package == "serde" && version == "99.0.0"
        ));
    }

    #[tokio::test]
    async fn dependencies_returns_empty_for_package_without_dependencies() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v1/crates/lazy_static/1.5.0/dependencies")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"dependencies": []}"#)
            .create_async()
            .await;

        let client = CratesIoClient::new(&server.url());
        let result = client.dependencies("lazy_static", "1.5.0").await.unwrap();

        mock.assert_async().await;
        assert!(result.is_empty());
    }
}
