//! Client trait for fetching package metadata from a registry

#[cfg(test)]
use mockall::automock;

use crate::registry::error::RegistryError;

/// Trait for fetching package metadata from a package registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RegistryClient: Send + Sync {
    /// Fetches the newest published version of a package
    ///
    /// # Arguments
    /// * `package` - The name of the package (e.g., "serde")
    ///
    /// # Returns
    /// * `Ok(String)` - The newest version as reported by the registry
    /// * `Err(RegistryError)` - If the fetch fails
    async fn newest_version(&self, package: &str) -> Result<String, RegistryError>;

    /// Fetches the declared dependency names for a specific package version
    ///
    /// Names are returned in the order the registry reports them.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Dependency names in registry order
    /// * `Err(RegistryError::VersionNotFound)` - If the version does not exist
    /// * `Err(RegistryError)` - If the fetch fails for any other reason
    async fn dependencies(
        &self,
        package: &str,
        version: &str,
    ) -> Result<Vec<String>, RegistryError>;
}
