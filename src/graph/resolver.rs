//! Memoized newest-version resolution

use std::collections::HashMap;

use tracing::{info, warn};

use crate::registry::client::RegistryClient;
use crate::registry::error::RegistryError;

/// Resolves the newest published version of packages, memoizing results
///
/// Each package is looked up over the network at most once per analysis run;
/// subsequent resolutions return the cached value. The cache is never
/// invalidated within a run; a fresh resolver is created per root package.
#[derive(Debug, Default)]
pub struct VersionResolver {
    cache: HashMap<String, String>,
}

impl VersionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the newest published version of `package`
    ///
    /// Returns `None` when the lookup fails for any reason; failures are
    /// logged and never propagate to the caller.
    pub async fn resolve(
        &mut self,
        client: &dyn RegistryClient,
        package: &str,
    ) -> Option<String> {
        if let Some(version) = self.cache.get(package) {
            return Some(version.clone());
        }

        match client.newest_version(package).await {
            Ok(version) => {
                info!("newest version of '{}': {}", package, version);
                self.cache.insert(package.to_string(), version.clone());
                Some(version)
            }
            Err(RegistryError::NotFound(_)) => {
                warn!("package '{}' not found in registry", package);
                None
            }
            Err(e) => {
                warn!("failed to resolve newest version of '{}': {}", package, e);
                None
            }
        }
    }

    /// Look up a cached resolution without touching the network
    pub fn cached(&self, package: &str) -> Option<&str> {
        self.cache.get(package).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::client::MockRegistryClient;

    #[tokio::test]
    async fn resolve_queries_registry_at_most_once_per_package() {
        let mut client = MockRegistryClient::new();
        client
            .expect_newest_version()
            .withf(|package| package == "serde")
            .times(1)
            .returning(|_| Ok("1.0.228".to_string()));

        let mut resolver = VersionResolver::new();

        let first = resolver.resolve(&client, "serde").await;
        let second = resolver.resolve(&client, "serde").await;

        assert_eq!(first, Some("1.0.228".to_string()));
        assert_eq!(second, Some("1.0.228".to_string()));
    }

    #[tokio::test]
    async fn resolve_returns_none_for_unknown_package() {
        let mut client = MockRegistryClient::new();
        client
            .expect_newest_version()
            .returning(|package| Err(RegistryError::NotFound(package.to_string())));

        let mut resolver = VersionResolver::new();

        assert_eq!(resolver.resolve(&client, "nonexistent").await, None);
    }

    #[tokio::test]
    async fn resolve_does_not_cache_failures() {
        let mut seq = mockall::Sequence::new();
        let mut client = MockRegistryClient::new();
        client
            .expect_newest_version()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(RegistryError::InvalidResponse(
                    "Unexpected status: 500".to_string(),
                ))
            });
        client
            .expect_newest_version()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("2.0.0".to_string()));

        let mut resolver = VersionResolver::new();

        assert_eq!(resolver.resolve(&client, "tokio").await, None);
        assert_eq!(
            resolver.resolve(&client, "tokio").await,
            Some("2.0.0".to_string())
        );
    }

    #[tokio::test]
    async fn cached_reflects_successful_resolutions_only() {
        let mut client = MockRegistryClient::new();
        client
            .expect_newest_version()
            .returning(|_| Ok("4.0.0".to_string()));

        let mut resolver = VersionResolver::new();
        assert_eq!(resolver.cached("clap"), None);

        resolver.resolve(&client, "clap").await;
        assert_eq!(resolver.cached("clap"), Some("4.0.0"));
    }
}
