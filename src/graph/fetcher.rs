//! Per-package dependency fetch with filtering and version fallback

use tracing::{info, warn};

use crate::config::LATEST;
use crate::graph::resolver::VersionResolver;
use crate::registry::client::RegistryClient;
use crate::registry::error::RegistryError;

/// Fetches the declared dependencies of a single package version
///
/// Failures never propagate: every error path degrades to an empty list so
/// one broken package cannot abort a graph build.
#[derive(Debug, Default)]
pub struct DependencyFetcher {
    filter: String,
}

impl DependencyFetcher {
    /// Creates a fetcher with a substring filter
    ///
    /// Packages whose name contains the filter are excluded from analysis,
    /// both as fetch targets and as returned dependency names. An empty
    /// filter excludes nothing.
    pub fn new(filter: &str) -> Self {
        Self {
            filter: filter.to_string(),
        }
    }

    fn excluded(&self, name: &str) -> bool {
        !self.filter.is_empty() && name.contains(&self.filter)
    }

    /// Fetch dependency names for `package` at `requested` version
    ///
    /// An empty or "latest" requested version resolves to the newest
    /// published version first. When the dependency endpoint reports the
    /// version as missing, the fetch falls back to the newest published
    /// version at most once before giving up.
    pub async fn fetch(
        &self,
        client: &dyn RegistryClient,
        resolver: &mut VersionResolver,
        package: &str,
        requested: &str,
    ) -> Vec<String> {
        if self.excluded(package) {
            return Vec::new();
        }

        let mut version = if requested.is_empty() || requested == LATEST {
            match resolver.resolve(client, package).await {
                Some(version) => version,
                None => return Vec::new(),
            }
        } else {
            requested.to_string()
        };

        // Bounded fallback: at most one retry against the newest version
        let mut retried = false;
        loop {
            match client.dependencies(package, &version).await {
                Ok(deps) => {
                    return deps.into_iter().filter(|dep| !self.excluded(dep)).collect();
                }
                Err(RegistryError::VersionNotFound { .. }) if !retried => {
                    warn!("version {} not found for '{}'", version, package);
                    match resolver.resolve(client, package).await {
                        Some(newest) if newest != version => {
                            info!("retrying '{}' with version {}", package, newest);
                            version = newest;
                            retried = true;
                        }
                        _ => return Vec::new(),
                    }
                }
                Err(e) => {
                    warn!("failed to fetch dependencies of '{}': {}", package, e);
                    return Vec::new();
                }
            }
        }
    }
}
