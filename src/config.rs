// =============================================================================
// Analysis constants
// =============================================================================

/// Timeout for registry fetch operations in milliseconds (10 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 10_000;

/// Number of direct dependencies expanded one level deeper
pub const MAX_EXPANDED_DEPS: usize = 3;

/// Sentinel version meaning "resolve the newest published version"
pub const LATEST: &str = "latest";

/// Sample packages analyzed in batch mode
pub const SAMPLE_PACKAGES: &[(&str, &str)] =
    &[("serde", "latest"), ("tokio", "1.0"), ("clap", "4.0")];

/// Configuration for a single analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Root package to analyze
    pub package: String,
    /// Requested version; [`LATEST`] resolves the newest published version
    pub version: String,
    /// Substring filter; matching package names are excluded from the graph
    pub filter: String,
}

impl RunConfig {
    pub fn new(package: &str, version: &str, filter: &str) -> Self {
        Self {
            package: package.to_string(),
            version: version.to_string(),
            filter: filter.to_string(),
        }
    }

    /// Configuration that analyzes the newest version with no filter
    pub fn latest(package: &str) -> Self {
        Self::new(package, LATEST, "")
    }
}
