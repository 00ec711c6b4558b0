use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Version {version} not found for package {package}")]
    VersionNotFound { package: String, version: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
