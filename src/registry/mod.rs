//! Registry access layer for package metadata
//!
//! # Modules
//!
//! - [`client`]: Client trait for fetching package metadata from a registry
//! - [`crates_io`]: Concrete client for the crates.io API
//! - [`error`]: Error types for registry operations

pub mod client;
pub mod crates_io;
pub mod error;

pub use client::RegistryClient;
pub use crates_io::CratesIoClient;
pub use error::RegistryError;
