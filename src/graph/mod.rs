//! Dependency graph construction layer
//!
//! This module provides the core functionality for resolving package versions,
//! fetching declared dependencies, and assembling a shallow dependency graph
//! bounded to two levels.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Builder   │────▶│   Fetcher   │────▶│  Resolver   │
//! │  (assemble) │     │   (deps)    │     │  (versions) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                   │
//!        ▼                   └───────┬───────────┘
//! ┌─────────────┐                    ▼
//! │  DepGraph   │             ┌─────────────┐
//! │  (output)   │             │  Registry   │
//! └─────────────┘             │  (network)  │
//!                             └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`builder`]: Two-level graph assembly with per-run build context
//! - [`fetcher`]: Per-package dependency fetch with filtering and fallback
//! - [`resolver`]: Memoized newest-version resolution
//! - [`types`]: The `DepGraph` value consumed by renderers

pub mod builder;
pub mod fetcher;
pub mod resolver;
pub mod types;

pub use builder::{BuildContext, GraphBuilder};
pub use fetcher::DependencyFetcher;
pub use resolver::VersionResolver;
pub use types::DepGraph;
