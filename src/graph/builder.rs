//! Two-level dependency graph assembly

use std::collections::HashSet;

use tracing::info;

use crate::config::{LATEST, MAX_EXPANDED_DEPS};
use crate::graph::fetcher::DependencyFetcher;
use crate::graph::resolver::VersionResolver;
use crate::graph::types::DepGraph;
use crate::registry::client::RegistryClient;

/// Mutable state scoped to a single analysis run
///
/// A fresh context is created per root package; nothing carries over between
/// runs in a batch.
#[derive(Debug, Default)]
pub struct BuildContext {
    resolver: VersionResolver,
    visited: HashSet<String>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Assembles a shallow dependency graph for one root package
///
/// The graph holds the root's direct dependencies plus one extra level for
/// at most the first [`MAX_EXPANDED_DEPS`] of them. The cap is deliberate:
/// it bounds registry traffic regardless of how many dependencies the root
/// declares.
pub struct GraphBuilder<'a> {
    client: &'a dyn RegistryClient,
    fetcher: DependencyFetcher,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(client: &'a dyn RegistryClient, fetcher: DependencyFetcher) -> Self {
        Self { client, fetcher }
    }

    /// Build the graph for `package` at `version`
    pub async fn build(&self, ctx: &mut BuildContext, package: &str, version: &str) -> DepGraph {
        info!("fetching dependencies for '{}'", package);

        let direct = self
            .fetcher
            .fetch(self.client, &mut ctx.resolver, package, version)
            .await;

        let mut graph = DepGraph::new(package);

        if direct.is_empty() {
            info!("no dependencies found for '{}'", package);
            return graph;
        }

        graph.insert(package, direct.clone());

        for dep in direct.iter().take(MAX_EXPANDED_DEPS) {
            // Insert before fetching so a duplicate name is expanded once
            if !ctx.visited.insert(dep.clone()) {
                continue;
            }
            let sub = self
                .fetcher
                .fetch(self.client, &mut ctx.resolver, dep, LATEST)
                .await;
            if !sub.is_empty() {
                graph.insert(dep, sub);
            }
        }

        info!("found {} direct dependencies", direct.len());

        graph
    }
}
