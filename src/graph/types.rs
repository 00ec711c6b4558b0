//! Graph value produced by the builder and consumed by renderers

use indexmap::IndexMap;

/// Shallow dependency graph for one root package
///
/// Maps a package name to its dependency names in the order the registry
/// returned them. Leaf dependencies do not get their own entry; the root
/// package always has one, even when its list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepGraph {
    root: String,
    edges: IndexMap<String, Vec<String>>,
}

impl DepGraph {
    /// Creates a graph containing only the root package with no dependencies
    pub fn new(root: &str) -> Self {
        let mut edges = IndexMap::new();
        edges.insert(root.to_string(), Vec::new());
        Self {
            root: root.to_string(),
            edges,
        }
    }

    /// The root package this graph was built for
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Sets the dependency list for a package, keeping insertion order
    pub fn insert(&mut self, package: &str, deps: Vec<String>) {
        self.edges.insert(package.to_string(), deps);
    }

    /// Dependency names recorded for a package, if it has an entry
    pub fn get(&self, package: &str) -> Option<&[String]> {
        self.edges.get(package).map(Vec::as_slice)
    }

    /// Direct dependencies of the root package
    pub fn direct_deps(&self) -> &[String] {
        self.get(&self.root).unwrap_or(&[])
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges
            .iter()
            .map(|(package, deps)| (package.as_str(), deps.as_slice()))
    }

    /// Number of packages with an entry
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
