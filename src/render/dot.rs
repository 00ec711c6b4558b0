//! Graphviz DOT output for dependency graphs

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::process::Command;
use tracing::warn;

use crate::graph::types::DepGraph;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dot exited with status {0}")]
    DotFailed(std::process::ExitStatus),
}

/// Renders a graph as Graphviz DOT text
///
/// The root package is drawn as a blue node; every edge points from a
/// package to one of its dependencies, in graph order.
pub fn render_dot(graph: &DepGraph) -> String {
    let mut out = String::from("digraph {\n  rankdir=LR;\n  node [shape=box];\n\n");
    out.push_str(&format!("  \"{}\" [color=blue];\n\n", graph.root()));

    for (package, deps) in graph.iter() {
        for dep in deps {
            out.push_str(&format!("  \"{}\" -> \"{}\";\n", package, dep));
        }
    }

    out.push_str("}\n");
    out
}

/// Writes the DOT text for `graph` to `<root>_deps.dot` under `dir`
pub fn write_dot_file(graph: &DepGraph, dir: &Path) -> Result<PathBuf, RenderError> {
    let path = dir.join(format!("{}_deps.dot", graph.root()));
    std::fs::write(&path, render_dot(graph))?;
    Ok(path)
}

/// Checks whether the Graphviz `dot` binary is available
pub async fn dot_available() -> bool {
    match Command::new("dot").arg("-V").output().await {
        Ok(output) => output.status.success(),
        Err(e) => {
            warn!("failed to probe for dot: {}", e);
            false
        }
    }
}

/// Renders a DOT file to a PNG next to it by invoking `dot`
pub async fn render_png(dot_path: &Path) -> Result<PathBuf, RenderError> {
    let png_path = dot_path.with_extension("png");

    let status = Command::new("dot")
        .arg("-Tpng")
        .arg(dot_path)
        .arg("-o")
        .arg(&png_path)
        .status()
        .await?;

    if !status.success() {
        return Err(RenderError::DotFailed(status));
    }

    Ok(png_path)
}
