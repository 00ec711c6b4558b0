use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate_deps::config::{RunConfig, SAMPLE_PACKAGES};
use crate_deps::graph::{BuildContext, DepGraph, DependencyFetcher, GraphBuilder};
use crate_deps::registry::{CratesIoClient, RegistryClient};
use crate_deps::render;

#[derive(Parser)]
#[command(name = "crate-deps")]
#[command(version, about = "Shallow dependency graph visualizer for crates.io packages")]
struct Cli {
    /// Package to analyze
    #[arg(long)]
    package: String,

    /// Version to analyze ("latest" resolves the newest published version)
    #[arg(long, default_value = "latest")]
    version: String,

    /// Substring filter; matching package names are excluded from the graph
    #[arg(long, default_value = "")]
    filter: String,

    /// Use scripted sample data instead of querying the registry
    #[arg(long)]
    test_mode: bool,

    /// Also analyze a fixed set of sample packages, one DOT file each
    #[arg(long)]
    batch: bool,

    /// Directory where DOT and PNG files are written
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // A partially built graph is discarded on interruption, never persisted
    tokio::select! {
        result = analyze_all(&cli) => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted, discarding partial results");
            Ok(())
        }
    }
}

async fn analyze_all(cli: &Cli) -> anyhow::Result<()> {
    if cli.test_mode {
        info!("test mode: using scripted sample data");
        emit(&sample_graph(), &cli.output_dir).await?;
        return Ok(());
    }

    let client = CratesIoClient::default();

    let config = RunConfig::new(&cli.package, &cli.version, &cli.filter);
    analyze(&client, &config, &cli.output_dir).await?;

    if cli.batch {
        for (package, version) in SAMPLE_PACKAGES {
            let config = RunConfig::new(package, version, &cli.filter);
            analyze(&client, &config, &cli.output_dir).await?;
        }
        info!(
            "batch analysis of {} packages finished",
            SAMPLE_PACKAGES.len()
        );
    }

    Ok(())
}

async fn analyze(
    client: &dyn RegistryClient,
    config: &RunConfig,
    output_dir: &Path,
) -> anyhow::Result<()> {
    let builder = GraphBuilder::new(client, DependencyFetcher::new(&config.filter));

    // Fresh context per root package: nothing carries over between runs
    let mut ctx = BuildContext::new();
    let graph = builder
        .build(&mut ctx, &config.package, &config.version)
        .await;

    println!("Direct dependencies of {}:", graph.root());
    for dep in graph.direct_deps() {
        println!("  -> {dep}");
    }

    emit(&graph, output_dir).await
}

async fn emit(graph: &DepGraph, output_dir: &Path) -> anyhow::Result<()> {
    print!("{}", render::render_dot(graph));

    let dot_path = render::write_dot_file(graph, output_dir)?;
    info!("DOT file written: {}", dot_path.display());

    if render::dot_available().await {
        match render::render_png(&dot_path).await {
            Ok(png_path) => info!("graph rendered: {}", png_path.display()),
            Err(e) => warn!("failed to render image: {}", e),
        }
    } else {
        warn!("Graphviz 'dot' not found; writing DOT file only");
        println!(
            "To render the image: dot -Tpng {} -o {}_deps.png",
            dot_path.display(),
            graph.root()
        );
    }

    Ok(())
}

/// Scripted graph used by `--test-mode`, no network access required
fn sample_graph() -> DepGraph {
    let mut graph = DepGraph::new("serde");
    graph.insert(
        "serde",
        vec!["serde_derive".to_string(), "serde_core".to_string()],
    );
    graph.insert(
        "tokio",
        vec![
            "futures".to_string(),
            "mio".to_string(),
            "tokio-macros".to_string(),
        ],
    );
    graph.insert(
        "reqwest",
        vec![
            "hyper".to_string(),
            "tokio".to_string(),
            "serde".to_string(),
        ],
    );
    graph
}
