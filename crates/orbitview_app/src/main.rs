// SPDX-License-Identifier: MIT OR Apache-2.0
//! OrbitView - interactive edge-list graph viewer
//!
//! Loads a graph from an edge-list file, reports degree statistics, runs a
//! breadth-first shortest-path search between two nodes, and opens a window
//! displaying the graph with the found path highlighted. Nodes can be
//! dragged with the pointer.

mod app;
mod bfs;
mod degree;
mod ingest;

use clap::Parser;
use egui::Color32;
use orbitview_graph::{GraphAdapter, GraphDisplay};
use rand::Rng;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "orbitview",
    about = "orbitview: display an edge-list graph and highlight a BFS path",
    version
)]
struct Cli {
    /// Edge-list file: whitespace-separated node-id pairs, '#' comments
    path: PathBuf,

    /// Start node for the path search (random within range when omitted)
    #[arg(long, value_name = "ID")]
    source: Option<u32>,

    /// Target node for the path search (random within range when omitted)
    #[arg(long, value_name = "ID")]
    target: Option<u32>,

    /// Largest node id admitted from the edge list
    #[arg(long, default_value_t = 40)]
    max_node: u32,

    /// Treat edges as undirected
    #[arg(long)]
    undirected: bool,
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("orbitview_app=info".parse().unwrap())
        .add_directive("orbitview_graph=debug".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OrbitView v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("orbitview failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let graph = ingest::load_edge_list(&cli.path, cli.max_node, !cli.undirected)?;
    let adapter: GraphAdapter<String> = GraphAdapter::from(graph);

    let stats = degree::degree_stats(&adapter);
    tracing::info!(
        nodes = stats.node_count,
        edges = stats.edge_count,
        max_degree = stats.max_degree,
        avg_degree = stats.avg_degree,
        "graph loaded"
    );
    tracing::info!(nodes = ?stats.max_degree_nodes, "maximum-degree nodes");

    let mut rng = rand::thread_rng();
    let source = cli
        .source
        .unwrap_or_else(|| rng.gen_range(0..=cli.max_node))
        .to_string();
    let target = cli
        .target
        .unwrap_or_else(|| rng.gen_range(0..=cli.max_node))
        .to_string();
    let found = bfs::shortest_path(&adapter, &source, &target);

    let mut display = GraphDisplay::new(adapter);
    {
        let (adapter, store) = display.parts_mut();
        degree::color_by_degree(adapter, store);
        degree::highlight_max_degree(adapter, store);
    }
    match &found {
        Some(nodes) => {
            tracing::info!(
                from = %source,
                to = %target,
                hops = nodes.len() - 1,
                path = ?nodes,
                "path found"
            );
            display
                .store_mut()
                .set_node_colors(nodes.iter().cloned(), Color32::YELLOW);
        }
        None => tracing::info!(from = %source, to = %target, "no path found"),
    }

    app::run(display)?;
    Ok(())
}
