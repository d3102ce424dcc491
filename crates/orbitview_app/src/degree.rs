// SPDX-License-Identifier: MIT OR Apache-2.0
//! Degree statistics and degree-based coloring.
//!
//! Simple consumers of the adapter's degree queries; they write styling
//! through the attribute store like any other caller.

use egui::Color32;
use orbitview_graph::{AttributeStore, Element, GraphAdapter};
use std::fmt;
use std::hash::Hash;

/// Summary degree statistics of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeStats<N> {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,
    /// Largest node degree, 0 for an empty graph.
    pub max_degree: usize,
    /// Mean node degree, 0.0 for an empty graph.
    pub avg_degree: f64,
    /// Every node whose degree equals `max_degree`.
    pub max_degree_nodes: Vec<N>,
}

/// Compute degree statistics for `adapter`.
pub fn degree_stats<N, V, E>(adapter: &GraphAdapter<N, V, E>) -> DegreeStats<N>
where
    N: Clone + Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    E: Clone + Eq + Hash + fmt::Display,
{
    let mut max_degree = 0;
    let mut total = 0usize;
    let mut max_degree_nodes = Vec::new();
    for node in adapter.nodes() {
        let degree = adapter.degree(node);
        total += degree;
        if degree > max_degree {
            max_degree = degree;
            max_degree_nodes.clear();
            max_degree_nodes.push(node.clone());
        } else if degree == max_degree {
            max_degree_nodes.push(node.clone());
        }
    }
    let node_count = adapter.node_count();
    DegreeStats {
        node_count,
        edge_count: adapter.edges().len(),
        max_degree,
        avg_degree: if node_count == 0 {
            0.0
        } else {
            total as f64 / node_count as f64
        },
        max_degree_nodes,
    }
}

/// Paint every node a gray shade scaled by degree: minimum degree is white,
/// maximum is black. A uniform-degree graph gets a single light shade.
pub fn color_by_degree<N, V, E>(
    adapter: &GraphAdapter<N, V, E>,
    store: &mut AttributeStore<N, E>,
) where
    N: Clone + Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    E: Clone + Eq + Hash + fmt::Display,
{
    let degrees: Vec<(N, usize)> = adapter
        .nodes()
        .into_iter()
        .map(|n| (n.clone(), adapter.degree(n)))
        .collect();
    let Some(&max) = degrees.iter().map(|(_, d)| d).max() else {
        return;
    };
    let min = *degrees.iter().map(|(_, d)| d).min().unwrap_or(&0);
    for (node, degree) in degrees {
        let intensity: u8 = if max == min {
            255
        } else {
            let scaled = (255.0 * (degree - min) as f64 / (max - min) as f64) as u32;
            255u32.saturating_sub(scaled) as u8
        };
        store.set_color(Element::node(node), Color32::from_gray(intensity));
    }
}

/// Paint every maximum-degree node green.
pub fn highlight_max_degree<N, V, E>(
    adapter: &GraphAdapter<N, V, E>,
    store: &mut AttributeStore<N, E>,
) where
    N: Clone + Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    E: Clone + Eq + Hash + fmt::Display,
{
    let stats = degree_stats(adapter);
    store.set_node_colors(stats.max_degree_nodes, Color32::GREEN);
}
