// SPDX-License-Identifier: MIT OR Apache-2.0
//! The three backing graph representations the adapter can display.
//!
//! All three keep insertion order (via `indexmap`) so node iteration, and
//! therefore layout and picking, is deterministic for a given build sequence.

use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;

/// A plain graph: nodes and unlabeled connections.
#[derive(Debug, Clone)]
pub struct SimpleGraph<N> {
    directed: bool,
    adjacency: IndexMap<N, IndexSet<N>>,
}

impl<N: Clone + Eq + Hash> SimpleGraph<N> {
    /// New directed graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            adjacency: IndexMap::new(),
        }
    }

    /// New undirected graph.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            adjacency: IndexMap::new(),
        }
    }

    /// Whether edges are directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add an isolated node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        match self.adjacency.entry(node) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(e) => {
                e.insert(IndexSet::new());
                true
            }
        }
    }

    /// Add an edge, inserting missing endpoints.
    pub fn add_edge(&mut self, a: N, b: N) {
        self.add_node(a.clone());
        self.add_node(b.clone());
        if !self.directed {
            self.adjacency[&b].insert(a.clone());
        }
        self.adjacency[&a].insert(b);
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Successors of `node` (all neighbors when undirected). Empty for an
    /// unknown node.
    pub fn successors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// Whether an edge connects `a` to `b` (in either direction when
    /// undirected).
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.adjacency.get(a).is_some_and(|s| s.contains(b))
    }
}

/// A graph with a value attached to every connection.
#[derive(Debug, Clone)]
pub struct ValueGraph<N, V> {
    directed: bool,
    adjacency: IndexMap<N, IndexSet<N>>,
    values: IndexMap<(N, N), V>,
}

impl<N: Clone + Eq + Hash + Ord, V> ValueGraph<N, V> {
    /// New directed value graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            adjacency: IndexMap::new(),
            values: IndexMap::new(),
        }
    }

    /// New undirected value graph.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            adjacency: IndexMap::new(),
            values: IndexMap::new(),
        }
    }

    /// Whether edges are directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add an isolated node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        match self.adjacency.entry(node) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(e) => {
                e.insert(IndexSet::new());
                true
            }
        }
    }

    /// Add an edge carrying `value`, inserting missing endpoints. A repeated
    /// edge replaces the previous value.
    pub fn add_edge(&mut self, a: N, b: N, value: V) {
        self.add_node(a.clone());
        self.add_node(b.clone());
        if !self.directed {
            self.adjacency[&b].insert(a.clone());
        }
        self.adjacency[&a].insert(b.clone());
        self.values.insert(self.value_key(a, b), value);
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Successors of `node` (all neighbors when undirected).
    pub fn successors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// Whether an edge connects `a` to `b`.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.adjacency.get(a).is_some_and(|s| s.contains(b))
    }

    /// The value on the edge from `a` to `b`, if the edge exists.
    pub fn edge_value(&self, a: &N, b: &N) -> Option<&V> {
        if !self.has_edge(a, b) {
            return None;
        }
        self.values.get(&self.value_key(a.clone(), b.clone()))
    }

    // Undirected edges store their value under one canonical endpoint order.
    fn value_key(&self, a: N, b: N) -> (N, N) {
        if self.directed || a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// A multi-edge network: edges are first-class values and two nodes may be
/// connected by any number of parallel edges.
#[derive(Debug, Clone)]
pub struct Network<N, E> {
    directed: bool,
    nodes: IndexSet<N>,
    edges: IndexMap<E, (N, N)>,
}

impl<N: Clone + Eq + Hash, E: Clone + Eq + Hash> Network<N, E> {
    /// New directed network.
    pub fn directed() -> Self {
        Self {
            directed: true,
            nodes: IndexSet::new(),
            edges: IndexMap::new(),
        }
    }

    /// New undirected network.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            nodes: IndexSet::new(),
            edges: IndexMap::new(),
        }
    }

    /// Whether edges are directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add an isolated node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        self.nodes.insert(node)
    }

    /// Add the edge value `edge` from `a` to `b`, inserting missing
    /// endpoints.
    pub fn add_edge(&mut self, edge: E, a: N, b: N) {
        self.nodes.insert(a.clone());
        self.nodes.insert(b.clone());
        self.edges.insert(edge, (a, b));
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All edge values in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &E> {
        self.edges.keys()
    }

    /// Successors of `node` (all neighbors when undirected), deduplicated
    /// across parallel edges.
    pub fn successors(&self, node: &N) -> IndexSet<&N> {
        let mut out = IndexSet::new();
        for (tail, head) in self.edges.values() {
            if tail == node {
                out.insert(head);
            }
            if !self.directed && head == node {
                out.insert(tail);
            }
        }
        out
    }

    /// Whether some edge connects `a` to `b`.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.edge_connecting(a, b).is_some()
    }

    /// The first edge (in insertion order) connecting `a` to `b`.
    pub fn edge_connecting(&self, a: &N, b: &N) -> Option<&E> {
        self.edges.iter().find_map(|(e, (tail, head))| {
            let hit = (tail == a && head == b) || (!self.directed && tail == b && head == a);
            hit.then_some(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_directed_adjacency() {
        let mut g = SimpleGraph::directed();
        g.add_edge("a", "b");
        g.add_edge("a", "c");
        assert!(g.has_edge(&"a", &"b"));
        assert!(!g.has_edge(&"b", &"a"));
        assert_eq!(g.successors(&"a").count(), 2);
        assert_eq!(g.successors(&"b").count(), 0);
        assert_eq!(g.successors(&"missing").count(), 0);
    }

    #[test]
    fn simple_undirected_adjacency() {
        let mut g = SimpleGraph::undirected();
        g.add_edge("a", "b");
        assert!(g.has_edge(&"a", &"b"));
        assert!(g.has_edge(&"b", &"a"));
        assert_eq!(g.successors(&"b").count(), 1);
    }

    #[test]
    fn value_graph_values() {
        let mut g = ValueGraph::undirected();
        g.add_edge("a", "b", 7);
        assert_eq!(g.edge_value(&"a", &"b"), Some(&7));
        assert_eq!(g.edge_value(&"b", &"a"), Some(&7));
        assert_eq!(g.edge_value(&"a", &"c"), None);
    }

    #[test]
    fn network_parallel_edges() {
        let mut g = Network::directed();
        g.add_edge("e1", "a", "b");
        g.add_edge("e2", "a", "b");
        g.add_edge("e3", "b", "c");
        assert_eq!(g.edge_connecting(&"a", &"b"), Some(&"e1"));
        assert_eq!(g.edge_connecting(&"b", &"a"), None);
        // Parallel edges count once for adjacency
        assert_eq!(g.successors(&"a").len(), 1);
        assert_eq!(g.edges().count(), 3);
    }

    #[test]
    fn network_undirected_neighbors() {
        let mut g = Network::undirected();
        g.add_edge(1, "a", "b");
        assert_eq!(g.edge_connecting(&"b", &"a"), Some(&1));
        assert_eq!(g.successors(&"b").len(), 1);
    }
}
