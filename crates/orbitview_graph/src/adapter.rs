// SPDX-License-Identifier: MIT OR Apache-2.0
//! Uniform query surface over the three backing graph representations.

use crate::backing::{Network, SimpleGraph, ValueGraph};
use crate::edge::EdgeId;
use indexmap::IndexSet;
use std::fmt;
use std::hash::Hash;

/// Read-only view normalizing a backing graph into one capability set:
/// node set, adjacency, edge identity, degree.
///
/// Exactly one representation is active for the adapter's lifetime; being an
/// enum, an unsupported kind cannot be constructed. The adapter owns the
/// backing structure and never mutates it.
#[derive(Debug, Clone)]
pub enum GraphAdapter<N, V = &'static str, E = &'static str> {
    /// A plain graph.
    Simple(SimpleGraph<N>),
    /// An edge-valued graph.
    Valued(ValueGraph<N, V>),
    /// A multi-edge network.
    Network(Network<N, E>),
}

impl<N, V, E> GraphAdapter<N, V, E>
where
    N: Clone + Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    E: Clone + Eq + Hash + fmt::Display,
{
    /// All nodes, in the backing graph's insertion order.
    pub fn nodes(&self) -> Vec<&N> {
        match self {
            Self::Simple(g) => g.nodes().collect(),
            Self::Valued(g) => g.nodes().collect(),
            Self::Network(g) => g.nodes().collect(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Simple(g) => g.node_count(),
            Self::Valued(g) => g.node_count(),
            Self::Network(g) => g.node_count(),
        }
    }

    /// Whether the backing graph's edges are directed.
    pub fn is_directed(&self) -> bool {
        match self {
            Self::Simple(g) => g.is_directed(),
            Self::Valued(g) => g.is_directed(),
            Self::Network(g) => g.is_directed(),
        }
    }

    /// Nodes adjacent to `node`: successors for directed graphs and
    /// networks, all neighbors for undirected graphs. Empty for a node not
    /// in the graph.
    pub fn adjacent_nodes(&self, node: &N) -> Vec<&N> {
        match self {
            Self::Simple(g) => g.successors(node).collect(),
            Self::Valued(g) => g.successors(node).collect(),
            Self::Network(g) => g.successors(node).into_iter().collect(),
        }
    }

    /// Degree of `node`, the size of its adjacency set.
    pub fn degree(&self, node: &N) -> usize {
        self.adjacent_nodes(node).len()
    }

    /// Whether an edge connects `a` to `b`.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        match self {
            Self::Simple(g) => g.has_edge(a, b),
            Self::Valued(g) => g.has_edge(a, b),
            Self::Network(g) => g.has_edge(a, b),
        }
    }

    /// The identity of the edge connecting `a` to `b`, or `None` if they are
    /// not adjacent.
    ///
    /// Simple and valued graphs materialize the identity from the endpoints
    /// (ordered when directed, unordered otherwise); a valued graph attaches
    /// the value's string form. A network reuses its own edge value.
    pub fn edge_between(&self, a: &N, b: &N) -> Option<EdgeId<N, E>> {
        match self {
            Self::Simple(g) => {
                g.has_edge(a, b).then(|| Self::derived(a, b, g.is_directed()))
            }
            Self::Valued(g) => {
                let value = g.edge_value(a, b)?;
                Some(Self::derived(a, b, g.is_directed()).with_value_text(value.to_string()))
            }
            Self::Network(g) => {
                let e = g.edge_connecting(a, b)?;
                Some(EdgeId::native(e.clone()).with_value_text(e.to_string()))
            }
        }
    }

    /// All edge identities, deduplicated via [`EdgeId`] equality.
    ///
    /// An undirected connection appears once even though both endpoints list
    /// each other as adjacent.
    pub fn edges(&self) -> IndexSet<EdgeId<N, E>> {
        let mut out = IndexSet::new();
        if let Self::Network(g) = self {
            for e in g.edges() {
                out.insert(EdgeId::native(e.clone()).with_value_text(e.to_string()));
            }
            return out;
        }
        for n in self.nodes() {
            for m in self.adjacent_nodes(n) {
                if let Some(id) = self.edge_between(n, m) {
                    out.insert(id);
                }
            }
        }
        out
    }

    fn derived(a: &N, b: &N, directed: bool) -> EdgeId<N, E> {
        if directed {
            EdgeId::ordered(a.clone(), b.clone())
        } else {
            EdgeId::unordered(a.clone(), b.clone())
        }
    }
}

impl<N, V, E> From<SimpleGraph<N>> for GraphAdapter<N, V, E> {
    fn from(g: SimpleGraph<N>) -> Self {
        Self::Simple(g)
    }
}

impl<N, V, E> From<ValueGraph<N, V>> for GraphAdapter<N, V, E> {
    fn from(g: ValueGraph<N, V>) -> Self {
        Self::Valued(g)
    }
}

impl<N, V, E> From<Network<N, E>> for GraphAdapter<N, V, E> {
    fn from(g: Network<N, E>) -> Self {
        Self::Network(g)
    }
}
