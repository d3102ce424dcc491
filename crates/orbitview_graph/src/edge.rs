// SPDX-License-Identifier: MIT OR Apache-2.0
//! Edge identity values.
//!
//! Simple and valued graphs do not store edge objects; an [`EdgeId`] is
//! materialized on demand from the two endpoints. Network edges are
//! first-class values supplied by the caller and are wrapped unchanged.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Endpoint shape of an edge identity.
///
/// The unordered variant is canonicalized at construction (`lo <= hi`), so
/// the derived equality and hashing are independent of argument order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum EdgeKey<N, E> {
    /// Directed connection from `tail` to `head`.
    Ordered {
        /// Source endpoint
        tail: N,
        /// Destination endpoint
        head: N,
    },
    /// Undirected connection between `lo` and `hi`, `lo <= hi`.
    Unordered {
        /// Smaller endpoint by `Ord`
        lo: N,
        /// Larger endpoint by `Ord`
        hi: N,
    },
    /// A first-class edge value owned by a network.
    Native(E),
}

/// Canonical identity of a connection between two nodes.
///
/// Used as the map key for edge colors, labels, and notes. Identity is
/// defined by [`EdgeKey`] alone; the rendered edge-value text rides along
/// for display but never takes part in equality or hashing.
#[derive(Debug, Clone)]
pub struct EdgeId<N, E = &'static str> {
    key: EdgeKey<N, E>,
    value_text: String,
}

impl<N, E> EdgeId<N, E> {
    /// Identity of a directed edge from `tail` to `head`.
    pub fn ordered(tail: N, head: N) -> Self {
        Self {
            key: EdgeKey::Ordered { tail, head },
            value_text: String::new(),
        }
    }

    /// Identity of an undirected edge between `a` and `b`.
    ///
    /// `EdgeId::unordered(a, b)` and `EdgeId::unordered(b, a)` compare equal
    /// and hash equal.
    pub fn unordered(a: N, b: N) -> Self
    where
        N: Ord,
    {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self {
            key: EdgeKey::Unordered { lo, hi },
            value_text: String::new(),
        }
    }

    /// Identity wrapping a network's own edge value.
    pub fn native(edge: E) -> Self {
        Self {
            key: EdgeKey::Native(edge),
            value_text: String::new(),
        }
    }

    /// Attach the string form of the value associated with this edge.
    pub fn with_value_text(mut self, text: impl Into<String>) -> Self {
        self.value_text = text.into();
        self
    }

    /// String form of the edge's associated value, empty if it has none.
    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    /// The two endpoints, if this identity was derived from them.
    ///
    /// `None` for native network edges, whose endpoints live in the backing
    /// network rather than in the identity.
    pub fn endpoints(&self) -> Option<(&N, &N)> {
        match &self.key {
            EdgeKey::Ordered { tail, head } => Some((tail, head)),
            EdgeKey::Unordered { lo, hi } => Some((lo, hi)),
            EdgeKey::Native(_) => None,
        }
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for EdgeId<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N: Eq, E: Eq> Eq for EdgeId<N, E> {}

impl<N: Hash, E: Hash> Hash for EdgeId<N, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<N, E> fmt::Display for EdgeId<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value_text)
    }
}
