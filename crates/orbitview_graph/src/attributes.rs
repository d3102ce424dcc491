// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-element visual attributes: position, color, label, note.
//!
//! Four independent maps keyed by node or edge identity. Positions and
//! colors default lazily on first read and are then memoized; labels and
//! notes are cheap to recompute and are derived fresh on every miss.

use crate::edge::EdgeId;
use egui::{Color32, Pos2, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Default fill color of nodes.
pub const DEFAULT_NODE_COLOR: Color32 = Color32::from_rgb(192, 192, 255);

/// Default color of edges.
pub const DEFAULT_EDGE_COLOR: Color32 = Color32::BLUE;

/// Key of an attribute map entry: a node or an edge identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element<N, E = &'static str> {
    /// A node, by its identity value.
    Node(N),
    /// An edge, by its canonical identity.
    Edge(EdgeId<N, E>),
}

impl<N, E> Element<N, E> {
    /// Key for a node.
    pub fn node(n: N) -> Self {
        Self::Node(n)
    }

    /// Key for an edge.
    pub fn edge(id: EdgeId<N, E>) -> Self {
        Self::Edge(id)
    }
}

/// Owned store of visual attributes for one display session.
///
/// Setting an attribute for a key not present in the graph is permitted; the
/// entry is simply never read. Entries live until the session ends.
#[derive(Debug)]
pub struct AttributeStore<N, E = &'static str> {
    positions: HashMap<Element<N, E>, Pos2>,
    colors: HashMap<Element<N, E>, Color32>,
    labels: HashMap<Element<N, E>, String>,
    notes: HashMap<Element<N, E>, String>,
    canvas: Vec2,
    rng: StdRng,
}

impl<N, E> AttributeStore<N, E>
where
    N: Clone + Eq + Hash + fmt::Display,
    E: Clone + Eq + Hash,
{
    /// New empty store. Randomized position defaults fall within
    /// `canvas`, seeded from OS entropy.
    pub fn new(canvas: Vec2) -> Self {
        Self::from_rng(canvas, StdRng::from_entropy())
    }

    /// New empty store with a fixed seed for the position defaults.
    pub fn with_seed(canvas: Vec2, seed: u64) -> Self {
        Self::from_rng(canvas, StdRng::seed_from_u64(seed))
    }

    fn from_rng(canvas: Vec2, rng: StdRng) -> Self {
        Self {
            positions: HashMap::new(),
            colors: HashMap::new(),
            labels: HashMap::new(),
            notes: HashMap::new(),
            canvas,
            rng,
        }
    }

    /// Position of `key`. A missing position is assigned once at random
    /// within the canvas and memoized; it is never re-randomized.
    pub fn position(&mut self, key: &Element<N, E>) -> Pos2 {
        if let Some(&p) = self.positions.get(key) {
            return p;
        }
        let p = Pos2::new(
            self.rng.gen_range(0.0..self.canvas.x),
            self.rng.gen_range(0.0..self.canvas.y),
        );
        self.positions.insert(key.clone(), p);
        p
    }

    /// Set the position of `key`.
    pub fn set_position(&mut self, key: Element<N, E>, pos: Pos2) {
        self.positions.insert(key, pos);
    }

    /// Overlay multiple positions; keys not in `positions` keep their value.
    pub fn set_positions(&mut self, positions: impl IntoIterator<Item = (Element<N, E>, Pos2)>) {
        self.positions.extend(positions);
    }

    /// Color of `key`. A missing color defaults to the node or edge default
    /// and is memoized.
    pub fn color(&mut self, key: &Element<N, E>) -> Color32 {
        if let Some(&c) = self.colors.get(key) {
            return c;
        }
        let c = match key {
            Element::Node(_) => DEFAULT_NODE_COLOR,
            Element::Edge(_) => DEFAULT_EDGE_COLOR,
        };
        self.colors.insert(key.clone(), c);
        c
    }

    /// Set the color of `key`.
    pub fn set_color(&mut self, key: Element<N, E>, color: Color32) {
        self.colors.insert(key, color);
    }

    /// Overlay multiple colors; keys not in `colors` keep their value.
    pub fn set_colors(&mut self, colors: impl IntoIterator<Item = (Element<N, E>, Color32)>) {
        self.colors.extend(colors);
    }

    /// Paint every node in `nodes` with one color.
    pub fn set_node_colors(&mut self, nodes: impl IntoIterator<Item = N>, color: Color32) {
        self.set_colors(nodes.into_iter().map(|n| (Element::node(n), color)));
    }

    /// Paint every edge in `edges` with one color.
    pub fn set_edge_colors(
        &mut self,
        edges: impl IntoIterator<Item = EdgeId<N, E>>,
        color: Color32,
    ) {
        self.set_colors(edges.into_iter().map(|e| (Element::edge(e), color)));
    }

    /// Label of `key`. Defaults to the element's own string form: the node's
    /// display form, or the edge's associated value text. Not memoized.
    pub fn label(&self, key: &Element<N, E>) -> String {
        if let Some(l) = self.labels.get(key) {
            return l.clone();
        }
        match key {
            Element::Node(n) => n.to_string(),
            Element::Edge(e) => e.value_text().to_owned(),
        }
    }

    /// Set the label of `key`.
    pub fn set_label(&mut self, key: Element<N, E>, label: impl Into<String>) {
        self.labels.insert(key, label.into());
    }

    /// Overlay multiple labels; keys not in `labels` keep their value.
    pub fn set_labels(&mut self, labels: impl IntoIterator<Item = (Element<N, E>, String)>) {
        self.labels.extend(labels);
    }

    /// Note on `key`, empty if unset. Not memoized.
    pub fn note(&self, key: &Element<N, E>) -> String {
        self.notes.get(key).cloned().unwrap_or_default()
    }

    /// Set the note on `key`.
    pub fn set_note(&mut self, key: Element<N, E>, note: impl Into<String>) {
        self.notes.insert(key, note.into());
    }

    /// Overlay multiple notes; keys not in `notes` keep their value.
    pub fn set_notes(&mut self, notes: impl IntoIterator<Item = (Element<N, E>, String)>) {
        self.notes.extend(notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> AttributeStore<&'static str> {
        AttributeStore::with_seed(Vec2::new(1000.0, 800.0), 7)
    }

    #[test]
    fn position_default_is_memoized() {
        let mut s = store();
        let key = Element::node("a");
        let first = s.position(&key);
        let second = s.position(&key);
        assert_eq!(first, second);
        assert!(first.x >= 0.0 && first.x < 1000.0);
        assert!(first.y >= 0.0 && first.y < 800.0);
    }

    #[test]
    fn color_defaults_distinguish_nodes_and_edges() {
        let mut s = store();
        assert_eq!(s.color(&Element::node("a")), DEFAULT_NODE_COLOR);
        let edge = Element::edge(EdgeId::ordered("a", "b"));
        assert_eq!(s.color(&edge), DEFAULT_EDGE_COLOR);
    }

    #[test]
    fn color_roundtrip_for_node_and_edge_keys() {
        let mut s = store();
        let node = Element::node("a");
        let edge = Element::edge(EdgeId::unordered("a", "b"));
        s.set_color(node.clone(), Color32::YELLOW);
        s.set_color(edge.clone(), Color32::GREEN);
        assert_eq!(s.color(&node), Color32::YELLOW);
        assert_eq!(s.color(&edge), Color32::GREEN);
        // Symmetric key reads back the same entry
        let flipped = Element::edge(EdgeId::unordered("b", "a"));
        assert_eq!(s.color(&flipped), Color32::GREEN);
    }

    #[test]
    fn label_defaults_to_string_form() {
        let s = store();
        assert_eq!(s.label(&Element::node("a")), "a");
        let edge = Element::edge(EdgeId::ordered("a", "b").with_value_text("3.5"));
        assert_eq!(s.label(&edge), "3.5");
        assert_eq!(s.note(&Element::node("a")), "");
    }

    #[test]
    fn bulk_set_overlays_without_clearing() {
        let mut s = store();
        s.set_label(Element::node("a"), "alpha");
        s.set_labels([(Element::node("b"), "beta".to_owned())]);
        assert_eq!(s.label(&Element::node("a")), "alpha");
        assert_eq!(s.label(&Element::node("b")), "beta");

        s.set_node_colors(["a", "b"], Color32::RED);
        assert_eq!(s.color(&Element::node("a")), Color32::RED);
        assert_eq!(s.color(&Element::node("b")), Color32::RED);
    }

    #[test]
    fn dead_entries_are_harmless() {
        let mut s = store();
        s.set_note(Element::node("not-in-any-graph"), "orphan");
        assert_eq!(s.note(&Element::node("not-in-any-graph")), "orphan");
    }
}
