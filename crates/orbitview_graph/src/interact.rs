// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pointer-driven node dragging.
//!
//! The controller is a plain state machine, independent of any toolkit; the
//! display widget feeds it press/drag/release events in canvas coordinates.

use crate::adapter::GraphAdapter;
use crate::attributes::{AttributeStore, Element};
use egui::Pos2;
use std::fmt;
use std::hash::Hash;

/// Current phase of a drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPhase<N> {
    /// No button held.
    Idle,
    /// Button pressed at a point; no node resolved yet.
    Pressed {
        /// Where the press landed, in canvas coordinates.
        at: Pos2,
    },
    /// A node is being dragged.
    Dragging {
        /// The node under drag; the only node that moves.
        node: N,
        /// Latest drag point, also the node's current position.
        at: Pos2,
    },
}

/// Tracks one pointer gesture and moves the picked node through the store.
///
/// The node is resolved on the first drag step from the *press* point: the
/// node with the smallest center distance within the pick radius wins, ties
/// broken by smallest node identity. A press that hits nothing leaves later
/// drag steps inert until release.
#[derive(Debug)]
pub struct DragController<N> {
    phase: DragPhase<N>,
    pick_radius: f32,
}

impl<N> DragController<N>
where
    N: Clone + Eq + Hash + Ord + fmt::Display,
{
    /// New idle controller with the given pick radius.
    pub fn new(pick_radius: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            pick_radius,
        }
    }

    /// Current gesture phase.
    pub fn phase(&self) -> &DragPhase<N> {
        &self.phase
    }

    /// Pointer pressed at `at`.
    pub fn on_press(&mut self, at: Pos2) {
        self.phase = DragPhase::Pressed { at };
    }

    /// Pointer moved to `to` while held. Returns `true` if a node moved and
    /// a redraw is warranted.
    pub fn on_drag<V, E>(
        &mut self,
        to: Pos2,
        adapter: &GraphAdapter<N, V, E>,
        store: &mut AttributeStore<N, E>,
    ) -> bool
    where
        V: fmt::Display,
        E: Clone + Eq + Hash + fmt::Display,
    {
        match &self.phase {
            DragPhase::Idle => false,
            DragPhase::Pressed { at } => {
                let Some(node) = Self::pick_node(*at, self.pick_radius, adapter, store) else {
                    return false;
                };
                store.set_position(Element::node(node.clone()), to);
                self.phase = DragPhase::Dragging { node, at: to };
                true
            }
            DragPhase::Dragging { node, .. } => {
                let node = node.clone();
                store.set_position(Element::node(node.clone()), to);
                self.phase = DragPhase::Dragging { node, at: to };
                true
            }
        }
    }

    /// Pointer released; the tracked node is cleared.
    pub fn on_release(&mut self) {
        self.phase = DragPhase::Idle;
    }

    fn pick_node<V, E>(
        at: Pos2,
        radius: f32,
        adapter: &GraphAdapter<N, V, E>,
        store: &mut AttributeStore<N, E>,
    ) -> Option<N>
    where
        V: fmt::Display,
        E: Clone + Eq + Hash + fmt::Display,
    {
        let mut best: Option<(f32, N)> = None;
        for node in adapter.nodes() {
            let d = store.position(&Element::node(node.clone())).distance(at);
            if d > radius {
                continue;
            }
            let closer = match &best {
                None => true,
                Some((bd, bn)) => d < *bd || (d == *bd && node < bn),
            };
            if closer {
                best = Some((d, node.clone()));
            }
        }
        best.map(|(_, n)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backing::SimpleGraph;
    use egui::Vec2;

    const PICK: f32 = 16.0;

    fn fixture() -> (GraphAdapter<&'static str>, AttributeStore<&'static str>) {
        let mut g = SimpleGraph::directed();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        let adapter = GraphAdapter::Simple(g);
        let mut store = AttributeStore::with_seed(Vec2::new(1000.0, 800.0), 3);
        store.set_position(Element::node("a"), Pos2::new(100.0, 100.0));
        store.set_position(Element::node("b"), Pos2::new(300.0, 100.0));
        store.set_position(Element::node("c"), Pos2::new(500.0, 100.0));
        (adapter, store)
    }

    #[test]
    fn drag_sequence_moves_only_the_picked_node() {
        let (adapter, mut store) = fixture();
        let mut drag = DragController::new(PICK);

        drag.on_press(Pos2::new(104.0, 103.0));
        assert!(drag.on_drag(Pos2::new(150.0, 140.0), &adapter, &mut store));
        assert!(drag.on_drag(Pos2::new(220.0, 180.0), &adapter, &mut store));
        drag.on_release();

        assert_eq!(
            store.position(&Element::node("a")),
            Pos2::new(220.0, 180.0)
        );
        assert_eq!(
            store.position(&Element::node("b")),
            Pos2::new(300.0, 100.0)
        );
        assert_eq!(
            store.position(&Element::node("c")),
            Pos2::new(500.0, 100.0)
        );
        assert_eq!(*drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn press_release_without_drag_moves_nothing() {
        let (_, mut store) = fixture();
        let mut drag: DragController<&str> = DragController::new(PICK);
        drag.on_press(Pos2::new(100.0, 100.0));
        drag.on_release();
        assert_eq!(
            store.position(&Element::node("a")),
            Pos2::new(100.0, 100.0)
        );
    }

    #[test]
    fn missed_press_leaves_drags_inert() {
        let (adapter, mut store) = fixture();
        let mut drag = DragController::new(PICK);
        drag.on_press(Pos2::new(700.0, 700.0));
        assert!(!drag.on_drag(Pos2::new(710.0, 710.0), &adapter, &mut store));
        assert_eq!(
            store.position(&Element::node("a")),
            Pos2::new(100.0, 100.0)
        );
    }

    #[test]
    fn nearest_node_wins_and_ties_break_by_identity() {
        let (adapter, mut store) = fixture();
        // Two nodes equidistant from the press point
        store.set_position(Element::node("a"), Pos2::new(90.0, 100.0));
        store.set_position(Element::node("b"), Pos2::new(110.0, 100.0));
        let mut drag = DragController::new(PICK);
        drag.on_press(Pos2::new(100.0, 100.0));
        assert!(drag.on_drag(Pos2::new(130.0, 130.0), &adapter, &mut store));
        match drag.phase() {
            DragPhase::Dragging { node, .. } => assert_eq!(*node, "a"),
            other => panic!("expected dragging, got {other:?}"),
        }
    }

    #[test]
    fn drag_resolves_node_from_press_point_not_drag_point() {
        let (adapter, mut store) = fixture();
        let mut drag = DragController::new(PICK);
        // Press on "c", first drag lands near "a": "c" must move
        drag.on_press(Pos2::new(498.0, 102.0));
        assert!(drag.on_drag(Pos2::new(101.0, 101.0), &adapter, &mut store));
        match drag.phase() {
            DragPhase::Dragging { node, .. } => assert_eq!(*node, "c"),
            other => panic!("expected dragging, got {other:?}"),
        }
    }
}
