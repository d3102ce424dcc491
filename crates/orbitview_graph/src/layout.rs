// SPDX-License-Identifier: MIT OR Apache-2.0
//! Initial node placement.

use crate::attributes::{AttributeStore, Element};
use egui::Pos2;
use std::f32::consts::PI;
use std::fmt;
use std::hash::Hash;

/// Distribute `nodes` evenly around an ellipse inscribed in a `width` x
/// `height` canvas, writing positions into `store`.
///
/// Node `i` of `n` sits at angle `PI/2 + (2i + 0.5) * PI / n` on an ellipse
/// with semi-axes `width / 2.5` and `height / 2.5` centered on the canvas.
/// The half-step offset keeps the first node off the top seam. Deterministic
/// and collision-free; drag interaction is the only thing that moves nodes
/// afterwards. No-op for an empty sequence.
pub fn assign_radial_layout<N, E>(
    nodes: impl IntoIterator<Item = N>,
    width: f32,
    height: f32,
    store: &mut AttributeStore<N, E>,
) where
    N: Clone + Eq + Hash + fmt::Display,
    E: Clone + Eq + Hash,
{
    let nodes: Vec<N> = nodes.into_iter().collect();
    let n = nodes.len();
    for (i, node) in nodes.into_iter().enumerate() {
        let angle = PI / 2.0 + ((2 * i) as f32 + 0.5) * PI / n as f32;
        let pos = Pos2::new(
            width / 2.0 + width * angle.cos() / 2.5,
            height / 2.0 + height * angle.sin() / 2.5,
        );
        store.set_position(Element::node(node), pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;

    const W: f32 = 1000.0;
    const H: f32 = 800.0;

    fn laid_out(n: usize) -> Vec<Pos2> {
        let mut store: AttributeStore<usize> = AttributeStore::with_seed(Vec2::new(W, H), 0);
        assign_radial_layout(0..n, W, H, &mut store);
        (0..n).map(|i| store.position(&Element::node(i))).collect()
    }

    #[test]
    fn positions_are_distinct_and_in_bounds() {
        let positions = laid_out(12);
        for (i, p) in positions.iter().enumerate() {
            assert!(p.x >= 0.0 && p.x <= W, "x out of bounds: {p:?}");
            assert!(p.y >= 0.0 && p.y <= H, "y out of bounds: {p:?}");
            for q in &positions[i + 1..] {
                assert!((*p - *q).length() > 1.0, "colliding positions {p:?} {q:?}");
            }
        }
    }

    #[test]
    fn spacing_is_uniform() {
        let n = 8;
        let positions = laid_out(n);
        let center = Pos2::new(W / 2.0, H / 2.0);
        let angle_of = |p: Pos2| {
            // Undo the ellipse stretch before measuring the angle
            ((p.y - center.y) / (H / 2.5)).atan2((p.x - center.x) / (W / 2.5))
        };
        let step = 2.0 * PI / n as f32;
        for w in positions.windows(2) {
            let mut delta = angle_of(w[1]) - angle_of(w[0]);
            while delta < 0.0 {
                delta += 2.0 * PI;
            }
            assert!((delta - step).abs() < 1e-3, "uneven spacing: {delta}");
        }
    }

    #[test]
    fn empty_sequence_is_a_noop() {
        let mut store: AttributeStore<usize> = AttributeStore::with_seed(Vec2::new(W, H), 0);
        assign_radial_layout(std::iter::empty::<usize>(), W, H, &mut store);
        // Nothing was placed; the first read falls back to the random default
        let p1 = store.position(&Element::node(0));
        let p2 = store.position(&Element::node(0));
        assert_eq!(p1, p2);
    }
}
