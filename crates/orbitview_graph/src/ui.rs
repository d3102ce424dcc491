// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph rendering and the interactive display widget.
//!
//! Every frame draws edges first (arrow line, triangular head, rotated
//! value label at the midpoint), then nodes (filled circle, black outline,
//! label below, note above-right). The frame is a pure function of the
//! adapter, the attribute store, and the canvas size.

use crate::adapter::GraphAdapter;
use crate::attributes::{AttributeStore, Element};
use crate::interact::DragController;
use crate::layout::assign_radial_layout;
use egui::epaint::TextShape;
use egui::{Align2, Color32, FontId, Painter, Pos2, Sense, Shape, Stroke, Vec2};
use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::hash::Hash;
use std::time::Duration;

/// Fixed canvas size; the layout is bounded by it and it never tracks
/// window resizes.
pub const CANVAS_SIZE: Vec2 = Vec2::new(1000.0, 800.0);

/// Radius of node circles, also the drag pick radius.
pub const NODE_RADIUS: f32 = 16.0;

/// Distance from a node center at which arrowheads stop.
pub const ARROW_RADIUS: f32 = NODE_RADIUS + 4.0;

/// Period of the redraw tick.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(25);

/// Delay before the first redraw tick.
pub const FIRST_FRAME_DELAY: Duration = Duration::from_millis(500);

const LABEL_OFFSET: Vec2 = Vec2::new(0.0, 24.0);
const NOTE_OFFSET: Vec2 = Vec2::new(NODE_RADIUS, -NODE_RADIUS);
const TEXT_FONT_SIZE: f32 = 12.0;

/// Fixed-period redraw scheduling: one long delay before the first frame,
/// then the regular frame interval. The widget hands the delay to
/// `Context::request_repaint_after`; dropping the widget stops the tick.
#[derive(Debug)]
pub struct Ticker {
    initial_delay: Duration,
    period: Duration,
    primed: bool,
}

impl Ticker {
    /// Ticker with explicit delays.
    pub fn new(initial_delay: Duration, period: Duration) -> Self {
        Self {
            initial_delay,
            period,
            primed: false,
        }
    }

    /// Delay until the next frame should render.
    pub fn next_delay(&mut self) -> Duration {
        if self.primed {
            self.period
        } else {
            self.primed = true;
            self.initial_delay
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(FIRST_FRAME_DELAY, FRAME_INTERVAL)
    }
}

/// Interactive display of one graph: owns the adapter, the attribute store,
/// the drag controller, and the redraw ticker for the session.
#[derive(Debug)]
pub struct GraphDisplay<N, V = &'static str, E = &'static str> {
    adapter: GraphAdapter<N, V, E>,
    store: AttributeStore<N, E>,
    drag: DragController<N>,
    ticker: Ticker,
}

impl<N, V, E> GraphDisplay<N, V, E>
where
    N: Clone + Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    E: Clone + Eq + Hash + fmt::Display,
{
    /// Build a display for `adapter`, seeding the store with the radial
    /// layout.
    pub fn new(adapter: GraphAdapter<N, V, E>) -> Self {
        let mut store = AttributeStore::new(CANVAS_SIZE);
        let nodes: Vec<N> = adapter.nodes().into_iter().cloned().collect();
        assign_radial_layout(nodes, CANVAS_SIZE.x, CANVAS_SIZE.y, &mut store);
        tracing::debug!(
            nodes = adapter.node_count(),
            edges = adapter.edges().len(),
            directed = adapter.is_directed(),
            "graph display ready"
        );
        Self {
            adapter,
            store,
            drag: DragController::new(NODE_RADIUS),
            ticker: Ticker::default(),
        }
    }

    /// The adapter being displayed.
    pub fn adapter(&self) -> &GraphAdapter<N, V, E> {
        &self.adapter
    }

    /// The attribute store.
    pub fn store(&self) -> &AttributeStore<N, E> {
        &self.store
    }

    /// Mutable access to the attribute store, for styling by consumers.
    pub fn store_mut(&mut self) -> &mut AttributeStore<N, E> {
        &mut self.store
    }

    /// Adapter and mutable store together, for consumers that style based
    /// on graph queries (degree coloring, path highlighting).
    pub fn parts_mut(&mut self) -> (&GraphAdapter<N, V, E>, &mut AttributeStore<N, E>) {
        (&self.adapter, &mut self.store)
    }

    /// Render one frame and process pointer input.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(CANVAS_SIZE, Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        let origin = rect.min.to_vec2();

        if response.drag_started() {
            if let Some(press) = ui.input(|i| i.pointer.press_origin()) {
                self.drag.on_press(press - origin);
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let Self {
                    adapter,
                    store,
                    drag,
                    ..
                } = self;
                drag.on_drag(pos - origin, adapter, store);
            }
        }
        if response.drag_stopped() {
            self.drag.on_release();
        }

        let Self { adapter, store, .. } = self;
        paint_edges(adapter, store, &painter, origin);
        paint_nodes(adapter, store, &painter, origin);

        ui.ctx().request_repaint_after(self.ticker.next_delay());
    }
}

fn paint_edges<N, V, E>(
    adapter: &GraphAdapter<N, V, E>,
    store: &mut AttributeStore<N, E>,
    painter: &Painter,
    origin: Vec2,
) where
    N: Clone + Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    E: Clone + Eq + Hash + fmt::Display,
{
    for n in adapter.nodes() {
        let from = store.position(&Element::node(n.clone())) + origin;
        for m in adapter.adjacent_nodes(n) {
            let to = store.position(&Element::node(m.clone())) + origin;
            let (color, label) = match adapter.edge_between(n, m) {
                Some(id) => {
                    let key = Element::edge(id);
                    (store.color(&key), store.label(&key))
                }
                None => (crate::attributes::DEFAULT_EDGE_COLOR, String::new()),
            };
            paint_arrow(painter, from, to, color);
            paint_edge_label(painter, &label, from, to, color);
        }
    }
}

fn paint_nodes<N, V, E>(
    adapter: &GraphAdapter<N, V, E>,
    store: &mut AttributeStore<N, E>,
    painter: &Painter,
    origin: Vec2,
) where
    N: Clone + Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    E: Clone + Eq + Hash + fmt::Display,
{
    let font = FontId::proportional(TEXT_FONT_SIZE);
    for n in adapter.nodes() {
        let key = Element::node(n.clone());
        let pos = store.position(&key) + origin;
        painter.circle_filled(pos, NODE_RADIUS, store.color(&key));
        painter.circle_stroke(pos, NODE_RADIUS, Stroke::new(1.0, Color32::BLACK));
        painter.text(
            pos + LABEL_OFFSET,
            Align2::CENTER_CENTER,
            store.label(&key),
            font.clone(),
            Color32::BLACK,
        );
        let note = store.note(&key);
        if !note.is_empty() {
            painter.text(
                pos + NOTE_OFFSET,
                Align2::CENTER_CENTER,
                note,
                font.clone(),
                Color32::BLACK,
            );
        }
    }
}

/// Draw the full connecting line plus a triangular head whose tip is pulled
/// back [`ARROW_RADIUS`] from the destination so it rests on the node rim.
fn paint_arrow(painter: &Painter, from: Pos2, to: Pos2, color: Color32) {
    painter.line_segment([from, to], Stroke::new(1.0, color));
    let head = arrow_head(from, to);
    painter.add(Shape::convex_polygon(head.to_vec(), color, Stroke::NONE));
}

/// Draw `text` centered on the segment midpoint, rotated to the segment's
/// slope angle.
fn paint_edge_label(painter: &Painter, text: &str, from: Pos2, to: Pos2, color: Color32) {
    if text.is_empty() {
        return;
    }
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        FontId::proportional(TEXT_FONT_SIZE),
        color,
    );
    let angle = edge_label_angle(from, to);
    let mid = Pos2::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
    // Center the text on its own width, just above the line
    let offset = Vec2::new(-galley.size().x / 2.0, -galley.size().y + 2.0);
    let (sin, cos) = angle.sin_cos();
    let pos = mid
        + Vec2::new(
            cos * offset.x - sin * offset.y,
            sin * offset.x + cos * offset.y,
        );
    painter.add(TextShape::new(pos, galley, color).with_angle(angle));
}

/// The three corners of the arrowhead for a line from `from` to `to`.
///
/// A fixed triangle (apex forward, 4 units long, 8 wide) rotated to the
/// line's `atan2` angle and translated so its apex points at the
/// destination, tip [`ARROW_RADIUS`] short of it.
fn arrow_head(from: Pos2, to: Pos2) -> [Pos2; 3] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let tip = Pos2::new(
        to.x - ARROW_RADIUS * angle.cos(),
        to.y - ARROW_RADIUS * angle.sin(),
    );
    // Triangle apex is +y in local space, so rotate a quarter turn back
    let rot = angle - FRAC_PI_2;
    let (sin, cos) = rot.sin_cos();
    [(0.0, 4.0), (-4.0, -4.0), (4.0, -4.0)]
        .map(|(x, y)| Pos2::new(tip.x + cos * x - sin * y, tip.y + sin * x + cos * y))
}

/// Rotation angle for an edge label: the segment's slope angle, with a
/// perfectly vertical segment nudged by PI to avoid the degenerate
/// `-PI/2` rotation.
fn edge_label_angle(from: Pos2, to: Pos2) -> f32 {
    let mut angle = ((to.y - from.y) / (to.x - from.x)).atan();
    if angle.is_nan() {
        return 0.0;
    }
    if angle == -FRAC_PI_2 {
        angle += PI;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn arrow_head_rests_on_the_node_rim() {
        // Horizontal line: head tip at ARROW_RADIUS short of the target
        let head = arrow_head(Pos2::new(0.0, 0.0), Pos2::new(100.0, 0.0));
        assert!(close(head[0], Pos2::new(100.0 - ARROW_RADIUS + 4.0, 0.0)));
        assert!(close(head[1], Pos2::new(100.0 - ARROW_RADIUS - 4.0, 4.0)));
        assert!(close(head[2], Pos2::new(100.0 - ARROW_RADIUS - 4.0, -4.0)));
    }

    #[test]
    fn arrow_head_tracks_the_line_angle() {
        let from = Pos2::new(0.0, 0.0);
        let to = Pos2::new(0.0, 200.0);
        let head = arrow_head(from, to);
        // Apex points straight down at the destination
        assert!(close(head[0], Pos2::new(0.0, 200.0 - ARROW_RADIUS + 4.0)));
        // Base corners are symmetric about the line
        assert!((head[1].x + head[2].x).abs() < 1e-3);
    }

    #[test]
    fn label_angle_follows_slope() {
        let angle = edge_label_angle(Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0));
        assert!((angle - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn vertical_segment_angle_is_not_degenerate() {
        let up = edge_label_angle(Pos2::new(5.0, 100.0), Pos2::new(5.0, 0.0));
        let down = edge_label_angle(Pos2::new(5.0, 0.0), Pos2::new(5.0, 100.0));
        assert!((up - FRAC_PI_2).abs() < 1e-5);
        assert!((down - FRAC_PI_2).abs() < 1e-5);
        // Degenerate zero-length segment falls back to horizontal
        assert_eq!(edge_label_angle(Pos2::new(1.0, 1.0), Pos2::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn ticker_delays_long_then_steady() {
        let mut ticker = Ticker::default();
        assert_eq!(ticker.next_delay(), FIRST_FRAME_DELAY);
        assert_eq!(ticker.next_delay(), FRAME_INTERVAL);
        assert_eq!(ticker.next_delay(), FRAME_INTERVAL);
    }
}
