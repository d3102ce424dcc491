// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph display engine for OrbitView.
//!
//! This crate renders an arbitrary graph on an interactive 2-D canvas:
//! - A uniform adapter over three backing representations (plain graph,
//!   edge-valued graph, multi-edge network)
//! - Canonical edge identities whose equality respects directedness
//! - Per-element visual attributes (position, color, label, note) with lazy
//!   defaults
//! - Radial initial layout
//! - egui-based rendering with arrowheads and rotated edge labels
//! - Pointer-driven node dragging and a fixed-period redraw tick
//!
//! ## Architecture
//!
//! [`GraphAdapter`] is built once from a backing graph and read for the
//! whole session. [`assign_radial_layout`] seeds the [`AttributeStore`],
//! drag interaction mutates it, and [`GraphDisplay`] repaints from it every
//! tick. Everything runs on the UI thread; nothing here locks or blocks.

pub mod adapter;
pub mod attributes;
pub mod backing;
pub mod edge;
pub mod interact;
pub mod layout;
pub mod ui;

pub use adapter::GraphAdapter;
pub use attributes::{AttributeStore, Element};
pub use backing::{Network, SimpleGraph, ValueGraph};
pub use edge::EdgeId;
pub use interact::{DragController, DragPhase};
pub use layout::assign_radial_layout;
pub use ui::GraphDisplay;
