//! Scene model: elements, snapshots, history, and hit-testing.
//!
//! This module defines the immutable-snapshot scene the whole surface runs
//! on:
//! - [`Element`]: tagged-variant shape data with cached render primitives
//! - [`Snapshot`]: one complete, immutable scene state
//! - [`History`]: linear undo/redo over snapshots
//! - [`find_topmost_at`]: hit-testing with handle resolution

pub mod element;
pub mod history;
pub mod hit;
pub mod primitive;
pub mod snapshot;

// Re-export commonly used types at module level
pub use element::{Element, RectCorners, TextLine, adjust_rectangle_corners};
pub use history::History;
pub use hit::{Handle, Hit, find_topmost_at};
pub use primitive::{FontSpec, Primitive, SketchStyle};
pub use snapshot::Snapshot;
