//! Core engine for an interactive sketch-style drawing surface.
//!
//! The crate models the surface as a linear history of immutable
//! [`Snapshot`]s. Every user-visible edit produces a new snapshot; undo and
//! redo just move a cursor over the list. Elements are identified by their
//! index within a snapshot, deletes leave tombstones so ids stay stable,
//! and each drag gesture lands as exactly one undo step.
//!
//! The embedding application feeds viewport-space pointer events into a
//! [`Board`], picks tools, and drives the text-edit overlay; the board
//! hands back primitives to draw. Actual rasterization, font shaping, and
//! stroke outlining live behind the traits in [`render`], so the engine
//! stays backend-free.
//!
//! ```no_run
//! use sketchboard::{Board, Config, PointerEvent, ToolKind};
//!
//! let mut board = Board::new(Config::default());
//! board.set_tool(ToolKind::Rectangle);
//! board.on_pointer_down(PointerEvent::primary(10.0, 10.0))?;
//! board.on_pointer_move(PointerEvent::primary(60.0, 40.0))?;
//! board.on_pointer_up(PointerEvent::primary(60.0, 40.0))?;
//! board.undo();
//! # Ok::<(), sketchboard::SketchError>(())
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod scene;
pub mod transform;
pub mod util;

pub use board::Board;
pub use config::Config;
pub use error::SketchError;
pub use input::{CursorHint, PointerEvent, ToolKind};
pub use render::{RenderBackend, StrokeOutliner, TextMeasurer};
pub use scene::{Element, Handle, History, Primitive, Snapshot};
pub use transform::Transform;
