//! Per-tool interaction state machines.
//!
//! Each tool owns a small state machine for the lifetime of one gesture and
//! turns scene-space pointer events into history mutations. All tools
//! follow the same history discipline: one `append` when a gesture starts,
//! `replace_current` for every pointer-move, so each gesture contributes
//! exactly one undo step.
//!
//! Contract violations (a tracked element missing or of the wrong variant)
//! surface as [`SketchError`]s; the board aborts the offending gesture by
//! resetting the tool and keeps the rest of the surface running.

pub mod freehand;
pub mod line;
pub mod rect;
pub mod selection;
pub mod text;

pub use freehand::FreehandTool;
pub use line::LineTool;
pub use rect::RectTool;
pub use selection::SelectionTool;
pub use text::TextTool;

use crate::config::Config;
use crate::render::TextMeasurer;
use crate::scene::History;

/// Which tool is currently active on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Hit-test, move, resize, delete existing elements
    Selection,
    /// Draw straight lines
    Line,
    /// Draw rectangles
    Rectangle,
    /// Draw freehand strokes
    Freehand,
    /// Place text blocks (edited through the external overlay)
    Text,
}

/// Shared context handed to a tool for one event.
///
/// Borrowed fresh per call so no tool can hold scene state across events;
/// the snapshot a tool reads is always the current one.
pub struct ToolCtx<'a> {
    /// Undo/redo history; `current()` is the snapshot tools operate on
    pub history: &'a mut History,
    /// Drawing defaults (sketch style, freehand size, font)
    pub config: &'a Config,
    /// Text-measurement collaborator for creating/moving text elements
    pub measurer: &'a dyn TextMeasurer,
}
