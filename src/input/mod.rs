//! Pointer input handling: events, cursor hints, and the per-tool
//! interaction state machines.

pub mod events;
pub mod tools;

pub use events::PointerEvent;
pub use tools::{FreehandTool, LineTool, RectTool, SelectionTool, TextTool, ToolCtx, ToolKind};

/// Cursor shape the surface should show, derived from hover hit-testing.
///
/// Purely transient UI state; recomputed on every pointer-move of the
/// selection tool with no history effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Nothing interactive under the pointer
    #[default]
    Default,
    /// Over an element body/interior; dragging would move it
    Move,
    /// Over a top-right/bottom-left style handle (NE-SW diagonal)
    ResizeNesw,
    /// Over a top-left/bottom-right style handle (NW-SE diagonal)
    ResizeNwse,
}
