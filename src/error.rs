//! Error types for the drawing core.
//!
//! Only programming-defect conditions are represented here. No-op outcomes
//! such as clicking empty canvas, undoing past
//! the oldest snapshot, or committing empty text are ordinary control flow
//! and never produce an error. Stale selections caused by undo/redo are
//! recovered silently by the selection state machine.

use crate::scene::Handle;
use thiserror::Error;

/// Contract violations raised by the scene and interaction layers.
///
/// Any of these indicates a defect in the calling code, not a user mistake.
/// The board responds by aborting the offending gesture (resetting the
/// active tool to idle) and surfacing the error to the embedding
/// application; the rest of the surface keeps working.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("element id {id} is out of range for a snapshot of {len} elements")]
    IdOutOfRange { id: usize, len: usize },

    #[error("element id {id} is missing from the current snapshot mid-gesture")]
    MissingElement { id: usize },

    #[error("element id {id} is a {actual} element, expected {expected}")]
    UnexpectedVariant {
        id: usize,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("handle {handle:?} cannot start a resize of a {variant} element")]
    UnsupportedHandle { handle: Handle, variant: &'static str },
}
