//! Hit-testing: resolving "what is under the pointer".
//!
//! Given a snapshot and a scene-space point, [`find_topmost_at`] returns
//! the topmost matching element and which part of it (its [`Handle`]) the
//! pointer is over. Elements are searched from the highest id downward
//! because later elements are drawn on top; the first match is therefore
//! the user-visible topmost element.
//!
//! All thresholds are fixed constants in scene units. The pointer position
//! is converted viewport→scene before reaching this module, so the tests
//! are independent of the zoom level.

use super::element::Element;
use super::snapshot::Snapshot;
use crate::util::{is_near_point, is_near_segment};

/// Grab distance for handle points (line endpoints, rectangle corners).
const HANDLE_THRESHOLD: f64 = 5.0;
/// Grab distance for the body of straight-edged shapes.
const BODY_THRESHOLD: f64 = 5.0;
/// Grab distance for freehand strokes; wider because the rendered stroke
/// is visually thick.
const FREEHAND_THRESHOLD: f64 = 8.0;

/// The specific part of an element the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// First endpoint of a line
    Start,
    /// Second endpoint of a line
    End,
    /// Rectangle corners (of the normalized orientation)
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// On the body/edge of a line, rectangle outline, or freehand stroke
    OnLine,
    /// Inside a text line box or a rectangle's interior
    Inside,
}

impl Handle {
    /// True for handles that start a resize gesture rather than a move.
    pub fn is_resize(&self) -> bool {
        matches!(
            self,
            Handle::Start
                | Handle::End
                | Handle::TopLeft
                | Handle::TopRight
                | Handle::BottomLeft
                | Handle::BottomRight
        )
    }
}

/// A successful hit-test result.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The topmost element under the pointer
    pub element: &'a Element,
    /// Which part of it was hit
    pub handle: Handle,
}

/// Finds the topmost element at `(x, y)`, if any.
///
/// Iterates from the last-drawn element to the first and returns the first
/// match. Within one element, handle points win over the body (so grabbing
/// a corner near an edge resolves to the corner). Removed tombstones and
/// text elements currently owned by the edit overlay never match.
pub fn find_topmost_at(snapshot: &Snapshot, x: f64, y: f64) -> Option<Hit<'_>> {
    for element in snapshot.iter().rev() {
        if let Some(handle) = test_element(element, x, y) {
            return Some(Hit { element, handle });
        }
    }
    None
}

fn test_element(element: &Element, x: f64, y: f64) -> Option<Handle> {
    match element {
        Element::Line { x1, y1, x2, y2, .. } => test_line(x, y, *x1, *y1, *x2, *y2),
        Element::Rectangle { x1, y1, x2, y2, .. } => test_rectangle(x, y, *x1, *y1, *x2, *y2),
        Element::Freehand { points, .. } => test_freehand(x, y, points),
        Element::Text { is_editing, lines, .. } => {
            if *is_editing {
                // The overlay owns the element mid-edit; it is not drawn on
                // the surface and must not be selectable.
                return None;
            }
            lines
                .iter()
                .any(|line| {
                    line.x <= x
                        && x <= line.x + line.width
                        && line.y <= y
                        && y <= line.y + line.height
                })
                .then_some(Handle::Inside)
        }
        Element::Removed { .. } => None,
    }
}

fn test_line(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> Option<Handle> {
    if is_near_point(px, py, x1, y1, HANDLE_THRESHOLD) {
        Some(Handle::Start)
    } else if is_near_point(px, py, x2, y2, HANDLE_THRESHOLD) {
        Some(Handle::End)
    } else if is_near_segment(px, py, x1, y1, x2, y2, BODY_THRESHOLD) {
        Some(Handle::OnLine)
    } else {
        None
    }
}

fn test_rectangle(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> Option<Handle> {
    // Corner handles take priority over the edges they sit on.
    if is_near_point(px, py, x1, y1, HANDLE_THRESHOLD) {
        return Some(Handle::TopLeft);
    }
    if is_near_point(px, py, x2, y1, HANDLE_THRESHOLD) {
        return Some(Handle::TopRight);
    }
    if is_near_point(px, py, x2, y2, HANDLE_THRESHOLD) {
        return Some(Handle::BottomRight);
    }
    if is_near_point(px, py, x1, y2, HANDLE_THRESHOLD) {
        return Some(Handle::BottomLeft);
    }

    let on_edge = is_near_segment(px, py, x1, y1, x2, y1, BODY_THRESHOLD)
        || is_near_segment(px, py, x2, y1, x2, y2, BODY_THRESHOLD)
        || is_near_segment(px, py, x2, y2, x1, y2, BODY_THRESHOLD)
        || is_near_segment(px, py, x1, y2, x1, y1, BODY_THRESHOLD);
    if on_edge {
        return Some(Handle::OnLine);
    }

    // Interior grab; min/max so a mid-drag (unnormalized) rectangle still
    // answers correctly.
    let inside = x1.min(x2) <= px && px <= x1.max(x2) && y1.min(y2) <= py && py <= y1.max(y2);
    inside.then_some(Handle::Inside)
}

fn test_freehand(px: f64, py: f64, points: &[(f64, f64)]) -> Option<Handle> {
    points
        .windows(2)
        .any(|pair| {
            is_near_segment(
                px,
                py,
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1,
                FREEHAND_THRESHOLD,
            )
        })
        .then_some(Handle::OnLine)
}
