//! Selection tool: select, move, resize, and delete existing elements.
//!
//! The tool runs a four-state machine. `Idle` tracks nothing; a down on an
//! element resolves through hit-testing into either a move (body/interior
//! grab) or a resize (handle grab) of that element, and a down on empty
//! canvas clears any selection. Every drag gesture appends the unchanged
//! snapshot once on
//! pointer-down and then mutates it with `replace_current`, so the whole
//! gesture lands as a single undo step.

use super::ToolCtx;
use crate::error::SketchError;
use crate::input::CursorHint;
use crate::scene::{Element, Handle, History, Snapshot, adjust_rectangle_corners, find_topmost_at};
use log::debug;

/// Per-variant data captured at the start of a move gesture.
///
/// Offsets are pointer-minus-anchor at down time, so the grabbed point
/// stays under the pointer for the whole drag.
#[derive(Debug, Clone, PartialEq)]
enum MoveData {
    Line {
        element_id: usize,
        /// Endpoint deltas relative to `(x1, y1)` at down time
        dx2: f64,
        dy2: f64,
        offset_x: f64,
        offset_y: f64,
    },
    Rectangle {
        element_id: usize,
        width: f64,
        height: f64,
        offset_x: f64,
        offset_y: f64,
    },
    Freehand {
        element_id: usize,
        /// One pointer-minus-point offset per path point
        offsets: Vec<(f64, f64)>,
        size: f64,
    },
    Text {
        element_id: usize,
        offset_x: f64,
        offset_y: f64,
        /// Original content, re-measured at each new origin
        content: String,
    },
}

impl MoveData {
    fn element_id(&self) -> usize {
        match self {
            MoveData::Line { element_id, .. }
            | MoveData::Rectangle { element_id, .. }
            | MoveData::Freehand { element_id, .. }
            | MoveData::Text { element_id, .. } => *element_id,
        }
    }
}

/// Which line endpoint a resize drag controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnd {
    Start,
    End,
}

/// Per-variant data captured at the start of a resize gesture. The fixed
/// coordinates are frozen at down time; the dragged handle tracks the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ResizeData {
    Line {
        element_id: usize,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        end: LineEnd,
    },
    Rectangle {
        element_id: usize,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        corner: Handle,
    },
}

impl ResizeData {
    fn element_id(&self) -> usize {
        match self {
            ResizeData::Line { element_id, .. } | ResizeData::Rectangle { element_id, .. } => {
                *element_id
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SelectState {
    Idle,
    /// An element is selected; the pointer is up
    Selecting { element_id: usize },
    Moving(MoveData),
    Resizing(ResizeData),
}

/// Selects and manipulates existing elements.
#[derive(Debug)]
pub struct SelectionTool {
    state: SelectState,
    cursor: CursorHint,
}

impl SelectionTool {
    pub fn new() -> Self {
        Self {
            state: SelectState::Idle,
            cursor: CursorHint::Default,
        }
    }

    /// Drops selection and any in-flight gesture without touching history.
    pub fn reset(&mut self) {
        self.state = SelectState::Idle;
        self.cursor = CursorHint::Default;
    }

    /// Id of the tracked element, in any state that tracks one.
    pub fn selected_id(&self) -> Option<usize> {
        match &self.state {
            SelectState::Idle => None,
            SelectState::Selecting { element_id } => Some(*element_id),
            SelectState::Moving(data) => Some(data.element_id()),
            SelectState::Resizing(data) => Some(data.element_id()),
        }
    }

    /// True when a delete would act (an element is selected, pointer up).
    pub fn can_delete(&self) -> bool {
        matches!(self.state, SelectState::Selecting { .. })
    }

    /// Cursor the host surface should show for the last pointer position.
    pub fn cursor_hint(&self) -> CursorHint {
        self.cursor
    }

    /// Handles a pointer-down in scene coordinates.
    ///
    /// # Errors
    /// [`SketchError::UnsupportedHandle`] if hit-testing reports a resize
    /// handle for an element variant that has none, and
    /// [`SketchError::UnexpectedVariant`] if the hit element's payload does
    /// not match its variant; both are internal inconsistencies, not user
    /// mistakes.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, ctx: &mut ToolCtx) -> Result<(), SketchError> {
        let snapshot = ctx.history.current().clone();
        let hit = find_topmost_at(&snapshot, x, y);

        match (&self.state, hit) {
            // Select-and-grab in one gesture, whether or not something was
            // already selected.
            (SelectState::Idle | SelectState::Selecting { .. }, Some(hit)) => {
                if hit.handle.is_resize() {
                    let data = build_resize_data(hit.element, hit.handle)?;
                    debug!(
                        "selection: element {} grabbed for resize via {:?}",
                        hit.element.id(),
                        hit.handle
                    );
                    self.cursor = resize_cursor(hit.handle);
                    self.begin_drag(ctx.history, snapshot);
                    self.state = SelectState::Resizing(data);
                } else {
                    let data = build_move_data(hit.element, x, y)?;
                    debug!("selection: element {} grabbed for move", hit.element.id());
                    self.begin_drag(ctx.history, snapshot);
                    self.cursor = CursorHint::Move;
                    self.state = SelectState::Moving(data);
                }
            }
            (SelectState::Selecting { .. }, None) => {
                debug!("selection: cleared");
                self.state = SelectState::Idle;
                self.cursor = CursorHint::Default;
            }
            _ => {}
        }
        Ok(())
    }

    /// Handles a pointer-move in scene coordinates.
    ///
    /// Outside a drag this only refreshes the cursor hint. During a drag it
    /// rebuilds the tracked element and overwrites the gesture's snapshot
    /// in place.
    ///
    /// # Errors
    /// [`SketchError::IdOutOfRange`] if the tracked id no longer fits the
    /// current snapshot; callers recover by resetting the tool.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, ctx: &mut ToolCtx) -> Result<(), SketchError> {
        match &self.state {
            SelectState::Idle | SelectState::Selecting { .. } => {
                self.cursor = match find_topmost_at(ctx.history.current(), x, y) {
                    None => CursorHint::Default,
                    Some(hit) if hit.handle.is_resize() => resize_cursor(hit.handle),
                    Some(_) => CursorHint::Move,
                };
                Ok(())
            }
            SelectState::Moving(data) => {
                let element = moved_element(data, x, y, ctx);
                let snapshot = ctx.history.current().replace(element)?;
                ctx.history.replace_current(snapshot);
                Ok(())
            }
            SelectState::Resizing(data) => {
                let element = resized_element(data, x, y, ctx);
                let snapshot = ctx.history.current().replace(element)?;
                ctx.history.replace_current(snapshot);
                Ok(())
            }
        }
    }

    /// Handles pointer-up: ends any drag and settles back into `Selecting`.
    ///
    /// A rectangle resize normalizes its corners here, once, so the stored
    /// orientation is canonical again no matter how the drag crossed over.
    ///
    /// # Errors
    /// Propagates snapshot lookup failures; callers recover by resetting.
    pub fn on_pointer_up(&mut self, ctx: &mut ToolCtx) -> Result<(), SketchError> {
        match &self.state {
            SelectState::Moving(data) => {
                self.state = SelectState::Selecting {
                    element_id: data.element_id(),
                };
            }
            SelectState::Resizing(data) => {
                let element_id = data.element_id();
                if let ResizeData::Rectangle { .. } = data {
                    let element = ctx
                        .history
                        .current()
                        .get(element_id)
                        .ok_or(SketchError::MissingElement { id: element_id })?;
                    let (min_x, min_y, max_x, max_y) = adjust_rectangle_corners(element)?;
                    let normalized = Element::rectangle(
                        element_id,
                        min_x,
                        min_y,
                        max_x - min_x,
                        max_y - min_y,
                        ctx.config.sketch_style(),
                    );
                    let snapshot = ctx.history.current().replace(normalized)?;
                    ctx.history.replace_current(snapshot);
                }
                self.state = SelectState::Selecting { element_id };
            }
            SelectState::Idle | SelectState::Selecting { .. } => {}
        }
        Ok(())
    }

    /// Replaces the selected element with a tombstone, as one history step.
    ///
    /// No-op unless an element is selected with the pointer up.
    ///
    /// # Errors
    /// Propagates snapshot index failures; callers recover by resetting.
    pub fn delete_selected(&mut self, ctx: &mut ToolCtx) -> Result<(), SketchError> {
        let SelectState::Selecting { element_id } = self.state else {
            return Ok(());
        };
        let snapshot = ctx
            .history
            .current()
            .replace(Element::removed(element_id))?;
        ctx.history.append(snapshot);
        debug!("selection: element {element_id} deleted");
        self.state = SelectState::Idle;
        self.cursor = CursorHint::Default;
        Ok(())
    }

    /// Drops the selection if the tracked element no longer exists in
    /// `snapshot` or is a tombstone there. Called after undo/redo, which can
    /// rewind to before the element was created or past its deletion.
    pub fn sync_with_snapshot(&mut self, snapshot: &Snapshot) {
        let Some(element_id) = self.selected_id() else {
            return;
        };
        let stale = match snapshot.get(element_id) {
            None => true,
            Some(element) => element.is_removed(),
        };
        if stale {
            debug!("selection: tracked element {element_id} is gone, resetting");
            self.reset();
        }
    }

    // One drag gesture = one undo step: append the unchanged snapshot now,
    // then let every drag step overwrite it.
    fn begin_drag(&self, history: &mut History, snapshot: Snapshot) {
        history.append(snapshot);
    }
}

impl Default for SelectionTool {
    fn default() -> Self {
        Self::new()
    }
}

fn build_move_data(element: &Element, px: f64, py: f64) -> Result<MoveData, SketchError> {
    match element {
        Element::Line { id, x1, y1, x2, y2, .. } => Ok(MoveData::Line {
            element_id: *id,
            dx2: x2 - x1,
            dy2: y2 - y1,
            offset_x: px - x1,
            offset_y: py - y1,
        }),
        Element::Rectangle { id, x1, y1, x2, y2, .. } => Ok(MoveData::Rectangle {
            element_id: *id,
            width: x2 - x1,
            height: y2 - y1,
            offset_x: px - x1,
            offset_y: py - y1,
        }),
        Element::Freehand { id, points, primitive } => {
            // Constructors guarantee a stroke-path primitive; anything else
            // is a caller defect, same as a variant mismatch.
            let crate::scene::Primitive::StrokePath { size, .. } = primitive else {
                return Err(SketchError::UnexpectedVariant {
                    id: *id,
                    expected: "stroke path",
                    actual: primitive.variant_name(),
                });
            };
            Ok(MoveData::Freehand {
                element_id: *id,
                offsets: points.iter().map(|(x, y)| (px - x, py - y)).collect(),
                size: *size,
            })
        }
        Element::Text { id, lines, .. } => {
            // The measurer emits at least one line box even for empty text.
            let first = lines.first().ok_or(SketchError::UnexpectedVariant {
                id: *id,
                expected: "measured text",
                actual: "text without lines",
            })?;
            Ok(MoveData::Text {
                element_id: *id,
                offset_x: px - first.x,
                offset_y: py - first.y,
                content: lines
                    .iter()
                    .map(|line| line.content.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            })
        }
        // Tombstones never match a hit test.
        Element::Removed { id } => Err(SketchError::UnexpectedVariant {
            id: *id,
            expected: "drawable",
            actual: "removed",
        }),
    }
}

fn build_resize_data(element: &Element, handle: Handle) -> Result<ResizeData, SketchError> {
    match (element, handle) {
        (Element::Line { id, x1, y1, x2, y2, .. }, Handle::Start) => Ok(ResizeData::Line {
            element_id: *id,
            x1: *x1,
            y1: *y1,
            x2: *x2,
            y2: *y2,
            end: LineEnd::Start,
        }),
        (Element::Line { id, x1, y1, x2, y2, .. }, Handle::End) => Ok(ResizeData::Line {
            element_id: *id,
            x1: *x1,
            y1: *y1,
            x2: *x2,
            y2: *y2,
            end: LineEnd::End,
        }),
        (
            Element::Rectangle { id, x1, y1, x2, y2, .. },
            Handle::TopLeft | Handle::TopRight | Handle::BottomLeft | Handle::BottomRight,
        ) => Ok(ResizeData::Rectangle {
            element_id: *id,
            x1: *x1,
            y1: *y1,
            x2: *x2,
            y2: *y2,
            corner: handle,
        }),
        (other, handle) => Err(SketchError::UnsupportedHandle {
            handle,
            variant: other.variant_name(),
        }),
    }
}

fn moved_element(data: &MoveData, px: f64, py: f64, ctx: &ToolCtx) -> Element {
    match data {
        MoveData::Line {
            element_id,
            dx2,
            dy2,
            offset_x,
            offset_y,
        } => {
            let x1 = px - offset_x;
            let y1 = py - offset_y;
            Element::line(
                *element_id,
                x1,
                y1,
                x1 + dx2,
                y1 + dy2,
                ctx.config.sketch_style(),
            )
        }
        MoveData::Rectangle {
            element_id,
            width,
            height,
            offset_x,
            offset_y,
        } => Element::rectangle(
            *element_id,
            px - offset_x,
            py - offset_y,
            *width,
            *height,
            ctx.config.sketch_style(),
        ),
        MoveData::Freehand {
            element_id,
            offsets,
            size,
        } => Element::freehand(
            *element_id,
            offsets.iter().map(|(dx, dy)| (px - dx, py - dy)).collect(),
            *size,
        ),
        MoveData::Text {
            element_id,
            offset_x,
            offset_y,
            content,
        } => Element::text(
            *element_id,
            px - offset_x,
            py - offset_y,
            content,
            false,
            &ctx.config.font_spec(),
            ctx.measurer,
        ),
    }
}

fn resized_element(data: &ResizeData, px: f64, py: f64, ctx: &ToolCtx) -> Element {
    let style = ctx.config.sketch_style();
    match *data {
        ResizeData::Line {
            element_id,
            x1,
            y1,
            x2,
            y2,
            end,
        } => match end {
            LineEnd::Start => Element::line(element_id, px, py, x2, y2, style),
            LineEnd::End => Element::line(element_id, x1, y1, px, py, style),
        },
        ResizeData::Rectangle {
            element_id,
            x1,
            y1,
            x2,
            y2,
            corner,
        } => match corner {
            Handle::TopLeft => Element::rectangle(element_id, px, py, x2 - px, y2 - py, style),
            Handle::TopRight => Element::rectangle(element_id, x1, py, px - x1, y2 - py, style),
            Handle::BottomRight => Element::rectangle(element_id, x1, y1, px - x1, py - y1, style),
            // BottomLeft; build_resize_data admits only the four corners.
            _ => Element::rectangle(element_id, px, y1, x2 - px, py - y1, style),
        },
    }
}

fn resize_cursor(handle: Handle) -> CursorHint {
    match handle {
        Handle::TopRight | Handle::BottomLeft => CursorHint::ResizeNesw,
        _ => CursorHint::ResizeNwse,
    }
}
