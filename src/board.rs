//! The drawing board: the facade the embedding application talks to.
//!
//! A [`Board`] owns the snapshot history, the zoom transform, the five
//! tools, and the drawing configuration. Pointer events arrive in viewport
//! coordinates and are converted to scene coordinates exactly once, here,
//! before any tool sees them; everything below this layer is zoom-agnostic.
//!
//! Tool errors are contract violations, not user mistakes. The board logs
//! them, aborts the offending gesture by resetting the tool, and propagates
//! the error so the host can decide whether to surface it. The rest of the
//! surface keeps running either way.

use crate::config::Config;
use crate::error::SketchError;
use crate::input::{
    CursorHint, FreehandTool, LineTool, PointerEvent, RectTool, SelectionTool, TextTool, ToolCtx,
    ToolKind,
};
use crate::render::{FixedMetricsMeasurer, TextMeasurer};
use crate::scene::{Element, History, Primitive, Snapshot};
use crate::transform::Transform;
use log::{debug, error};

/// Interactive drawing surface state.
pub struct Board {
    history: History,
    transform: Transform,
    config: Config,
    measurer: Box<dyn TextMeasurer>,
    tool: ToolKind,
    selection: SelectionTool,
    line: LineTool,
    rect: RectTool,
    freehand: FreehandTool,
    text: TextTool,
    needs_redraw: bool,
}

impl Board {
    /// Creates a board with the built-in fixed-metrics text measurer.
    pub fn new(config: Config) -> Self {
        let measurer = FixedMetricsMeasurer {
            advance_factor: config.text.advance_factor,
        };
        Self::with_measurer(config, Box::new(measurer))
    }

    /// Creates a board with a caller-supplied text measurer, for hosts that
    /// do real font shaping.
    pub fn with_measurer(config: Config, measurer: Box<dyn TextMeasurer>) -> Self {
        let transform = Transform::new(config.zoom.step, config.zoom.min);
        Self {
            history: History::new(),
            transform,
            config,
            measurer,
            tool: ToolKind::Selection,
            selection: SelectionTool::new(),
            line: LineTool::new(),
            rect: RectTool::new(),
            freehand: FreehandTool::new(),
            text: TextTool::new(),
            needs_redraw: true,
        }
    }

    /// Currently active tool.
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switches the active tool, abandoning any in-flight gesture or
    /// pending text edit of the old tool without touching history.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tool == tool {
            return;
        }
        match self.tool {
            ToolKind::Selection => self.selection.reset(),
            ToolKind::Line => self.line.reset(),
            ToolKind::Rectangle => self.rect.reset(),
            ToolKind::Freehand => self.freehand.reset(),
            ToolKind::Text => self.text.reset(),
        }
        debug!("tool switched to {tool:?}");
        self.tool = tool;
        self.needs_redraw = true;
    }

    /// Routes a pointer-down to the active tool.
    ///
    /// Non-primary pointer events are ignored entirely.
    ///
    /// # Errors
    /// Propagates tool contract violations after aborting the gesture.
    pub fn on_pointer_down(&mut self, event: PointerEvent) -> Result<(), SketchError> {
        if !event.primary {
            return Ok(());
        }
        let (x, y) = self.transform.to_scene(event.viewport_x, event.viewport_y);
        let mut ctx = ToolCtx {
            history: &mut self.history,
            config: &self.config,
            measurer: self.measurer.as_ref(),
        };
        let result = match self.tool {
            ToolKind::Selection => self.selection.on_pointer_down(x, y, &mut ctx),
            ToolKind::Line => {
                self.line.on_pointer_down(x, y, &mut ctx);
                Ok(())
            }
            ToolKind::Rectangle => {
                self.rect.on_pointer_down(x, y, &mut ctx);
                Ok(())
            }
            ToolKind::Freehand => {
                self.freehand.on_pointer_down(x, y, &mut ctx);
                Ok(())
            }
            ToolKind::Text => {
                self.text.on_pointer_down(x, y, &mut ctx);
                Ok(())
            }
        };
        self.needs_redraw = true;
        self.abort_gesture_on_error(result)
    }

    /// Routes a pointer-move to the active tool.
    ///
    /// # Errors
    /// Propagates tool contract violations after aborting the gesture.
    pub fn on_pointer_move(&mut self, event: PointerEvent) -> Result<(), SketchError> {
        if !event.primary {
            return Ok(());
        }
        let (x, y) = self.transform.to_scene(event.viewport_x, event.viewport_y);
        let mut ctx = ToolCtx {
            history: &mut self.history,
            config: &self.config,
            measurer: self.measurer.as_ref(),
        };
        let result = match self.tool {
            ToolKind::Selection => self.selection.on_pointer_move(x, y, &mut ctx),
            ToolKind::Line => self.line.on_pointer_move(x, y, &mut ctx),
            ToolKind::Rectangle => self.rect.on_pointer_move(x, y, &mut ctx),
            ToolKind::Freehand => self.freehand.on_pointer_move(x, y, &mut ctx),
            ToolKind::Text => Ok(()),
        };
        self.needs_redraw = true;
        self.abort_gesture_on_error(result)
    }

    /// Routes a pointer-up to the active tool, ending its gesture.
    ///
    /// # Errors
    /// Propagates tool contract violations after aborting the gesture.
    pub fn on_pointer_up(&mut self, event: PointerEvent) -> Result<(), SketchError> {
        if !event.primary {
            return Ok(());
        }
        let mut ctx = ToolCtx {
            history: &mut self.history,
            config: &self.config,
            measurer: self.measurer.as_ref(),
        };
        let result = match self.tool {
            ToolKind::Selection => self.selection.on_pointer_up(&mut ctx),
            ToolKind::Line => {
                self.line.on_pointer_up();
                Ok(())
            }
            ToolKind::Rectangle => self.rect.on_pointer_up(&mut ctx),
            ToolKind::Freehand => {
                self.freehand.on_pointer_up();
                Ok(())
            }
            ToolKind::Text => Ok(()),
        };
        self.needs_redraw = true;
        self.abort_gesture_on_error(result)
    }

    /// Steps the history cursor back one snapshot, if possible, and drops
    /// any selection that points at an element the restored snapshot lacks.
    pub fn undo(&mut self) {
        self.history.undo();
        self.selection.sync_with_snapshot(self.history.current());
        self.needs_redraw = true;
    }

    /// Steps the history cursor forward one snapshot, if possible.
    pub fn redo(&mut self) {
        self.history.redo();
        self.selection.sync_with_snapshot(self.history.current());
        self.needs_redraw = true;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Deletes the selected element as one undoable step; no-op when
    /// nothing is selected.
    ///
    /// # Errors
    /// Propagates snapshot index failures after resetting the selection.
    pub fn delete_selected(&mut self) -> Result<(), SketchError> {
        let mut ctx = ToolCtx {
            history: &mut self.history,
            config: &self.config,
            measurer: self.measurer.as_ref(),
        };
        let result = self.selection.delete_selected(&mut ctx);
        self.needs_redraw = true;
        self.abort_gesture_on_error(result)
    }

    /// True when a delete would act.
    pub fn can_delete(&self) -> bool {
        self.selection.can_delete()
    }

    /// Id of the selected element, if any.
    pub fn selected_id(&self) -> Option<usize> {
        self.selection.selected_id()
    }

    /// Cursor the host should show for the last hover position.
    pub fn cursor_hint(&self) -> CursorHint {
        self.selection.cursor_hint()
    }

    /// Tombstones every element as one undoable step; no-op when the
    /// surface is already blank.
    ///
    /// # Errors
    /// Propagates snapshot index failures (cannot occur for in-range ids).
    pub fn clear(&mut self) -> Result<(), SketchError> {
        let current = self.history.current();
        if current.iter().all(Element::is_removed) {
            return Ok(());
        }
        let ids: Vec<usize> = current
            .iter()
            .filter(|element| !element.is_removed())
            .map(Element::id)
            .collect();
        let mut snapshot = current.clone();
        for id in ids {
            snapshot = snapshot.replace(Element::removed(id))?;
        }
        self.history.append(snapshot);
        self.selection.reset();
        self.needs_redraw = true;
        Ok(())
    }

    /// Commits the text-edit overlay's final content; see
    /// [`TextTool::commit`]. Returns the new element's id on a non-empty
    /// commit.
    pub fn commit_text(&mut self, content: &str) -> Option<usize> {
        let mut ctx = ToolCtx {
            history: &mut self.history,
            config: &self.config,
            measurer: self.measurer.as_ref(),
        };
        let id = self.text.commit(content, &mut ctx);
        self.needs_redraw = true;
        id
    }

    /// Cancels a pending text edit with no history effect.
    pub fn cancel_text(&mut self) {
        self.text.cancel();
        self.needs_redraw = true;
    }

    /// Scene-space anchor of the pending text edit, if one is active. The
    /// host positions its edit overlay here (after converting to viewport
    /// coordinates).
    pub fn pending_text_origin(&self) -> Option<(f64, f64)> {
        self.text.pending_origin()
    }

    /// True while the text-edit overlay owns a pending edit.
    pub fn is_editing_text(&self) -> bool {
        self.text.is_editing()
    }

    pub fn zoom_in(&mut self) {
        self.transform.zoom_in();
        self.needs_redraw = true;
    }

    pub fn zoom_out(&mut self) {
        self.transform.zoom_out();
        self.needs_redraw = true;
    }

    pub fn zoom_reset(&mut self) {
        self.transform.reset();
        self.needs_redraw = true;
    }

    /// Current viewport↔scene transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The snapshot currently on screen.
    pub fn current_snapshot(&self) -> &Snapshot {
        self.history.current()
    }

    /// The primitives a render backend should draw for the current
    /// snapshot, in stacking order. Tombstones and text elements owned by
    /// the edit overlay are skipped.
    pub fn drawables(&self) -> Vec<&Primitive> {
        self.history
            .current()
            .iter()
            .filter(|element| !matches!(element, Element::Text { is_editing: true, .. }))
            .filter_map(Element::primitive)
            .collect()
    }

    /// True when the surface changed since the last redraw.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns and clears the redraw flag; the host calls this once per
    /// frame.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn abort_gesture_on_error(&mut self, result: Result<(), SketchError>) -> Result<(), SketchError> {
        if let Err(err) = &result {
            error!("gesture aborted on {:?} tool: {err}", self.tool);
            match self.tool {
                ToolKind::Selection => self.selection.reset(),
                ToolKind::Line => self.line.reset(),
                ToolKind::Rectangle => self.rect.reset(),
                ToolKind::Freehand => self.freehand.reset(),
                ToolKind::Text => self.text.reset(),
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_rect(board: &mut Board, x1: f64, y1: f64, x2: f64, y2: f64) {
        board.set_tool(ToolKind::Rectangle);
        board.on_pointer_down(PointerEvent::primary(x1, y1)).unwrap();
        board.on_pointer_move(PointerEvent::primary(x2, y2)).unwrap();
        board.on_pointer_up(PointerEvent::primary(x2, y2)).unwrap();
    }

    #[test]
    fn non_primary_events_are_ignored() {
        let mut board = Board::default();
        board.set_tool(ToolKind::Line);
        board
            .on_pointer_down(PointerEvent::secondary(10.0, 10.0))
            .unwrap();
        board
            .on_pointer_move(PointerEvent::secondary(50.0, 50.0))
            .unwrap();
        board
            .on_pointer_up(PointerEvent::secondary(50.0, 50.0))
            .unwrap();

        assert!(board.current_snapshot().is_empty());
        assert!(!board.can_undo());
    }

    #[test]
    fn pointer_events_are_converted_through_the_zoom() {
        let mut board = Board::default();
        // Ten zoom-in steps: 1.0 + 10 * 0.1 = 2.0 (modulo float drift).
        for _ in 0..10 {
            board.zoom_in();
        }
        assert!((board.transform().zoom() - 2.0).abs() < 1e-9);

        draw_rect(&mut board, 20.0, 20.0, 100.0, 100.0);
        match board.current_snapshot().get(0) {
            Some(Element::Rectangle { x1, y1, x2, y2, .. }) => {
                assert!((x1 - 10.0).abs() < 1e-9 && (y1 - 10.0).abs() < 1e-9);
                assert!((x2 - 50.0).abs() < 1e-9 && (y2 - 50.0).abs() < 1e-9);
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn switching_tools_abandons_the_gesture_but_keeps_the_element() {
        let mut board = Board::default();
        board.set_tool(ToolKind::Line);
        board.on_pointer_down(PointerEvent::primary(0.0, 0.0)).unwrap();
        board.on_pointer_move(PointerEvent::primary(30.0, 0.0)).unwrap();

        // Switch mid-drag; further moves must not touch the element.
        board.set_tool(ToolKind::Selection);
        board.set_tool(ToolKind::Line);
        board.on_pointer_move(PointerEvent::primary(90.0, 0.0)).unwrap();

        match board.current_snapshot().get(0) {
            Some(Element::Line { x2, .. }) => assert_eq!(*x2, 30.0),
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn clear_is_one_undoable_step() {
        let mut board = Board::default();
        draw_rect(&mut board, 0.0, 0.0, 10.0, 10.0);
        draw_rect(&mut board, 20.0, 20.0, 30.0, 30.0);

        board.clear().unwrap();
        assert!(board.drawables().is_empty());
        assert_eq!(board.current_snapshot().len(), 2); // tombstones keep slots

        board.undo();
        assert_eq!(board.drawables().len(), 2);
    }

    #[test]
    fn clear_on_blank_surface_adds_no_history() {
        let mut board = Board::default();
        assert!(!board.can_undo());
        board.clear().unwrap();
        assert!(!board.can_undo());
    }

    #[test]
    fn undo_drops_selection_of_vanished_element() {
        let mut board = Board::default();
        draw_rect(&mut board, 10.0, 10.0, 50.0, 50.0);

        board.set_tool(ToolKind::Selection);
        board.on_pointer_down(PointerEvent::primary(30.0, 30.0)).unwrap();
        board.on_pointer_up(PointerEvent::primary(30.0, 30.0)).unwrap();
        assert_eq!(board.selected_id(), Some(0));

        board.undo(); // back past the select-grab step
        board.undo(); // back past the rectangle itself
        assert_eq!(board.selected_id(), None);
    }

    #[test]
    fn text_commit_via_board_is_one_step() {
        let mut board = Board::default();
        board.set_tool(ToolKind::Text);
        board.on_pointer_down(PointerEvent::primary(40.0, 40.0)).unwrap();
        assert!(board.is_editing_text());
        assert_eq!(board.pending_text_origin(), Some((40.0, 40.0)));

        let id = board.commit_text("note").unwrap();
        assert!(!board.is_editing_text());
        assert_eq!(board.drawables().len(), 1);
        assert!(board.current_snapshot().get(id).is_some());
    }

    #[test]
    fn take_needs_redraw_clears_the_flag() {
        let mut board = Board::default();
        assert!(board.take_needs_redraw());
        assert!(!board.needs_redraw());

        board.zoom_out();
        assert!(board.needs_redraw());
        assert!(board.take_needs_redraw());
    }
}
