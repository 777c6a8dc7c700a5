//! Rectangle drawing tool.

use super::ToolCtx;
use crate::error::SketchError;
use crate::scene::{Element, adjust_rectangle_corners};
use log::debug;

/// Gesture state for the rectangle tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawState {
    Idle,
    Drawing { element_id: usize },
}

/// Draws rectangles from corner to corner.
///
/// While the drag is in flight the rectangle may be geometrically inverted
/// (the pointer dragged past the anchor corner); corners are normalized
/// exactly once, on pointer-up, so stored rectangles always have `(x1, y1)`
/// top-left and `(x2, y2)` bottom-right.
#[derive(Debug)]
pub struct RectTool {
    state: DrawState,
}

impl RectTool {
    pub fn new() -> Self {
        Self {
            state: DrawState::Idle,
        }
    }

    /// Abandons any in-flight gesture.
    pub fn reset(&mut self) {
        self.state = DrawState::Idle;
    }

    /// Starts a new zero-size rectangle at the down point.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, ctx: &mut ToolCtx) {
        if self.state != DrawState::Idle {
            return;
        }

        let style = ctx.config.sketch_style();
        let (snapshot, element_id) = ctx
            .history
            .current()
            .append_with(|id| Element::rectangle(id, x, y, 0.0, 0.0, style));
        ctx.history.append(snapshot);
        self.state = DrawState::Drawing { element_id };
        debug!("rect tool: started element {element_id} at ({x:.1}, {y:.1})");
    }

    /// Stretches the rectangle from its anchor corner to the pointer.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, ctx: &mut ToolCtx) -> Result<(), SketchError> {
        let DrawState::Drawing { element_id } = self.state else {
            return Ok(());
        };

        let snapshot = ctx.history.current();
        let element = snapshot
            .get(element_id)
            .ok_or(SketchError::MissingElement { id: element_id })?;
        let Element::Rectangle { x1, y1, .. } = element else {
            return Err(SketchError::UnexpectedVariant {
                id: element_id,
                expected: "rectangle",
                actual: element.variant_name(),
            });
        };

        let style = ctx.config.sketch_style();
        let updated =
            snapshot.replace(Element::rectangle(element_id, *x1, *y1, x - x1, y - y1, style))?;
        ctx.history.replace_current(updated);
        Ok(())
    }

    /// Finishes the gesture, normalizing the corners of a flipped drag.
    pub fn on_pointer_up(&mut self, ctx: &mut ToolCtx) -> Result<(), SketchError> {
        let DrawState::Drawing { element_id } = self.state else {
            return Ok(());
        };
        self.state = DrawState::Idle;

        let snapshot = ctx.history.current();
        let element = snapshot
            .get(element_id)
            .ok_or(SketchError::MissingElement { id: element_id })?;
        let (min_x, min_y, max_x, max_y) = adjust_rectangle_corners(element)?;

        let style = ctx.config.sketch_style();
        let updated = snapshot.replace(Element::rectangle(
            element_id,
            min_x,
            min_y,
            max_x - min_x,
            max_y - min_y,
            style,
        ))?;
        ctx.history.replace_current(updated);
        debug!("rect tool: finished element {element_id}");
        Ok(())
    }
}

impl Default for RectTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::render::FixedMetricsMeasurer;
    use crate::scene::History;

    fn run(tool_ops: impl FnOnce(&mut RectTool, &mut ToolCtx)) -> History {
        let mut history = History::new();
        let config = Config::default();
        let measurer = FixedMetricsMeasurer::default();
        let mut ctx = ToolCtx {
            history: &mut history,
            config: &config,
            measurer: &measurer,
        };
        let mut tool = RectTool::new();
        tool_ops(&mut tool, &mut ctx);
        history
    }

    fn corners(history: &History) -> (f64, f64, f64, f64) {
        match history.current().get(0) {
            Some(Element::Rectangle { x1, y1, x2, y2, .. }) => (*x1, *y1, *x2, *y2),
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn backwards_drag_is_normalized_on_release() {
        let history = run(|tool, ctx| {
            tool.on_pointer_down(50.0, 50.0, ctx);
            tool.on_pointer_move(30.0, 20.0, ctx).unwrap();
            tool.on_pointer_move(10.0, 10.0, ctx).unwrap();
            tool.on_pointer_up(ctx).unwrap();
        });

        assert_eq!(corners(&history), (10.0, 10.0, 50.0, 50.0));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn mid_drag_rectangle_may_be_inverted() {
        let history = run(|tool, ctx| {
            tool.on_pointer_down(50.0, 50.0, ctx);
            tool.on_pointer_move(10.0, 10.0, ctx).unwrap();
            // no pointer-up: still mid-gesture
        });

        // Anchor corner stays put; the stored corners are not normalized yet.
        assert_eq!(corners(&history), (50.0, 50.0, 10.0, 10.0));
    }

    #[test]
    fn forward_drag_is_unchanged_by_normalization() {
        let history = run(|tool, ctx| {
            tool.on_pointer_down(10.0, 10.0, ctx);
            tool.on_pointer_move(60.0, 40.0, ctx).unwrap();
            tool.on_pointer_up(ctx).unwrap();
        });

        assert_eq!(corners(&history), (10.0, 10.0, 60.0, 40.0));
    }
}
