//! Line drawing tool.

use super::ToolCtx;
use crate::error::SketchError;
use crate::scene::Element;
use log::debug;

/// Gesture state for the line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawState {
    Idle,
    Drawing { element_id: usize },
}

/// Draws straight lines: pointer-down anchors the start point, every move
/// re-targets the end point, pointer-up finishes the gesture.
///
/// The whole gesture is one undo step: the zero-length line appended on
/// pointer-down is the `append`, every move is a `replace_current`.
#[derive(Debug)]
pub struct LineTool {
    state: DrawState,
}

impl LineTool {
    pub fn new() -> Self {
        Self {
            state: DrawState::Idle,
        }
    }

    /// Abandons any in-flight gesture.
    pub fn reset(&mut self) {
        self.state = DrawState::Idle;
    }

    /// Starts a new line at the down point.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, ctx: &mut ToolCtx) {
        if self.state != DrawState::Idle {
            return;
        }

        let style = ctx.config.sketch_style();
        let (snapshot, element_id) = ctx
            .history
            .current()
            .append_with(|id| Element::line(id, x, y, x, y, style));
        ctx.history.append(snapshot);
        self.state = DrawState::Drawing { element_id };
        debug!("line tool: started element {element_id} at ({x:.1}, {y:.1})");
    }

    /// Re-targets the line's end point at the current pointer position.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, ctx: &mut ToolCtx) -> Result<(), SketchError> {
        let DrawState::Drawing { element_id } = self.state else {
            return Ok(());
        };

        let snapshot = ctx.history.current();
        let element = snapshot
            .get(element_id)
            .ok_or(SketchError::MissingElement { id: element_id })?;
        let Element::Line { x1, y1, .. } = element else {
            return Err(SketchError::UnexpectedVariant {
                id: element_id,
                expected: "line",
                actual: element.variant_name(),
            });
        };

        let style = ctx.config.sketch_style();
        let updated = snapshot.replace(Element::line(element_id, *x1, *y1, x, y, style))?;
        ctx.history.replace_current(updated);
        Ok(())
    }

    /// Finishes the gesture. Lines need no normalization.
    pub fn on_pointer_up(&mut self) {
        if let DrawState::Drawing { element_id } = self.state {
            debug!("line tool: finished element {element_id}");
        }
        self.state = DrawState::Idle;
    }
}

impl Default for LineTool {
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
    use crate::util::distance;

    fn run(tool_ops: impl FnOnce(&mut LineTool, &mut ToolCtx)) -> History {
        let mut history = History::new();
        let config = Config::default();
        let measurer = FixedMetricsMeasurer::default();
        let mut ctx = ToolCtx {
            history: &mut history,
            config: &config,
            measurer: &measurer,
        };
        let mut tool = LineTool::new();
        tool_ops(&mut tool, &mut ctx);
        history
    }

    #[test]
    fn full_gesture_is_one_undo_step() {
        let history = run(|tool, ctx| {
            tool.on_pointer_down(10.0, 10.0, ctx);
            tool.on_pointer_move(20.0, 15.0, ctx).unwrap();
            tool.on_pointer_move(40.0, 30.0, ctx).unwrap();
            tool.on_pointer_up();
        });

        assert_eq!(history.len(), 2); // initial empty + one gesture
        match history.current().get(0) {
            Some(Element::Line { x1, y1, x2, y2, .. }) => {
                assert_eq!((*x1, *y1), (10.0, 10.0));
                assert_eq!((*x2, *y2), (40.0, 30.0));
                assert!(distance(*x1, *y1, *x2, *y2) > 0.0);
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn move_without_down_is_a_no_op() {
        let history = run(|tool, ctx| {
            tool.on_pointer_move(20.0, 15.0, ctx).unwrap();
        });
        assert_eq!(history.len(), 1);
        assert!(history.current().is_empty());
    }

    #[test]
    fn down_appends_zero_length_line() {
        let history = run(|tool, ctx| {
            tool.on_pointer_down(5.0, 6.0, ctx);
        });
        match history.current().get(0) {
            Some(Element::Line { x1, y1, x2, y2, .. }) => {
                assert_eq!((*x1, *y1), (*x2, *y2));
                assert_eq!((*x1, *y1), (5.0, 6.0));
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }
}
