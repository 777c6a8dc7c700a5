//! Freehand drawing tool.

use super::ToolCtx;
use crate::error::SketchError;
use crate::scene::Element;
use log::debug;

/// Gesture state for the freehand tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawState {
    Idle,
    Drawing { element_id: usize },
}

/// Draws freehand strokes: pointer-down starts a single-point element and
/// every move appends the pointer position to its path.
///
/// No point thinning or simplification happens here; the raw path goes to
/// the external stroke-outline collaborator at render time.
#[derive(Debug)]
pub struct FreehandTool {
    state: DrawState,
}

impl FreehandTool {
    pub fn new() -> Self {
        Self {
            state: DrawState::Idle,
        }
    }

    /// Abandons any in-flight gesture.
    pub fn reset(&mut self) {
        self.state = DrawState::Idle;
    }

    /// Starts a new stroke with the down point as its only point.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, ctx: &mut ToolCtx) {
        if self.state != DrawState::Idle {
            return;
        }

        let size = ctx.config.freehand.size;
        let (snapshot, element_id) = ctx
            .history
            .current()
            .append_with(|id| Element::freehand(id, vec![(x, y)], size));
        ctx.history.append(snapshot);
        self.state = DrawState::Drawing { element_id };
        debug!("freehand tool: started element {element_id} at ({x:.1}, {y:.1})");
    }

    /// Appends the pointer position to the stroke's path.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, ctx: &mut ToolCtx) -> Result<(), SketchError> {
        let DrawState::Drawing { element_id } = self.state else {
            return Ok(());
        };

        let snapshot = ctx.history.current();
        let element = snapshot
            .get(element_id)
            .ok_or(SketchError::MissingElement { id: element_id })?;
        let Element::Freehand { points, .. } = element else {
            return Err(SketchError::UnexpectedVariant {
                id: element_id,
                expected: "freehand",
                actual: element.variant_name(),
            });
        };

        let mut points = points.clone();
        points.push((x, y));
        let size = ctx.config.freehand.size;
        let updated = snapshot.replace(Element::freehand(element_id, points, size))?;
        ctx.history.replace_current(updated);
        Ok(())
    }

    /// Finishes the stroke.
    pub fn on_pointer_up(&mut self) {
        if let DrawState::Drawing { element_id } = self.state {
            debug!("freehand tool: finished element {element_id}");
        }
        self.state = DrawState::Idle;
    }
}

impl Default for FreehandTool {
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

    fn run(tool_ops: impl FnOnce(&mut FreehandTool, &mut ToolCtx)) -> History {
        let mut history = History::new();
        let config = Config::default();
        let measurer = FixedMetricsMeasurer::default();
        let mut ctx = ToolCtx {
            history: &mut history,
            config: &config,
            measurer: &measurer,
        };
        let mut tool = FreehandTool::new();
        tool_ops(&mut tool, &mut ctx);
        history
    }

    #[test]
    fn stroke_accumulates_every_move_point() {
        let history = run(|tool, ctx| {
            tool.on_pointer_down(0.0, 0.0, ctx);
            tool.on_pointer_move(1.0, 1.0, ctx).unwrap();
            tool.on_pointer_move(2.0, 3.0, ctx).unwrap();
            tool.on_pointer_move(2.0, 3.0, ctx).unwrap(); // duplicates are kept
            tool.on_pointer_up();
        });

        assert_eq!(history.len(), 2);
        match history.current().get(0) {
            Some(Element::Freehand { points, .. }) => {
                assert_eq!(
                    points,
                    &vec![(0.0, 0.0), (1.0, 1.0), (2.0, 3.0), (2.0, 3.0)]
                );
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn tap_without_move_leaves_single_point() {
        let history = run(|tool, ctx| {
            tool.on_pointer_down(7.0, 8.0, ctx);
            tool.on_pointer_up();
        });

        match history.current().get(0) {
            Some(Element::Freehand { points, .. }) => assert_eq!(points, &vec![(7.0, 8.0)]),
            other => panic!("unexpected element: {other:?}"),
        }
    }
}
