//! Text placement tool.
//!
//! Pointer-down on empty canvas starts a text edit at that point and hands
//! control to the external text-edit overlay. The pending element lives in
//! the tool, not in history, until the overlay commits: a non-empty commit
//! lands exactly one `append` with the measured, non-editing element, and
//! an empty commit discards the pending edit with no history effect.

use super::ToolCtx;
use crate::scene::{Element, find_topmost_at};
use log::debug;

/// Gesture state for the text tool.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TextState {
    Idle,
    /// The overlay is editing a pending element anchored at this scene point
    Editing { x: f64, y: f64 },
}

/// Places text blocks through the external edit overlay.
#[derive(Debug)]
pub struct TextTool {
    state: TextState,
}

impl TextTool {
    pub fn new() -> Self {
        Self {
            state: TextState::Idle,
        }
    }

    /// Abandons any pending edit without touching history.
    pub fn reset(&mut self) {
        self.state = TextState::Idle;
    }

    /// True while the overlay owns a pending edit.
    pub fn is_editing(&self) -> bool {
        matches!(self.state, TextState::Editing { .. })
    }

    /// Scene-space anchor of the pending edit, if one is active.
    pub fn pending_origin(&self) -> Option<(f64, f64)> {
        match self.state {
            TextState::Editing { x, y } => Some((x, y)),
            TextState::Idle => None,
        }
    }

    /// Starts an edit at the down point if the canvas is empty there.
    ///
    /// A down on an existing element is ignored (the selection tool is the
    /// way to interact with existing elements), as is a down while the
    /// overlay already owns an edit.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, ctx: &mut ToolCtx) {
        if self.state != TextState::Idle {
            return;
        }
        if find_topmost_at(ctx.history.current(), x, y).is_some() {
            return;
        }

        self.state = TextState::Editing { x, y };
        debug!("text tool: editing started at ({x:.1}, {y:.1})");
    }

    /// Commits the overlay's final content as one history step.
    ///
    /// Committing empty or whitespace-only content removes the pending
    /// element instead of adding history. Returns the new element's id on a
    /// non-empty commit.
    pub fn commit(&mut self, content: &str, ctx: &mut ToolCtx) -> Option<usize> {
        let TextState::Editing { x, y } = self.state else {
            return None;
        };
        self.state = TextState::Idle;

        if content.trim().is_empty() {
            debug!("text tool: empty commit discarded");
            return None;
        }

        let font = ctx.config.font_spec();
        let (snapshot, element_id) = ctx
            .history
            .current()
            .append_with(|id| Element::text(id, x, y, content, false, &font, ctx.measurer));
        ctx.history.append(snapshot);
        debug!("text tool: committed element {element_id}");
        Some(element_id)
    }

    /// Cancels the pending edit (overlay dismissed), no history effect.
    pub fn cancel(&mut self) {
        if self.is_editing() {
            debug!("text tool: edit cancelled");
        }
        self.state = TextState::Idle;
    }
}

impl Default for TextTool {
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

    fn run(tool_ops: impl FnOnce(&mut TextTool, &mut ToolCtx)) -> History {
        let mut history = History::new();
        let config = Config::default();
        let measurer = FixedMetricsMeasurer::default();
        let mut ctx = ToolCtx {
            history: &mut history,
            config: &config,
            measurer: &measurer,
        };
        let mut tool = TextTool::new();
        tool_ops(&mut tool, &mut ctx);
        history
    }

    #[test]
    fn commit_lands_exactly_one_history_step() {
        let history = run(|tool, ctx| {
            tool.on_pointer_down(10.0, 20.0, ctx);
            assert!(tool.is_editing());
            assert_eq!(ctx.history.len(), 1); // nothing in history yet

            let id = tool.commit("hello\nworld", ctx).unwrap();
            assert_eq!(id, 0);
            assert!(!tool.is_editing());
        });

        assert_eq!(history.len(), 2);
        match history.current().get(0) {
            Some(Element::Text { is_editing, lines, .. }) => {
                assert!(!is_editing);
                assert_eq!(lines.len(), 2);
                assert_eq!(lines[0].x, 10.0);
                assert_eq!(lines[0].y, 20.0);
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn empty_commit_leaves_history_untouched() {
        let history = run(|tool, ctx| {
            tool.on_pointer_down(10.0, 20.0, ctx);
            assert!(tool.commit("   \n ", ctx).is_none());
            assert!(!tool.is_editing());
        });

        assert_eq!(history.len(), 1);
        assert!(history.current().is_empty());
    }

    #[test]
    fn down_on_existing_element_does_not_start_an_edit() {
        run(|tool, ctx| {
            let style = ctx.config.sketch_style();
            let (snapshot, _) = ctx
                .history
                .current()
                .append_with(|id| Element::rectangle(id, 0.0, 0.0, 50.0, 50.0, style));
            ctx.history.append(snapshot);

            tool.on_pointer_down(25.0, 25.0, ctx);
            assert!(!tool.is_editing());
        });
    }

    #[test]
    fn cancel_discards_pending_edit() {
        let history = run(|tool, ctx| {
            tool.on_pointer_down(10.0, 20.0, ctx);
            tool.cancel();

            assert!(!tool.is_editing());
            assert!(tool.pending_origin().is_none());
            assert!(tool.commit("late", ctx).is_none());
        });
        assert_eq!(history.len(), 1);
    }
}
