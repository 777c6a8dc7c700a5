//! Interfaces to the external rendering collaborators.
//!
//! The core never rasterizes. It exposes [`Primitive`] data per element and
//! consumes three collaborator contracts:
//! - [`RenderBackend`]: receives the scene's drawables once per frame,
//!   fire-and-forget.
//! - [`StrokeOutliner`]: turns a freehand point list into a closed fillable
//!   path. Renderer-side only; hit-testing uses its own segment-distance
//!   thresholds and never consults the visual outline.
//! - [`TextMeasurer`]: turns a content string plus font into wrapped line
//!   boxes. Must be deterministic, since hit-testing and move/resize logic
//!   depend on reproducible layout.
//!
//! [`FixedMetricsMeasurer`] is a built-in deterministic measurer so the
//! core (and its tests) can lay out text without a font stack.

use crate::scene::{FontSpec, Primitive, TextLine};

/// Receives the drawable primitives for one frame.
///
/// The backend returns nothing to the core; drawing is fire-and-forget.
pub trait RenderBackend {
    /// Draws one frame. `drawables` is every non-removed, non-editing
    /// element's primitive in z-order (first = bottom layer).
    fn draw_frame(&mut self, drawables: &[&Primitive]);
}

/// Computes a closed fillable outline for a freehand stroke.
pub trait StrokeOutliner {
    /// Returns the closed outline polygon for `points` drawn at `size`.
    fn outline(&self, points: &[(f64, f64)], size: f64) -> Vec<(f64, f64)>;
}

/// Lays out a content string into wrapped line boxes.
///
/// Implementations must be deterministic for identical input: the same
/// content, font, and origin always produce the same boxes.
pub trait TextMeasurer {
    /// Measures `content` with `font`, anchored at `origin` (top-left of
    /// the first line box). Returns one box per laid-out line.
    fn measure(&self, content: &str, font: &FontSpec, origin: (f64, f64)) -> Vec<TextLine>;
}

/// Deterministic fixed-metrics text measurer.
///
/// Treats every character as `font.size * advance_factor` wide and every
/// line as `font.size * line_height_factor` tall, splitting only on
/// explicit newlines. Good enough for headless use and tests; an embedding
/// application with a real font stack supplies its own [`TextMeasurer`].
#[derive(Debug, Clone)]
pub struct FixedMetricsMeasurer {
    /// Per-character advance as a multiple of the font size
    pub advance_factor: f64,
}

impl Default for FixedMetricsMeasurer {
    fn default() -> Self {
        Self { advance_factor: 0.6 }
    }
}

impl TextMeasurer for FixedMetricsMeasurer {
    fn measure(&self, content: &str, font: &FontSpec, origin: (f64, f64)) -> Vec<TextLine> {
        let line_height = font.size * font.line_height_factor;
        let advance = font.size * self.advance_factor;

        content
            .split('\n')
            .enumerate()
            .map(|(row, line)| TextLine {
                x: origin.0,
                y: origin.1 + row as f64 * line_height,
                width: line.chars().count() as f64 * advance,
                height: line_height,
                content: line.to_string(),
            })
            .collect()
    }
}
