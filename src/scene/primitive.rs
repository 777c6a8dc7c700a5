//! Renderable primitives cached on elements.
//!
//! A [`Primitive`] is the data handed to the external rendering backend for
//! one element: enough geometry (plus deterministic styling parameters) to
//! produce the sketch-style strokes, the filled freehand outline, or the
//! laid-out text. The core never rasterizes anything itself.
//!
//! Primitives are regenerated by the element constructors on every
//! geometric change and are never mutated independently of the geometry
//! they were derived from.

use crate::scene::element::TextLine;

/// Deterministic styling parameters for sketch-rendered shapes.
///
/// The external sketch renderer derives its jitter from `seed`, so the same
/// element always produces the same strokes across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchStyle {
    /// Seed for the renderer's pseudo-random jitter
    pub seed: u64,
    /// Roughness factor (0.0 = clean strokes)
    pub roughness: f64,
    /// Stroke width in scene units
    pub stroke_width: f64,
}

/// Font parameters for text layout and rendering.
///
/// Passed unchanged to the text-measurement collaborator so that layout is
/// reproducible: the hit-tester and the move logic both depend on the line
/// boxes it returns.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family name (e.g. "Sans", "Noto Sans Thai Looped")
    pub family: String,
    /// Font size in scene units
    pub size: f64,
    /// Line box height as a multiple of the font size
    pub line_height_factor: f64,
}

/// Drawable data for a single element.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A sketch-style straight line between two points
    SketchLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: SketchStyle,
    },
    /// A sketch-style rectangle outline
    SketchRectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: SketchStyle,
    },
    /// A freehand stroke: the raw point list plus the stroke size.
    ///
    /// The external stroke-outline collaborator turns this into a closed
    /// fillable path at render time; hit-testing never consults that
    /// outline.
    StrokePath { points: Vec<(f64, f64)>, size: f64 },
    /// Wrapped text: one box per laid-out line plus the font used to
    /// measure them.
    TextBlock { lines: Vec<TextLine>, font: FontSpec },
}

impl Primitive {
    /// Variant name for error reporting.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Primitive::SketchLine { .. } => "sketch line",
            Primitive::SketchRectangle { .. } => "sketch rectangle",
            Primitive::StrokePath { .. } => "stroke path",
            Primitive::TextBlock { .. } => "text block",
        }
    }
}
