//! Element definitions for the drawing surface.
//!
//! An [`Element`] is a tagged variant: line, rectangle, freehand stroke,
//! text block, or a removed-tombstone. Every drawable variant owns a cached
//! [`Primitive`] derived purely from its geometry/content; constructors are
//! the only place primitives are produced, so the cache can never drift
//! from the geometry.

use super::primitive::{FontSpec, Primitive, SketchStyle};
use crate::error::SketchError;
use crate::render::TextMeasurer;

/// One wrapped line of a text element, as laid out by the external
/// text-measurement collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Left edge of the line box, scene units
    pub x: f64,
    /// Top edge of the line box, scene units
    pub y: f64,
    /// Line box width in scene units
    pub width: f64,
    /// Line box height in scene units
    pub height: f64,
    /// The characters laid out on this line
    pub content: String,
}

/// A single element on the drawing surface.
///
/// The element's `id` equals its index in every snapshot containing it; ids
/// are assigned on append and never reassigned. Move/resize operations
/// replace the element at the same index with a new value carrying the same
/// id.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Straight line between two endpoints
    Line {
        id: usize,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// Cached sketch-style drawable for the renderer
        primitive: Primitive,
    },
    /// Rectangle spanning two opposite corners.
    ///
    /// `(x1, y1)`/`(x2, y2)` are not normalized while a draw or resize drag
    /// is in flight; once the gesture ends they are corrected so that
    /// `(x1, y1)` is the top-left and `(x2, y2)` the bottom-right corner.
    Rectangle {
        id: usize,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        primitive: Primitive,
    },
    /// Freehand stroke: the raw pointer path, unsimplified
    Freehand {
        id: usize,
        points: Vec<(f64, f64)>,
        primitive: Primitive,
    },
    /// Wrapped text block.
    ///
    /// While `is_editing` is true the element is owned by the external edit
    /// overlay and is neither drawn on the main surface nor hit-testable.
    Text {
        id: usize,
        is_editing: bool,
        lines: Vec<TextLine>,
        primitive: Primitive,
    },
    /// Tombstone left behind by a delete; keeps the id slot occupied so
    /// later elements keep their ids, draws as nothing
    Removed { id: usize },
}

impl Element {
    /// Creates a line element and its sketch primitive.
    ///
    /// Total for any finite coordinates; a zero-length line is valid (it is
    /// exactly what a shape tool appends on pointer-down).
    pub fn line(id: usize, x1: f64, y1: f64, x2: f64, y2: f64, style: SketchStyle) -> Self {
        Element::Line {
            id,
            x1,
            y1,
            x2,
            y2,
            primitive: Primitive::SketchLine { x1, y1, x2, y2, style },
        }
    }

    /// Creates a rectangle element from one corner plus width/height.
    ///
    /// Width/height may be negative mid-drag; the stored opposite corner is
    /// simply `(x1 + width, y1 + height)`. Corners are normalized at
    /// gesture end via [`adjust_rectangle_corners`].
    pub fn rectangle(id: usize, x1: f64, y1: f64, width: f64, height: f64, style: SketchStyle) -> Self {
        Element::Rectangle {
            id,
            x1,
            y1,
            x2: x1 + width,
            y2: y1 + height,
            primitive: Primitive::SketchRectangle {
                x: x1,
                y: y1,
                width,
                height,
                style,
            },
        }
    }

    /// Creates a freehand element from an ordered pointer path.
    ///
    /// No point thinning happens here; the external stroke-outline
    /// collaborator receives the raw path at render time.
    pub fn freehand(id: usize, points: Vec<(f64, f64)>, size: f64) -> Self {
        let primitive = Primitive::StrokePath {
            points: points.clone(),
            size,
        };
        Element::Freehand {
            id,
            points,
            primitive,
        }
    }

    /// Creates a text element by laying out `content` at `(x, y)` through
    /// the text-measurement collaborator.
    ///
    /// The measurer must be deterministic: moving a text element re-measures
    /// the same content at a new origin and relies on identical wrapping.
    pub fn text(
        id: usize,
        x: f64,
        y: f64,
        content: &str,
        is_editing: bool,
        font: &FontSpec,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let lines = measurer.measure(content, font, (x, y));
        let primitive = Primitive::TextBlock {
            lines: lines.clone(),
            font: font.clone(),
        };
        Element::Text {
            id,
            is_editing,
            lines,
            primitive,
        }
    }

    /// Creates a removed-tombstone for the given id slot.
    pub fn removed(id: usize) -> Self {
        Element::Removed { id }
    }

    /// Returns the element's id (its index within any containing snapshot).
    pub fn id(&self) -> usize {
        match self {
            Element::Line { id, .. }
            | Element::Rectangle { id, .. }
            | Element::Freehand { id, .. }
            | Element::Text { id, .. }
            | Element::Removed { id } => *id,
        }
    }

    /// Returns true for a removed-tombstone.
    pub fn is_removed(&self) -> bool {
        matches!(self, Element::Removed { .. })
    }

    /// Returns the cached drawable primitive, or `None` for a tombstone.
    pub fn primitive(&self) -> Option<&Primitive> {
        match self {
            Element::Line { primitive, .. }
            | Element::Rectangle { primitive, .. }
            | Element::Freehand { primitive, .. }
            | Element::Text { primitive, .. } => Some(primitive),
            Element::Removed { .. } => None,
        }
    }

    /// Variant name for error reporting.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Element::Line { .. } => "line",
            Element::Rectangle { .. } => "rectangle",
            Element::Freehand { .. } => "freehand",
            Element::Text { .. } => "text",
            Element::Removed { .. } => "removed",
        }
    }
}

/// Normalized rectangle corners: `(min_x, min_y, max_x, max_y)`.
pub type RectCorners = (f64, f64, f64, f64);

/// Normalizes an arbitrarily-dragged rectangle so that `(x1, y1)` is the
/// top-left and `(x2, y2)` the bottom-right corner.
///
/// Called once at gesture end (never during the drag), which handles the
/// user dragging past the opposite corner and flipping the shape.
///
/// # Errors
/// [`SketchError::UnexpectedVariant`] if `element` is not a rectangle; this
/// is a caller defect.
pub fn adjust_rectangle_corners(element: &Element) -> Result<RectCorners, SketchError> {
    match element {
        Element::Rectangle { x1, y1, x2, y2, .. } => Ok((
            x1.min(*x2),
            y1.min(*y2),
            x1.max(*x2),
            y1.max(*y2),
        )),
        other => Err(SketchError::UnexpectedVariant {
            id: other.id(),
            expected: "rectangle",
            actual: other.variant_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FixedMetricsMeasurer;

    fn style() -> SketchStyle {
        SketchStyle {
            seed: 5,
            roughness: 0.2,
            stroke_width: 1.2,
        }
    }

    #[test]
    fn line_constructor_caches_matching_primitive() {
        let element = Element::line(0, 1.0, 2.0, 3.0, 4.0, style());
        match element.primitive() {
            Some(Primitive::SketchLine { x1, y1, x2, y2, .. }) => {
                assert_eq!((*x1, *y1, *x2, *y2), (1.0, 2.0, 3.0, 4.0));
            }
            other => panic!("unexpected primitive: {other:?}"),
        }
    }

    #[test]
    fn rectangle_constructor_derives_opposite_corner() {
        let element = Element::rectangle(3, 10.0, 20.0, -4.0, 6.0, style());
        match element {
            Element::Rectangle { x1, y1, x2, y2, .. } => {
                assert_eq!((x1, y1), (10.0, 20.0));
                assert_eq!((x2, y2), (6.0, 26.0));
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn adjust_rectangle_corners_normalizes_flipped_drag() {
        // Dragged from (50, 50) up-left to (10, 10).
        let element = Element::rectangle(0, 50.0, 50.0, -40.0, -40.0, style());
        let (min_x, min_y, max_x, max_y) = adjust_rectangle_corners(&element).unwrap();
        assert_eq!((min_x, min_y), (10.0, 10.0));
        assert_eq!((max_x, max_y), (50.0, 50.0));
    }

    #[test]
    fn adjust_rectangle_corners_rejects_other_variants() {
        let element = Element::line(7, 0.0, 0.0, 1.0, 1.0, style());
        let err = adjust_rectangle_corners(&element).unwrap_err();
        assert!(matches!(
            err,
            SketchError::UnexpectedVariant { id: 7, expected: "rectangle", .. }
        ));
    }

    #[test]
    fn text_constructor_measures_lines() {
        let font = FontSpec {
            family: "Sans".to_string(),
            size: 16.0,
            line_height_factor: 1.5,
        };
        let measurer = FixedMetricsMeasurer::default();
        let element = Element::text(1, 5.0, 8.0, "ab\ncd", false, &font, &measurer);
        match element {
            Element::Text { lines, is_editing, .. } => {
                assert!(!is_editing);
                assert_eq!(lines.len(), 2);
                assert_eq!(lines[0].content, "ab");
                assert_eq!(lines[0].x, 5.0);
                assert_eq!(lines[1].content, "cd");
                assert!(lines[1].y > lines[0].y);
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn removed_has_no_primitive() {
        let element = Element::removed(4);
        assert!(element.is_removed());
        assert!(element.primitive().is_none());
        assert_eq!(element.id(), 4);
    }
}
