//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Sketch-rendering style settings.
///
/// These are passed through unchanged to the external sketch renderer via
/// every shape primitive. The seed keeps the rendered jitter stable from
/// frame to frame.
#[derive(Debug, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Seed for the sketch renderer's pseudo-random jitter
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Roughness factor; 0.0 draws clean strokes (valid range: 0.0 - 10.0)
    #[serde(default = "default_roughness")]
    pub roughness: f64,

    /// Stroke width in scene units (valid range: 0.1 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            roughness: default_roughness(),
            stroke_width: default_stroke_width(),
        }
    }
}

/// Freehand stroke settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct FreehandConfig {
    /// Stroke size handed to the stroke-outline collaborator (valid range:
    /// 0.5 - 50.0)
    #[serde(default = "default_freehand_size")]
    pub size: f64,
}

impl Default for FreehandConfig {
    fn default() -> Self {
        Self {
            size: default_freehand_size(),
        }
    }
}

/// Text layout settings.
///
/// The font spec built from these values goes to the text-measurement
/// collaborator; layout must be reproducible, so the values are fixed for
/// the lifetime of the board.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextConfig {
    /// Font family name (e.g. "Sans", "Noto Sans Thai Looped")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in scene units (valid range: 4.0 - 200.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Line box height as a multiple of the font size (valid range: 0.5 - 4.0)
    #[serde(default = "default_line_height_factor")]
    pub line_height_factor: f64,

    /// Per-character advance as a multiple of the font size, used by the
    /// built-in fixed-metrics measurer (valid range: 0.1 - 2.0)
    #[serde(default = "default_advance_factor")]
    pub advance_factor: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            line_height_factor: default_line_height_factor(),
            advance_factor: default_advance_factor(),
        }
    }
}

/// Zoom behavior settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Zoom change per step (valid range: 0.01 - 1.0)
    #[serde(default = "default_zoom_step")]
    pub step: f64,

    /// Smallest allowed zoom factor (valid range: 0.01 - 1.0)
    #[serde(default = "default_zoom_min")]
    pub min: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: default_zoom_step(),
            min: default_zoom_min(),
        }
    }
}

fn default_seed() -> u64 {
    5
}

fn default_roughness() -> f64 {
    0.2
}

fn default_stroke_width() -> f64 {
    1.2
}

fn default_freehand_size() -> f64 {
    3.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_size() -> f64 {
    16.0
}

fn default_line_height_factor() -> f64 {
    1.65
}

fn default_advance_factor() -> f64 {
    0.6
}

fn default_zoom_step() -> f64 {
    0.1
}

fn default_zoom_min() -> f64 {
    0.1
}
