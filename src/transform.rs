//! Viewport <-> scene coordinate transform.
//!
//! The surface is zoomable: a single scalar maps viewport pixels to scene
//! units (`scene = viewport / zoom`). The transform is owned by the board
//! and threaded explicitly into event handling; tools only ever see
//! scene-space coordinates.

/// Bidirectional viewport/scene mapping parameterized by a zoom scalar.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    zoom: f64,
    step: f64,
    min_zoom: f64,
}

impl Transform {
    /// Creates a transform at 100% zoom with the given step and minimum.
    pub fn new(step: f64, min_zoom: f64) -> Self {
        Self {
            zoom: 1.0,
            step,
            min_zoom,
        }
    }

    /// Current zoom factor (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Converts a viewport-space point to scene space.
    pub fn to_scene(&self, viewport_x: f64, viewport_y: f64) -> (f64, f64) {
        (viewport_x / self.zoom, viewport_y / self.zoom)
    }

    /// Converts a scene-space point to viewport space.
    pub fn to_viewport(&self, scene_x: f64, scene_y: f64) -> (f64, f64) {
        (scene_x * self.zoom, scene_y * self.zoom)
    }

    /// Increases zoom by one step. Unbounded upward.
    pub fn zoom_in(&mut self) {
        self.zoom += self.step;
    }

    /// Decreases zoom by one step, clamped at the configured minimum.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - self.step).max(self.min_zoom);
    }

    /// Resets to 100%.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.1, 0.1)
    }
}
