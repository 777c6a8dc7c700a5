//! Pointer event types delivered by the embedding application.

/// One pointer event in viewport coordinates.
///
/// The board converts viewport→scene before any tool sees the position.
/// `primary` distinguishes the primary pointer from secondary multi-touch
/// contacts; non-primary events are ignored by every tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// X position in viewport pixels
    pub viewport_x: f64,
    /// Y position in viewport pixels
    pub viewport_y: f64,
    /// Whether this is the primary pointer of the interaction
    pub primary: bool,
}

impl PointerEvent {
    /// Creates a primary-pointer event.
    pub fn primary(viewport_x: f64, viewport_y: f64) -> Self {
        Self {
            viewport_x,
            viewport_y,
            primary: true,
        }
    }

    /// Creates a non-primary (secondary touch) event.
    pub fn secondary(viewport_x: f64, viewport_y: f64) -> Self {
        Self {
            viewport_x,
            viewport_y,
            primary: false,
        }
    }
}
