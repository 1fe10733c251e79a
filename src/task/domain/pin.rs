//! Pin position on the rendered floor-plan image.

use serde::{Deserialize, Serialize};

/// Position of a task pin, in the coordinate space of the rendered
/// floor-plan image.
///
/// Coordinates are stored exactly as captured from the placement surface;
/// the domain never computes on them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinPosition {
    x: f64,
    y: f64,
}

impl PinPosition {
    /// Creates a pin position from image-space coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal coordinate.
    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    /// Returns the vertical coordinate.
    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }
}
