//! Sketch-plane points.

use drafter_units::{Quantity, UnitError};
use serde::{Deserialize, Serialize};

/// A point on the sketch plane.
///
/// Coordinates are quantities, so `Point::new(1.0, Quantity::meters(2.0))`
/// is a valid mixed-unit point. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: Quantity,
    /// Y coordinate.
    pub y: Quantity,
}

impl Point {
    /// Create a new point.
    pub fn new(x: impl Into<Quantity>, y: impl Into<Quantity>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// This point offset by `(dx, dy)`, rescaling units as needed.
    pub fn translated(&self, dx: Quantity, dy: Quantity) -> Result<Point, UnitError> {
        Ok(Point {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}
