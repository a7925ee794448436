//! Primitive shapes held by sketches.

use drafter_units::{Quantity, UnitError};
use serde::{Deserialize, Serialize};

use crate::Point;

/// A primitive shape on the sketch plane.
///
/// Primitives carry no transformation of their own; placement is supplied
/// contextually by the enclosing container at serialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Primitive {
    /// A straight segment between two endpoints.
    Line {
        /// First endpoint.
        first: Point,
        /// Last endpoint.
        last: Point,
    },
    /// A bare edge between two endpoints.
    Edge {
        /// First endpoint.
        first: Point,
        /// Last endpoint.
        last: Point,
    },
    /// A full circle.
    Circle {
        /// Center point.
        center: Point,
        /// Radius.
        radius: Quantity,
    },
    /// A circular arc swept between two angles.
    Arc {
        /// Center point.
        center: Point,
        /// Radius.
        radius: Quantity,
        /// Start angle (angular quantity).
        start_angle: Quantity,
        /// End angle (angular quantity).
        end_angle: Quantity,
    },
    /// An axis-aligned rectangle spanning two opposite corners.
    Rectangle {
        /// One corner.
        first: Point,
        /// The opposite corner.
        last: Point,
    },
    /// An axis-aligned square.
    Square {
        /// Corner nearest the origin.
        origin: Point,
        /// Side length.
        side: Quantity,
    },
    /// A triangle.
    Triangle {
        /// First vertex.
        a: Point,
        /// Second vertex.
        b: Point,
        /// Third vertex.
        c: Point,
    },
    /// A closed polygon.
    Polygon {
        /// Vertices in winding order. A repeated closing vertex is allowed.
        vertices: Vec<Point>,
    },
    /// A chain of segments, closed when the last vertex repeats the first.
    Polyline {
        /// Vertices in order.
        vertices: Vec<Point>,
    },
    /// An open edge path.
    Path {
        /// Vertices in order.
        vertices: Vec<Point>,
    },
}

/// Corner points of the rectangle spanning `first`..`last`,
/// counter-clockwise from `first`.
pub fn rectangle_corners(first: &Point, last: &Point) -> [Point; 4] {
    [
        *first,
        Point {
            x: last.x,
            y: first.y,
        },
        *last,
        Point {
            x: first.x,
            y: last.y,
        },
    ]
}

/// Corner points of the square at `origin` with the given side length,
/// counter-clockwise from `origin`.
pub fn square_corners(origin: &Point, side: Quantity) -> Result<[Point; 4], UnitError> {
    let far_x = origin.x.checked_add(side)?;
    let far_y = origin.y.checked_add(side)?;
    Ok([
        *origin,
        Point {
            x: far_x,
            y: origin.y,
        },
        Point { x: far_x, y: far_y },
        Point {
            x: origin.x,
            y: far_y,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_corners_winding() {
        let corners = rectangle_corners(&Point::new(0.0, 0.0), &Point::new(1.0, 2.0));
        assert_eq!(corners[0], Point::new(0.0, 0.0));
        assert_eq!(corners[1], Point::new(1.0, 0.0));
        assert_eq!(corners[2], Point::new(1.0, 2.0));
        assert_eq!(corners[3], Point::new(0.0, 2.0));
    }

    #[test]
    fn test_square_corners_with_units() {
        let corners =
            square_corners(&Point::new(0.0, 0.0), Quantity::meters(2.0)).unwrap();
        assert_eq!(corners[2], Point::new(Quantity::meters(2.0), Quantity::meters(2.0)));
    }

    #[test]
    fn test_square_corners_incompatible_units() {
        let origin = Point::new(Quantity::meters(1.0), 0.0);
        assert!(square_corners(&origin, Quantity::degrees(45.0)).is_err());
    }

    #[test]
    fn test_serde_tagged() {
        let line = Primitive::Line {
            first: Point::new(0.0, 0.0),
            last: Point::new(1.0, 0.0),
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains(r#""type":"Line""#));
        let restored: Primitive = serde_json::from_str(&json).unwrap();
        assert_eq!(line, restored);
    }
}
