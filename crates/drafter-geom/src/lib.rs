#![warn(missing_docs)]

//! Sketch-plane geometry for drafter.
//!
//! Defines the primitive shapes a sketch can hold (lines, circles, arcs,
//! faces, curves) and the spatial [`Transformation`] containers carry.
//! Coordinates are [`Quantity`](drafter_units::Quantity) values, so a point
//! can mix plain numbers and dimensioned lengths.
//!
//! # Example
//!
//! ```
//! use drafter_geom::{Point, Primitive, Transformation};
//!
//! let line = Primitive::Line {
//!     first: Point::new(0.0, 0.0),
//!     last: Point::new(1.0, 0.0),
//! };
//! assert!(Transformation::default().is_identity());
//! # let _ = line;
//! ```

mod point;
mod primitive;
mod transform;

pub use point::Point;
pub use primitive::{rectangle_corners, square_corners, Primitive};
pub use transform::{Axis, Basis, Transformation, Translation};
