#![warn(missing_docs)]

//! drafter — script-generating CAD modeling in Rust.
//!
//! Build a tree of sketches, extrusions and groups, then export it as a
//! SketchUp Ruby script that recreates the geometry when run inside
//! SketchUp.
//!
//! # Example
//!
//! ```
//! use drafter::{model_script, Extrusion, Model, Point, Quantity, Sketch};
//!
//! let mut profile = Sketch::new();
//! profile.add_rectangle(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
//!
//! let mut model = Model::new();
//! model.add_extrusion(Extrusion::new(Quantity::millimeters(5.0), profile));
//!
//! let script = model_script(&model).unwrap();
//! assert!(script.starts_with("model = Sketchup.active_model"));
//! assert!(script.contains(".pushpull(-5.mm)"));
//! ```

pub use drafter_geom::{
    rectangle_corners, square_corners, Axis, Basis, Point, Primitive, Transformation, Translation,
};
pub use drafter_model::{
    Document, Extrusion, Group, Model, ModelElement, Sketch, SketchElement, SketchGroup,
};
pub use drafter_sketchup::{
    model_script, sketch_script, write_model, write_sketch, ExportError,
};
pub use drafter_units::{Dimension, Quantity, Unit, UnitError};
