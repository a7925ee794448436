#![warn(missing_docs)]

//! SketchUp Ruby script generation for drafter model trees.
//!
//! Walks a [`Model`] or [`Sketch`] read-only and emits a Ruby script that,
//! executed inside SketchUp, recreates the geometry. Containers carrying a
//! non-identity transformation are hoisted into named component definitions
//! and referenced by `add_instance` calls; structurally identical containers
//! share one definition.
//!
//! # Example
//!
//! ```
//! use drafter_geom::Point;
//! use drafter_model::{Extrusion, Model, Sketch};
//! use drafter_sketchup::model_script;
//!
//! let mut sketch = Sketch::new();
//! sketch.add_rectangle(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
//!
//! let mut model = Model::new();
//! model.add_extrusion(Extrusion::new(5.0, sketch));
//!
//! let script = model_script(&model).unwrap();
//! assert!(script.contains("pushpull(-5)"));
//! ```

use std::path::Path;

use drafter_model::{Model, Sketch};
use drafter_units::{Unit, UnitError};
use thiserror::Error;

mod entity;
mod registry;
mod script;
mod traverse;
mod units;

use traverse::Exporter;

/// Errors from script generation.
///
/// Generation is all-or-nothing: any failure aborts the pass with no
/// partial script.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A quantity's unit has no SketchUp equivalent.
    #[error("no SketchUp equivalent for unit '{0}'")]
    UnsupportedUnit(Unit),

    /// A polyline or path with fewer than two vertices.
    #[error("polyline needs at least two vertices, got {0}")]
    DegeneratePolyline(usize),

    /// Container nesting exceeded the defensive depth bound.
    #[error("container nesting exceeds {0} levels")]
    NestingTooDeep(usize),

    /// Incompatible units combined while deriving geometry.
    #[error(transparent)]
    Units(#[from] UnitError),

    /// I/O failure while writing a script file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generate the script recreating `model`.
pub fn model_script(model: &Model) -> Result<String, ExportError> {
    let mut exporter = Exporter::new();
    let body = exporter.model_lines(model, "model.entities", 0)?;
    log::debug!(
        "model export: {} definitions, {} body lines",
        exporter.registry.len(),
        body.len()
    );
    Ok(script::assemble(&exporter.registry, &body))
}

/// Generate the script recreating `sketch`.
pub fn sketch_script(sketch: &Sketch) -> Result<String, ExportError> {
    let mut exporter = Exporter::new();
    let body = exporter.sketch_lines(sketch, "model.entities", None, 0)?;
    log::debug!(
        "sketch export: {} definitions, {} body lines",
        exporter.registry.len(),
        body.len()
    );
    Ok(script::assemble(&exporter.registry, &body))
}

/// Generate and write the script for `model` to `path`.
pub fn write_model(path: impl AsRef<Path>, model: &Model) -> Result<(), ExportError> {
    std::fs::write(path, model_script(model)?)?;
    Ok(())
}

/// Generate and write the script for `sketch` to `path`.
pub fn write_sketch(path: impl AsRef<Path>, sketch: &Sketch) -> Result<(), ExportError> {
    std::fs::write(path, sketch_script(sketch)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drafter_geom::{Point, Transformation};
    use drafter_model::Extrusion;
    use drafter_units::Quantity;

    const HEADER: &str = "model = Sketchup.active_model\n\
                          model.entities.clear!\n\
                          model.definitions.purge_unused\n";

    fn rectangle_sketch(width: f64, height: f64) -> Sketch {
        let mut sketch = Sketch::new();
        sketch.add_rectangle(Point::new(0.0, 0.0), Point::new(width, height));
        sketch
    }

    #[test]
    fn test_empty_model_is_header_only() {
        let mut model = Model::new();
        model.add_extrusion(Extrusion::new(5.0, Sketch::new()));
        assert_eq!(model_script(&model).unwrap(), HEADER);
    }

    #[test]
    fn test_empty_sketch_is_header_only() {
        assert_eq!(sketch_script(&Sketch::new()).unwrap(), HEADER);
    }

    #[test]
    fn test_rectangle_sketch_script() {
        let sketch = rectangle_sketch(1.0, 1.0);
        assert_eq!(
            sketch_script(&sketch).unwrap(),
            format!(
                "{HEADER}model.entities.add_face([0, 0], [1, 0], [1, 1], [0, 1])\n"
            )
        );
    }

    #[test]
    fn test_polygon_matches_rectangle() {
        let mut sketch = Sketch::new();
        sketch.add_polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ]);
        assert_eq!(
            sketch_script(&sketch).unwrap(),
            sketch_script(&rectangle_sketch(1.0, 1.0)).unwrap()
        );
    }

    #[test]
    fn test_simple_extrusion_script() {
        let mut model = Model::new();
        model.add_extrusion(Extrusion::new(5.0, rectangle_sketch(10.0, 20.0)));
        assert_eq!(
            model_script(&model).unwrap(),
            format!(
                "{HEADER}model.entities.add_face([0, 0], [10, 0], [10, 20], [0, 20]).pushpull(-5)\n"
            )
        );
    }

    #[test]
    fn test_extrusion_with_units_script() {
        let mut sketch = Sketch::new();
        sketch.add_rectangle_sized(Quantity::meters(1.0), 10.0);
        let mut model = Model::new();
        model.add_extrusion(Extrusion::new(Quantity::meters(5.0), sketch));
        assert_eq!(
            model_script(&model).unwrap(),
            format!(
                "{HEADER}model.entities.add_face([0, 0], [1.m, 0], [1.m, 10], [0, 10]).pushpull(-5.m)\n"
            )
        );
    }

    #[test]
    fn test_translated_extrusion_script() {
        let mut model = Model::new();
        model.add_extrusion(
            Extrusion::new(5.0, rectangle_sketch(10.0, 20.0))
                .with_transformation(Transformation::from_origin(1.0, 2.0, 3.0)),
        );

        let script = model_script(&model).unwrap();
        assert!(script.starts_with(HEADER));
        assert!(script.contains("lambda {|e|\n\te.entities.add_face([0, 0], [10, 0], [10, 20], [0, 20]).pushpull(-5)\n}.call(model.definitions.add('Extrusion_"));
        assert!(script.contains(
            "model.entities.add_instance(model.definitions['Extrusion_"
        ));
        assert!(script.contains(
            "Geom::Transformation.new([1, 2, 3], [1, 0, 0], [0, 1, 0])"
        ));
    }

    #[test]
    fn test_sibling_extrusions_share_a_definition() {
        let placed = |x: f64| {
            Extrusion::new(5.0, rectangle_sketch(10.0, 20.0))
                .with_transformation(Transformation::from_origin(x, 0.0, 0.0))
        };
        let mut model = Model::new();
        model.add_extrusion(placed(0.0));
        model.add_extrusion(placed(30.0));

        let script = model_script(&model).unwrap();
        assert_eq!(script.matches("model.definitions.add(").count(), 1);
        assert_eq!(script.matches("add_instance").count(), 2);
    }

    #[test]
    fn test_identical_trees_export_identically() {
        let build = || {
            let mut model = Model::new();
            model.add_extrusion(
                Extrusion::new(5.0, rectangle_sketch(10.0, 20.0))
                    .with_transformation(Transformation::from_origin(1.0, 2.0, 3.0)),
            );
            model
        };
        assert_eq!(
            model_script(&build()).unwrap(),
            model_script(&build()).unwrap()
        );
    }

    #[test]
    fn test_unsupported_unit_aborts_whole_pass() {
        let mut sketch = Sketch::new();
        sketch.add_line(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        sketch.add_circle(Point::new(0.0, 0.0), Quantity::micrometers(5.0));
        let result = sketch_script(&sketch);
        assert!(matches!(result, Err(ExportError::UnsupportedUnit(_))));
    }
}
