#![warn(missing_docs)]

//! The drafter container tree.
//!
//! Designs are built from [`Primitive`]s collected into [`Sketch`]es,
//! which [`Extrusion`]s push into solids, all organized under [`Group`]s
//! and a root [`Model`]. Containers are plain data: construction happens
//! through `add_*` methods, and serialization to a target dialect is the
//! job of an exporter crate walking the finished tree read-only.
//!
//! # Example
//!
//! ```
//! use drafter_model::{Extrusion, Model, Sketch};
//! use drafter_geom::Point;
//!
//! let mut sketch = Sketch::new();
//! sketch.add_rectangle(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
//!
//! let mut model = Model::new();
//! model.add_extrusion(Extrusion::new(5.0, sketch));
//! assert_eq!(model.elements.len(), 1);
//! ```

use drafter_geom::{Point, Primitive, Transformation};
use drafter_units::Quantity;
use serde::{Deserialize, Serialize};

mod document;

pub use document::Document;

/// One entry in a sketch: a primitive or a nested transformed group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "element")]
pub enum SketchElement {
    /// A leaf primitive.
    Primitive(Primitive),
    /// A nested group of sketch elements under a shared transformation.
    Group(SketchGroup),
}

/// An ordered collection of primitives and nested sketch groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sketch {
    /// Elements in declaration order.
    pub elements: Vec<SketchElement>,
}

impl Sketch {
    /// Create an empty sketch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive.
    pub fn push(&mut self, primitive: Primitive) {
        self.elements.push(SketchElement::Primitive(primitive));
    }

    /// Add a line segment.
    pub fn add_line(&mut self, first: Point, last: Point) {
        self.push(Primitive::Line { first, last });
    }

    /// Add a bare edge.
    pub fn add_edge(&mut self, first: Point, last: Point) {
        self.push(Primitive::Edge { first, last });
    }

    /// Add a circle.
    pub fn add_circle(&mut self, center: Point, radius: impl Into<Quantity>) {
        self.push(Primitive::Circle {
            center,
            radius: radius.into(),
        });
    }

    /// Add a circular arc. Angles are angular quantities.
    pub fn add_arc(
        &mut self,
        center: Point,
        radius: impl Into<Quantity>,
        start_angle: Quantity,
        end_angle: Quantity,
    ) {
        self.push(Primitive::Arc {
            center,
            radius: radius.into(),
            start_angle,
            end_angle,
        });
    }

    /// Add a rectangle spanning two opposite corners.
    pub fn add_rectangle(&mut self, first: Point, last: Point) {
        self.push(Primitive::Rectangle { first, last });
    }

    /// Add a rectangle of the given size with its near corner at the origin.
    pub fn add_rectangle_sized(
        &mut self,
        width: impl Into<Quantity>,
        height: impl Into<Quantity>,
    ) {
        self.push(Primitive::Rectangle {
            first: Point::new(0.0, 0.0),
            last: Point {
                x: width.into(),
                y: height.into(),
            },
        });
    }

    /// Add a square.
    pub fn add_square(&mut self, origin: Point, side: impl Into<Quantity>) {
        self.push(Primitive::Square {
            origin,
            side: side.into(),
        });
    }

    /// Add a triangle.
    pub fn add_triangle(&mut self, a: Point, b: Point, c: Point) {
        self.push(Primitive::Triangle { a, b, c });
    }

    /// Add a closed polygon.
    pub fn add_polygon(&mut self, vertices: Vec<Point>) {
        self.push(Primitive::Polygon { vertices });
    }

    /// Add a polyline.
    pub fn add_polyline(&mut self, vertices: Vec<Point>) {
        self.push(Primitive::Polyline { vertices });
    }

    /// Add an open edge path.
    pub fn add_path(&mut self, vertices: Vec<Point>) {
        self.push(Primitive::Path { vertices });
    }

    /// Append a nested sketch group.
    pub fn add_group(&mut self, group: SketchGroup) {
        self.elements.push(SketchElement::Group(group));
    }

    /// True when the sketch holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

/// A sketch nested under a shared transformation.
///
/// The group's transformation governs the placement of its direct
/// children, replacing any transformation in effect outside the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchGroup {
    /// The grouped sketch.
    pub sketch: Sketch,
    /// Placement of the group's contents.
    pub transformation: Option<Transformation>,
}

impl SketchGroup {
    /// Group an existing sketch with no transformation.
    pub fn new(sketch: Sketch) -> Self {
        Self {
            sketch,
            transformation: None,
        }
    }

    /// This group placed by `transformation`.
    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = Some(transformation);
        self
    }
}

/// A sketch pushed into a solid along its normal.
///
/// A positive length pushes in the sketch's positive normal direction
/// after the profile is traced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extrusion {
    /// Push distance.
    pub length: Quantity,
    /// The profile to trace.
    pub sketch: Sketch,
    /// Placement of the extrusion.
    pub transformation: Option<Transformation>,
}

impl Extrusion {
    /// Extrude `sketch` by `length`.
    pub fn new(length: impl Into<Quantity>, sketch: Sketch) -> Self {
        Self {
            length: length.into(),
            sketch,
            transformation: None,
        }
    }

    /// This extrusion placed by `transformation`.
    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = Some(transformation);
        self
    }
}

/// One entry in a model or group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "element")]
pub enum ModelElement {
    /// A nested sub-model.
    Model(Model),
    /// A nested group.
    Group(Group),
    /// An extrusion.
    Extrusion(Extrusion),
}

/// An ordered collection of model elements under a shared transformation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    /// Elements in declaration order.
    pub elements: Vec<ModelElement>,
    /// Placement of the group.
    pub transformation: Option<Transformation>,
}

impl Group {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// This group placed by `transformation`.
    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = Some(transformation);
        self
    }

    /// Append an element.
    pub fn push(&mut self, element: ModelElement) {
        self.elements.push(element);
    }

    /// Append an extrusion.
    pub fn add_extrusion(&mut self, extrusion: Extrusion) {
        self.push(ModelElement::Extrusion(extrusion));
    }

    /// Append a nested group.
    pub fn add_group(&mut self, group: Group) {
        self.push(ModelElement::Group(group));
    }

    /// Append a nested sub-model.
    pub fn add_model(&mut self, model: Model) {
        self.push(ModelElement::Model(model));
    }
}

/// The root container of a design.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    /// Elements in declaration order.
    pub elements: Vec<ModelElement>,
    /// Placement of the whole model.
    pub transformation: Option<Transformation>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// This model placed by `transformation`.
    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = Some(transformation);
        self
    }

    /// Append an element.
    pub fn push(&mut self, element: ModelElement) {
        self.elements.push(element);
    }

    /// Append an extrusion.
    pub fn add_extrusion(&mut self, extrusion: Extrusion) {
        self.push(ModelElement::Extrusion(extrusion));
    }

    /// Append a group.
    pub fn add_group(&mut self, group: Group) {
        self.push(ModelElement::Group(group));
    }

    /// Append a nested sub-model.
    pub fn add_model(&mut self, model: Model) {
        self.push(ModelElement::Model(model));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drafter_geom::Transformation;

    #[test]
    fn test_sketch_preserves_order() {
        let mut sketch = Sketch::new();
        sketch.add_line(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        sketch.add_circle(Point::new(0.0, 0.0), 2.0);
        sketch.add_rectangle(Point::new(0.0, 0.0), Point::new(1.0, 1.0));

        assert_eq!(sketch.len(), 3);
        assert!(matches!(
            sketch.elements[0],
            SketchElement::Primitive(Primitive::Line { .. })
        ));
        assert!(matches!(
            sketch.elements[1],
            SketchElement::Primitive(Primitive::Circle { .. })
        ));
        assert!(matches!(
            sketch.elements[2],
            SketchElement::Primitive(Primitive::Rectangle { .. })
        ));
    }

    #[test]
    fn test_model_preserves_order() {
        let mut model = Model::new();
        model.add_extrusion(Extrusion::new(5.0, Sketch::new()));
        model.add_group(Group::new());
        model.add_model(Model::new());

        assert!(matches!(model.elements[0], ModelElement::Extrusion(_)));
        assert!(matches!(model.elements[1], ModelElement::Group(_)));
        assert!(matches!(model.elements[2], ModelElement::Model(_)));
    }

    #[test]
    fn test_with_transformation() {
        let group = Group::new().with_transformation(Transformation::from_origin(1.0, 2.0, 3.0));
        assert!(group.transformation.is_some());
        assert!(!group.transformation.unwrap().is_identity());
    }

    #[test]
    fn test_sketch_group_wraps_sketch() {
        let mut inner = Sketch::new();
        inner.add_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let group = SketchGroup::new(inner.clone())
            .with_transformation(Transformation::from_origin(1.0, 2.0, 0.0));

        let mut outer = Sketch::new();
        outer.add_group(group);
        match &outer.elements[0] {
            SketchElement::Group(g) => assert_eq!(g.sketch, inner),
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_serde_tagged_elements() {
        let mut model = Model::new();
        model.add_extrusion(Extrusion::new(5.0, Sketch::new()));
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains(r#""element":"Extrusion""#));
        let restored: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(model, restored);
    }
}
