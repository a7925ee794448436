//! Serialization of single primitives to SketchUp Ruby calls.

use drafter_geom::{rectangle_corners, square_corners, Axis, Point, Primitive, Transformation};

use crate::units::{number_literal, quantity_literal};
use crate::ExportError;

/// Render `primitive` as one line of SketchUp Ruby against the entity
/// collection named by `collection`.
///
/// A non-identity `ambient` transformation switches point rendering from
/// bare coordinate lists to transformed `Geom::Point3d` expressions.
pub(crate) fn primitive_line(
    primitive: &Primitive,
    collection: &str,
    ambient: Option<&Transformation>,
) -> Result<String, ExportError> {
    match primitive {
        Primitive::Line { first, last } | Primitive::Edge { first, last } => Ok(format!(
            "{collection}.add_line({}, {})",
            point_literal(first, ambient)?,
            point_literal(last, ambient)?
        )),
        // SketchUp's add_circle returns edges; the generated face must be
        // resolved from them in a second step, folded into one callable.
        Primitive::Circle { center, radius } => Ok(format!(
            "lambda{{edges = {collection}.add_circle({}, [0, 0, 1], {}); edges[0].find_faces; edges[0].faces[0]}}.call",
            point_literal(center, ambient)?,
            quantity_literal(radius)?
        )),
        Primitive::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => Ok(format!(
            "{collection}.add_arc({}, [1, 0, 0], [0, 0, 1], {}, {}, {})",
            point_literal(center, ambient)?,
            quantity_literal(radius)?,
            quantity_literal(start_angle)?,
            quantity_literal(end_angle)?
        )),
        Primitive::Rectangle { first, last } => {
            face_line(collection, &rectangle_corners(first, last), ambient)
        }
        Primitive::Square { origin, side } => {
            face_line(collection, &square_corners(origin, *side)?, ambient)
        }
        Primitive::Triangle { a, b, c } => face_line(collection, &[*a, *b, *c], ambient),
        Primitive::Polygon { vertices } => {
            face_line(collection, drop_closing_vertex(vertices), ambient)
        }
        Primitive::Polyline { vertices } => {
            if vertices.len() < 2 {
                return Err(ExportError::DegeneratePolyline(vertices.len()));
            }
            if is_closed(vertices) {
                face_line(collection, drop_closing_vertex(vertices), ambient)
            } else {
                curve_line(collection, vertices, ambient)
            }
        }
        Primitive::Path { vertices } => {
            if vertices.len() < 2 {
                return Err(ExportError::DegeneratePolyline(vertices.len()));
            }
            curve_line(collection, vertices, ambient)
        }
    }
}

/// Render a transformation as a `Geom::Transformation.new` literal with
/// origin, x-axis and y-axis arguments.
pub(crate) fn transformation_literal(
    transformation: &Transformation,
) -> Result<String, ExportError> {
    let origin = match &transformation.translation {
        Some(t) => format!(
            "[{}, {}, {}]",
            quantity_literal(&t.x)?,
            quantity_literal(&t.y)?,
            quantity_literal(&t.z)?
        ),
        None => "[0, 0, 0]".to_string(),
    };
    let (x_axis, y_axis) = match &transformation.rotation {
        Some(basis) => (axis_literal(&basis.x_axis), axis_literal(&basis.y_axis)),
        None => (axis_literal(&Axis::X), axis_literal(&Axis::Y)),
    };
    Ok(format!(
        "Geom::Transformation.new({origin}, {x_axis}, {y_axis})"
    ))
}

fn axis_literal(axis: &Axis) -> String {
    format!(
        "[{}, {}, {}]",
        number_literal(axis.x),
        number_literal(axis.y),
        number_literal(axis.z)
    )
}

fn point_literal(point: &Point, ambient: Option<&Transformation>) -> Result<String, ExportError> {
    let x = quantity_literal(&point.x)?;
    let y = quantity_literal(&point.y)?;
    match ambient {
        None => Ok(format!("[{x}, {y}]")),
        Some(t) => Ok(format!(
            "Geom::Point3d.new({x}, {y}).transform({})",
            transformation_literal(t)?
        )),
    }
}

fn face_line(
    collection: &str,
    points: &[Point],
    ambient: Option<&Transformation>,
) -> Result<String, ExportError> {
    Ok(format!(
        "{collection}.add_face({})",
        point_list(points, ambient)?
    ))
}

fn curve_line(
    collection: &str,
    points: &[Point],
    ambient: Option<&Transformation>,
) -> Result<String, ExportError> {
    Ok(format!(
        "{collection}.add_curve({})",
        point_list(points, ambient)?
    ))
}

fn point_list(points: &[Point], ambient: Option<&Transformation>) -> Result<String, ExportError> {
    let rendered: Vec<String> = points
        .iter()
        .map(|p| point_literal(p, ambient))
        .collect::<Result<_, _>>()?;
    Ok(rendered.join(", "))
}

fn is_closed(vertices: &[Point]) -> bool {
    vertices.len() >= 4 && vertices.first() == vertices.last()
}

fn drop_closing_vertex(vertices: &[Point]) -> &[Point] {
    if vertices.len() >= 2 && vertices.first() == vertices.last() {
        &vertices[..vertices.len() - 1]
    } else {
        vertices
    }
}
