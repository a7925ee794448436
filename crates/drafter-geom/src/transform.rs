//! Spatial transformations carried by containers.

use drafter_units::Quantity;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

const TOL: f64 = 1e-9;

/// A plain (unitless) 3-component direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Axis {
    /// The +X unit axis.
    pub const X: Axis = Axis {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// The +Y unit axis.
    pub const Y: Axis = Axis {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// The +Z unit axis.
    pub const Z: Axis = Axis {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Create a new axis vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn to_na(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    fn from_na(v: Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// A rotation expressed as a pair of orthogonal basis vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    /// Image of the +X axis.
    pub x_axis: Axis,
    /// Image of the +Y axis.
    pub y_axis: Axis,
}

impl Basis {
    /// The standard (identity) basis.
    pub fn standard() -> Self {
        Self {
            x_axis: Axis::X,
            y_axis: Axis::Y,
        }
    }

    /// The basis of a rotation about the +Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let rot = nalgebra::Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
        Self {
            x_axis: Axis::from_na(rot * Vector3::x()),
            y_axis: Axis::from_na(rot * Vector3::y()),
        }
    }

    /// True when this basis is exactly the standard basis.
    pub fn is_standard(&self) -> bool {
        self.x_axis == Axis::X && self.y_axis == Axis::Y
    }

    /// True when both axes are unit length and mutually perpendicular.
    pub fn is_orthonormal(&self) -> bool {
        let x = self.x_axis.to_na();
        let y = self.y_axis.to_na();
        (x.norm() - 1.0).abs() < TOL && (y.norm() - 1.0).abs() < TOL && x.dot(&y).abs() < TOL
    }
}

/// A translation offset with quantity coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    /// X offset.
    pub x: Quantity,
    /// Y offset.
    pub y: Quantity,
    /// Z offset.
    pub z: Quantity,
}

impl Translation {
    /// Create a new translation.
    pub fn new(x: impl Into<Quantity>, y: impl Into<Quantity>, z: impl Into<Quantity>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// True when all three offsets are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

/// Placement of a container: optional translation plus optional rotation.
///
/// A transformation with no translation and no rotation (or with a zero
/// translation and the standard basis) is the identity and must never
/// produce a wrapping or instancing step during serialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transformation {
    /// Translation offset, if any.
    pub translation: Option<Translation>,
    /// Rotation basis, if any.
    pub rotation: Option<Basis>,
}

impl Transformation {
    /// The identity transformation.
    pub fn identity() -> Self {
        Self::default()
    }

    /// A pure translation to `(x, y, z)`.
    pub fn from_origin(
        x: impl Into<Quantity>,
        y: impl Into<Quantity>,
        z: impl Into<Quantity>,
    ) -> Self {
        Self {
            translation: Some(Translation::new(x, y, z)),
            rotation: None,
        }
    }

    /// A pure rotation by `basis`.
    pub fn from_rotation(basis: Basis) -> Self {
        Self {
            translation: None,
            rotation: Some(basis),
        }
    }

    /// This transformation with its rotation replaced by `basis`.
    pub fn with_rotation(mut self, basis: Basis) -> Self {
        self.rotation = Some(basis);
        self
    }

    /// True when this transformation moves nothing.
    pub fn is_identity(&self) -> bool {
        self.translation.as_ref().map_or(true, |t| t.is_zero())
            && self.rotation.as_ref().map_or(true, |b| b.is_standard())
    }
}
