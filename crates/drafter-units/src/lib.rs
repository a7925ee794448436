#![warn(missing_docs)]

//! Dimensioned quantities for the drafter model tree.
//!
//! A [`Quantity`] is a plain `f64` magnitude optionally tagged with a
//! [`Unit`]. Arithmetic rescales compatible units and rejects mixed
//! dimensions; consumers that only need the raw data read
//! [`Quantity::magnitude`] and [`Quantity::unit`].
//!
//! # Example
//!
//! ```
//! use drafter_units::{Quantity, Unit};
//!
//! let a = Quantity::meters(1.0);
//! let b = Quantity::centimeters(50.0);
//! let sum = a.checked_add(b).unwrap();
//! assert_eq!(sum, Quantity::meters(1.5));
//! assert_eq!(sum.unit(), Some(Unit::Meter));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul, Neg};
use thiserror::Error;

/// Errors from quantity arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Two quantities of different dimensions were combined.
    #[error("incompatible units: {0} and {1}")]
    Incompatible(Unit, Unit),
}

/// The dimension a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Length units (base: meter).
    Length,
    /// Plane-angle units (base: radian).
    Angle,
}

/// Units understood by the quantity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// 1000 meters.
    Kilometer,
    /// The base length unit.
    Meter,
    /// 1/100 meter.
    Centimeter,
    /// 1/1000 meter.
    Millimeter,
    /// 1/1_000_000 meter.
    Micrometer,
    /// 1609.344 meters.
    Mile,
    /// 0.9144 meters.
    Yard,
    /// 0.3048 meters.
    Feet,
    /// 0.0254 meters.
    Inch,
    /// The base angle unit.
    Radian,
    /// π/180 radians.
    Degree,
    /// π/200 radians.
    Gradian,
}

impl Unit {
    /// The dimension this unit measures.
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Kilometer
            | Unit::Meter
            | Unit::Centimeter
            | Unit::Millimeter
            | Unit::Micrometer
            | Unit::Mile
            | Unit::Yard
            | Unit::Feet
            | Unit::Inch => Dimension::Length,
            Unit::Radian | Unit::Degree | Unit::Gradian => Dimension::Angle,
        }
    }

    /// Base units (meters or radians) per one of this unit.
    pub fn base_factor(&self) -> f64 {
        match self {
            Unit::Kilometer => 1000.0,
            Unit::Meter => 1.0,
            Unit::Centimeter => 0.01,
            Unit::Millimeter => 0.001,
            Unit::Micrometer => 1e-6,
            Unit::Mile => 1609.344,
            Unit::Yard => 0.9144,
            Unit::Feet => 0.3048,
            Unit::Inch => 0.0254,
            Unit::Radian => 1.0,
            Unit::Degree => std::f64::consts::PI / 180.0,
            Unit::Gradian => std::f64::consts::PI / 200.0,
        }
    }

    /// Canonical lowercase name, e.g. `"centimeter"`.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Kilometer => "kilometer",
            Unit::Meter => "meter",
            Unit::Centimeter => "centimeter",
            Unit::Millimeter => "millimeter",
            Unit::Micrometer => "micrometer",
            Unit::Mile => "mile",
            Unit::Yard => "yard",
            Unit::Feet => "feet",
            Unit::Inch => "inch",
            Unit::Radian => "radian",
            Unit::Degree => "degree",
            Unit::Gradian => "gradian",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric magnitude with an optional unit tag.
///
/// A `Quantity` with no unit is a plain number; arithmetic against a
/// dimensioned quantity adopts the dimensioned side's unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    unit: Option<Unit>,
}

impl Quantity {
    /// A magnitude tagged with `unit`.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value,
            unit: Some(unit),
        }
    }

    /// A plain, unitless magnitude.
    pub fn plain(value: f64) -> Self {
        Self { value, unit: None }
    }

    /// Kilometers.
    pub fn kilometers(value: f64) -> Self {
        Self::new(value, Unit::Kilometer)
    }

    /// Meters.
    pub fn meters(value: f64) -> Self {
        Self::new(value, Unit::Meter)
    }

    /// Centimeters.
    pub fn centimeters(value: f64) -> Self {
        Self::new(value, Unit::Centimeter)
    }

    /// Millimeters.
    pub fn millimeters(value: f64) -> Self {
        Self::new(value, Unit::Millimeter)
    }

    /// Micrometers.
    pub fn micrometers(value: f64) -> Self {
        Self::new(value, Unit::Micrometer)
    }

    /// Miles.
    pub fn miles(value: f64) -> Self {
        Self::new(value, Unit::Mile)
    }

    /// Yards.
    pub fn yards(value: f64) -> Self {
        Self::new(value, Unit::Yard)
    }

    /// Feet.
    pub fn feet(value: f64) -> Self {
        Self::new(value, Unit::Feet)
    }

    /// Inches.
    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::Inch)
    }

    /// Radians.
    pub fn radians(value: f64) -> Self {
        Self::new(value, Unit::Radian)
    }

    /// Degrees.
    pub fn degrees(value: f64) -> Self {
        Self::new(value, Unit::Degree)
    }

    /// Gradians.
    pub fn gradians(value: f64) -> Self {
        Self::new(value, Unit::Gradian)
    }

    /// The numeric magnitude, in this quantity's own unit.
    pub fn magnitude(&self) -> f64 {
        self.value
    }

    /// The unit tag, if any.
    pub fn unit(&self) -> Option<Unit> {
        self.unit
    }

    /// The dimension, if this quantity is dimensioned.
    pub fn dimension(&self) -> Option<Dimension> {
        self.unit.map(|u| u.dimension())
    }

    /// Magnitude converted to base units (meters/radians), or the raw
    /// magnitude when plain.
    pub fn to_base(&self) -> f64 {
        match self.unit {
            Some(u) => self.value * u.base_factor(),
            None => self.value,
        }
    }

    /// Rescale into `unit`.
    ///
    /// A plain quantity adopts `unit` without rescaling.
    pub fn convert_to(&self, unit: Unit) -> Result<Quantity, UnitError> {
        match self.unit {
            None => Ok(Quantity::new(self.value, unit)),
            Some(u) if u.dimension() == unit.dimension() => Ok(Quantity::new(
                self.value * u.base_factor() / unit.base_factor(),
                unit,
            )),
            Some(u) => Err(UnitError::Incompatible(u, unit)),
        }
    }

    /// Add, rescaling `rhs` into this quantity's unit.
    pub fn checked_add(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        match (self.unit, rhs.unit) {
            (None, None) => Ok(Quantity::plain(self.value + rhs.value)),
            (Some(u), None) => Ok(Quantity::new(self.value + rhs.value, u)),
            (None, Some(u)) => Ok(Quantity::new(self.value + rhs.value, u)),
            (Some(a), Some(b)) if a.dimension() == b.dimension() => Ok(Quantity::new(
                self.value + rhs.value * b.base_factor() / a.base_factor(),
                a,
            )),
            (Some(a), Some(b)) => Err(UnitError::Incompatible(a, b)),
        }
    }

    /// Subtract, rescaling `rhs` into this quantity's unit.
    pub fn checked_sub(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        self.checked_add(-rhs)
    }

    /// True when the magnitude is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::plain(0.0)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::plain(value)
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        match (self.unit, other.unit) {
            (None, None) => self.value == other.value,
            (Some(a), Some(b)) => {
                a.dimension() == b.dimension() && self.to_base() == other.to_base()
            }
            _ => false,
        }
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity {
            value: self.value / rhs,
            unit: self.unit,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(u) => write!(f, "{} {}", self.value, u),
            None => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_factors() {
        assert_eq!(Quantity::kilometers(2.0).to_base(), 2000.0);
        assert_eq!(Quantity::centimeters(100.0).to_base(), 1.0);
        assert_eq!(Quantity::inches(1.0).to_base(), 0.0254);
        assert!((Quantity::degrees(180.0).to_base() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_checked_add_rescales() {
        let sum = Quantity::meters(1.0)
            .checked_add(Quantity::centimeters(50.0))
            .unwrap();
        assert_eq!(sum.magnitude(), 1.5);
        assert_eq!(sum.unit(), Some(Unit::Meter));
    }

    #[test]
    fn test_plain_adopts_unit() {
        let sum = Quantity::plain(3.0)
            .checked_add(Quantity::meters(2.0))
            .unwrap();
        assert_eq!(sum, Quantity::meters(5.0));
    }

    #[test]
    fn test_incompatible_dimensions() {
        let result = Quantity::meters(1.0).checked_add(Quantity::degrees(90.0));
        assert_eq!(
            result,
            Err(UnitError::Incompatible(Unit::Meter, Unit::Degree))
        );
    }

    #[test]
    fn test_dimension_aware_equality() {
        assert_eq!(Quantity::centimeters(100.0), Quantity::meters(1.0));
        assert_ne!(Quantity::plain(1.0), Quantity::meters(1.0));
        assert_ne!(Quantity::radians(1.0), Quantity::meters(1.0));
    }

    #[test]
    fn test_convert_to() {
        let q = Quantity::feet(1.0).convert_to(Unit::Inch).unwrap();
        assert!((q.magnitude() - 12.0).abs() < 1e-12);
        assert_eq!(q.unit(), Some(Unit::Inch));

        assert!(Quantity::feet(1.0).convert_to(Unit::Degree).is_err());
    }

    #[test]
    fn test_negation_keeps_unit() {
        let q = -Quantity::meters(5.0);
        assert_eq!(q.magnitude(), -5.0);
        assert_eq!(q.unit(), Some(Unit::Meter));
    }

    #[test]
    fn test_scalar_ops() {
        assert_eq!(Quantity::meters(2.0) * 3.0, Quantity::meters(6.0));
        assert_eq!(Quantity::meters(6.0) / 3.0, Quantity::meters(2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::centimeters(5.0).to_string(), "5 centimeter");
        assert_eq!(Quantity::plain(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_serde_roundtrip() {
        let q = Quantity::millimeters(3.5);
        let json = serde_json::to_string(&q).unwrap();
        let restored: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(q, restored);
    }
}
