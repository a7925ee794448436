//! Canonical unit names translated to SketchUp numeric suffixes.

use drafter_units::{Quantity, Unit};

use crate::ExportError;

/// The SketchUp suffix token for `unit`, e.g. `Unit::Centimeter` → `"cm"`.
///
/// Units outside SketchUp's vocabulary are a hard failure, never an
/// approximation.
pub(crate) fn script_unit(unit: Unit) -> Result<&'static str, ExportError> {
    match unit {
        Unit::Kilometer => Ok("km"),
        Unit::Meter => Ok("m"),
        Unit::Centimeter => Ok("cm"),
        Unit::Millimeter => Ok("mm"),
        Unit::Mile => Ok("mile"),
        Unit::Yard => Ok("yard"),
        Unit::Feet => Ok("feet"),
        Unit::Inch => Ok("inch"),
        Unit::Radian => Ok("radians"),
        Unit::Degree => Ok("degrees"),
        Unit::Micrometer | Unit::Gradian => Err(ExportError::UnsupportedUnit(unit)),
    }
}

pub(crate) fn number_literal(value: f64) -> String {
    format!("{value}")
}

/// Render a quantity as a Ruby literal: a bare number when plain, the
/// dot-suffix form (`5.cm`) when dimensioned.
pub(crate) fn quantity_literal(quantity: &Quantity) -> Result<String, ExportError> {
    match quantity.unit() {
        None => Ok(number_literal(quantity.magnitude())),
        Some(unit) => Ok(format!(
            "{}.{}",
            number_literal(quantity.magnitude()),
            script_unit(unit)?
        )),
    }
}
