//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::{QuantityError, UnitKind};

/// A recognized unit: a symbol, its physical kind, and the linear map to the
/// kind's base unit (`value_in_base = value * factor + offset`).
///
/// The offset is nonzero only for temperature units; every other conversion
/// is a pure metric rescale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit symbol (e.g., "mM", "bar", "K")
    pub symbol: String,
    /// The physical kind this unit measures
    pub kind: UnitKind,
    /// Factor to convert to the kind's base unit
    pub to_base_factor: f64,
    /// Affine offset, used only by temperature units
    pub to_base_offset: f64,
}

impl Unit {
    /// Create a unit with proportional conversion (no offset)
    pub fn new(symbol: &str, kind: UnitKind, to_base_factor: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            kind,
            to_base_factor,
            to_base_offset: 0.0,
        }
    }

    /// Create a unit with an affine offset (temperature scales)
    pub fn with_offset(symbol: &str, kind: UnitKind, to_base_factor: f64, to_base_offset: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            kind,
            to_base_factor,
            to_base_offset,
        }
    }

    /// The base unit of this unit's kind
    pub fn base(&self) -> Unit {
        Unit::new(self.kind.base_symbol(), self.kind, 1.0)
    }

    /// Whether this is the base unit of its kind
    pub fn is_base(&self) -> bool {
        self.to_base_factor == 1.0 && self.to_base_offset == 0.0
    }

    /// Whether two units measure the same kind (and can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.kind == other.kind
    }

    /// Convert a value from this unit to the kind's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.to_base_factor + self.to_base_offset
    }

    /// Convert a value from the kind's base unit to this unit
    pub fn from_base(&self, base_value: f64) -> f64 {
        (base_value - self.to_base_offset) / self.to_base_factor
    }

    /// Convert a value from this unit to another unit of the same kind
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, QuantityError> {
        if !self.is_compatible(target) {
            return Err(QuantityError::incompatible(
                "convert",
                &self.symbol,
                self.kind,
                &target.symbol,
                target.kind,
            ));
        }
        Ok(target.from_base(self.to_base(value)))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
