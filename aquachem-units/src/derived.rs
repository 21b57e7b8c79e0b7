//! Derived quantity kinds with restricted unit sets
//!
//! A derived kind narrows a physical kind to the symbols that are physically
//! meaningful for a specific role: a gas headspace pressure is measured in
//! bar-scale units, a solution volume in liters or smaller. Construction
//! through a derived kind rejects anything outside the restricted set with
//! `InvalidUnitForKind`, whether the symbol belongs to the base kind or not.

use serde::{Serialize, Deserialize};

use crate::quantity::IntoValues;
use crate::registry::UNITS;
use crate::{Quantity, QuantityError, Unit, UnitKind};

/// Semantic subkinds with restricted unit symbol sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivedKind {
    /// Amount of dissolved substance (mol family)
    SubstanceAmount,
    /// Molar concentration of a solute (M family)
    MolarConcentration,
    /// Volume of a solution: liters or smaller
    SolutionVolume,
    /// Partial pressure of a gas: bar scale or smaller
    GasPressure,
    /// Henry's-law gas solubility (amount per volume per pressure)
    GasSolubility,
}

impl DerivedKind {
    /// The physical kind this derived kind narrows
    pub fn base_kind(&self) -> UnitKind {
        match self {
            DerivedKind::SubstanceAmount => UnitKind::Amount,
            DerivedKind::MolarConcentration => UnitKind::Molarity,
            DerivedKind::SolutionVolume => UnitKind::Volume,
            DerivedKind::GasPressure => UnitKind::Pressure,
            DerivedKind::GasSolubility => UnitKind::Solubility,
        }
    }

    /// Name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            DerivedKind::SubstanceAmount => "substance amount",
            DerivedKind::MolarConcentration => "molar concentration",
            DerivedKind::SolutionVolume => "solution volume",
            DerivedKind::GasPressure => "gas pressure",
            DerivedKind::GasSolubility => "gas solubility",
        }
    }

    /// Human-readable description of the allowed symbol set
    pub fn allowed(&self) -> &'static str {
        match self {
            DerivedKind::SubstanceAmount => "mol family",
            DerivedKind::MolarConcentration => "M family",
            DerivedKind::SolutionVolume => "L or smaller",
            DerivedKind::GasPressure => "bar/atm scale or smaller",
            DerivedKind::GasSolubility => "M/bar family",
        }
    }

    /// Whether a resolved unit is in the restricted set
    pub fn admits(&self, unit: &Unit) -> bool {
        if unit.kind != self.base_kind() {
            return false;
        }
        match self {
            // Kiloliter tanks and kilobar headspaces are not bench chemistry
            DerivedKind::SolutionVolume => unit.to_base_factor <= 1.0,
            DerivedKind::GasPressure => unit.to_base_factor <= 1.01325,
            _ => true,
        }
    }

    /// Construct a quantity whose unit must belong to this derived kind
    pub fn quantity<V: IntoValues>(
        &self,
        values: V,
        symbol: &str,
    ) -> Result<Quantity, QuantityError> {
        let unit = UNITS.lookup(symbol)?;
        if !self.admits(unit) {
            return Err(QuantityError::InvalidUnitForKind {
                derived: self.name(),
                symbol: symbol.to_string(),
                allowed: self.allowed(),
            });
        }
        Ok(Quantity::with_unit(values, unit.clone()))
    }
}
