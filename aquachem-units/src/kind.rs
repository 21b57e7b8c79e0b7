//! Physical quantity kinds
//!
//! Every unit belongs to exactly one `UnitKind`. The set of kinds is closed:
//! arithmetic between two kinds is only defined where this module says it is,
//! and everything else is rejected up front.

use std::fmt;
use serde::{Serialize, Deserialize};

/// The physical dimension a quantity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Amount of substance (base: mol)
    Amount,
    /// Molar concentration (base: M = mol/L)
    Molarity,
    /// Mass (base: g)
    Mass,
    /// Mass concentration (base: g/L)
    Density,
    /// Volume (base: L)
    Volume,
    /// Pressure (base: bar)
    Pressure,
    /// Gas solubility (base: M/bar)
    Solubility,
    /// Temperature (base: K)
    Temperature,
    /// Pure number (empty base symbol)
    Dimensionless,
}

impl UnitKind {
    /// The canonical base unit symbol for this kind
    pub fn base_symbol(&self) -> &'static str {
        match self {
            UnitKind::Amount => "mol",
            UnitKind::Molarity => "M",
            UnitKind::Mass => "g",
            UnitKind::Density => "g/L",
            UnitKind::Volume => "L",
            UnitKind::Pressure => "bar",
            UnitKind::Solubility => "M/bar",
            UnitKind::Temperature => "K",
            UnitKind::Dimensionless => "",
        }
    }

    /// Human-readable kind name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Amount => "amount",
            UnitKind::Molarity => "molarity",
            UnitKind::Mass => "mass",
            UnitKind::Density => "density",
            UnitKind::Volume => "volume",
            UnitKind::Pressure => "pressure",
            UnitKind::Solubility => "solubility",
            UnitKind::Temperature => "temperature",
            UnitKind::Dimensionless => "dimensionless",
        }
    }

    /// Whether metric prefixes (mM, µmol, kbar, ...) apply to this kind.
    /// Temperature and pure numbers never rescale.
    pub fn is_scalable(&self) -> bool {
        !matches!(self, UnitKind::Temperature | UnitKind::Dimensionless)
    }

    /// Result kind of `self * other`, if the product is defined.
    ///
    /// The table is closed. Multiplying by a dimensionless quantity preserves
    /// the kind; temperature participates in no product.
    pub fn multiply(&self, other: &UnitKind) -> Option<UnitKind> {
        use UnitKind::*;
        match (self, other) {
            // Scaling an affine unit in place is meaningless (2 x 10 C != 20 C)
            (Temperature, _) | (_, Temperature) => None,
            (Dimensionless, k) | (k, Dimensionless) => Some(*k),
            (Molarity, Volume) | (Volume, Molarity) => Some(Amount),
            (Density, Volume) | (Volume, Density) => Some(Mass),
            (Solubility, Pressure) | (Pressure, Solubility) => Some(Molarity),
            _ => None,
        }
    }

    /// Result kind of `self / other`, if the quotient is defined.
    ///
    /// Dividing two quantities of the same kind yields a pure number.
    pub fn divide(&self, other: &UnitKind) -> Option<UnitKind> {
        use UnitKind::*;
        if self == other {
            return Some(Dimensionless);
        }
        match (self, other) {
            (Temperature, Dimensionless) => None,
            (k, Dimensionless) => Some(*k),
            (Amount, Volume) => Some(Molarity),
            (Amount, Molarity) => Some(Volume),
            (Mass, Volume) => Some(Density),
            (Mass, Density) => Some(Volume),
            (Molarity, Pressure) => Some(Solubility),
            (Molarity, Solubility) => Some(Pressure),
            _ => None,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_symbols() {
        assert_eq!(UnitKind::Molarity.base_symbol(), "M");
        assert_eq!(UnitKind::Solubility.base_symbol(), "M/bar");
        assert_eq!(UnitKind::Dimensionless.base_symbol(), "");
    }

    #[test]
    fn test_multiply_table() {
        assert_eq!(
            UnitKind::Molarity.multiply(&UnitKind::Volume),
            Some(UnitKind::Amount)
        );
        assert_eq!(
            UnitKind::Volume.multiply(&UnitKind::Molarity),
            Some(UnitKind::Amount)
        );
        assert_eq!(
            UnitKind::Solubility.multiply(&UnitKind::Pressure),
            Some(UnitKind::Molarity)
        );
        assert_eq!(UnitKind::Mass.multiply(&UnitKind::Mass), None);
        assert_eq!(UnitKind::Temperature.multiply(&UnitKind::Pressure), None);
    }

    #[test]
    fn test_divide_table() {
        assert_eq!(
            UnitKind::Amount.divide(&UnitKind::Volume),
            Some(UnitKind::Molarity)
        );
        assert_eq!(
            UnitKind::Amount.divide(&UnitKind::Molarity),
            Some(UnitKind::Volume)
        );
        assert_eq!(
            UnitKind::Molarity.divide(&UnitKind::Pressure),
            Some(UnitKind::Solubility)
        );
        // Same kind cancels to a pure number
        assert_eq!(
            UnitKind::Volume.divide(&UnitKind::Volume),
            Some(UnitKind::Dimensionless)
        );
        assert_eq!(UnitKind::Volume.divide(&UnitKind::Mass), None);
    }

    #[test]
    fn test_dimensionless_identity() {
        for kind in [UnitKind::Amount, UnitKind::Pressure, UnitKind::Volume] {
            assert_eq!(kind.multiply(&UnitKind::Dimensionless), Some(kind));
            assert_eq!(UnitKind::Dimensionless.multiply(&kind), Some(kind));
            assert_eq!(kind.divide(&UnitKind::Dimensionless), Some(kind));
        }
    }

    #[test]
    fn test_temperature_has_no_products() {
        // Affine units cannot be scaled in place, so temperature is outside
        // the dimensionless identity too
        assert_eq!(UnitKind::Temperature.multiply(&UnitKind::Dimensionless), None);
        assert_eq!(UnitKind::Dimensionless.multiply(&UnitKind::Temperature), None);
        assert_eq!(UnitKind::Temperature.divide(&UnitKind::Dimensionless), None);
        // Same-kind cancellation stays defined; it happens in Kelvin
        assert_eq!(
            UnitKind::Temperature.divide(&UnitKind::Temperature),
            Some(UnitKind::Dimensionless)
        );
    }

    #[test]
    fn test_scalable() {
        assert!(UnitKind::Molarity.is_scalable());
        assert!(!UnitKind::Temperature.is_scalable());
        assert!(!UnitKind::Dimensionless.is_scalable());
    }
}
