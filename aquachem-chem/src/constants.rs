//! External constants tables
//!
//! Gas solubility constants are injectable configuration: every calculation
//! function takes a `&ConstantsTable`, and `default_constants()` provides the
//! embedded default. The embedded JSON is part of the crate, so a parse
//! failure there is a library bug, not a runtime condition.

use std::sync::LazyLock;
use serde::{Serialize, Deserialize};

use crate::ChemError;

static DEFAULT_CONSTANTS: LazyLock<ConstantsTable> = LazyLock::new(|| {
    const DEFAULT_GAS_CONSTANTS: &str = include_str!("../resources/gas_constants.json");
    ConstantsTable::from_json(DEFAULT_GAS_CONSTANTS)
        .expect("Failed to parse embedded gas constants. This is a library bug.")
});

/// The embedded default constants table
pub fn default_constants() -> &'static ConstantsTable {
    &DEFAULT_CONSTANTS
}

/// Henry's-law constants for one gas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasConstants {
    /// Gas name, matched case-insensitively ("CO2", "O2", ...)
    pub name: String,
    /// Solubility at the reference temperature, in M/bar
    pub henry_solubility: f64,
    /// Van 't Hoff slope -d(ln H)/d(1/T), in K
    pub vant_hoff_slope: f64,
    /// Reference temperature, in K
    pub reference_temperature: f64,
}

impl GasConstants {
    /// Henry's-law solubility at temperature `t_kelvin`, in M/bar:
    /// H(T) = H0 * exp(slope * (1/T - 1/T0))
    pub fn solubility_at(&self, t_kelvin: f64) -> f64 {
        self.henry_solubility
            * (self.vant_hoff_slope * (1.0 / t_kelvin - 1.0 / self.reference_temperature)).exp()
    }
}

#[derive(Debug, Deserialize)]
struct ConstantsFile {
    gases: Vec<GasConstants>,
}

/// A lookup table of gas constants
#[derive(Debug, Clone, Default)]
pub struct ConstantsTable {
    gases: Vec<GasConstants>,
}

impl ConstantsTable {
    pub fn new(gases: Vec<GasConstants>) -> Self {
        ConstantsTable { gases }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: ConstantsFile = serde_json::from_str(json)?;
        Ok(ConstantsTable { gases: file.gases })
    }

    pub fn gases(&self) -> &[GasConstants] {
        &self.gases
    }

    /// Find the single entry for a gas. Zero matches and multiple matches
    /// are both errors; a typo must never silently fall through.
    pub fn lookup(&self, gas: &str) -> Result<&GasConstants, ChemError> {
        let matches: Vec<&GasConstants> = self
            .gases
            .iter()
            .filter(|g| g.name.eq_ignore_ascii_case(gas))
            .collect();
        match matches.len() {
            0 => Err(ChemError::MissingConstants { gas: gas.to_string() }),
            1 => Ok(matches[0]),
            n => Err(ChemError::AmbiguousConstants {
                gas: gas.to_string(),
                count: n,
            }),
        }
    }
}

/// Carbonate system dissociation constants (freshwater, 25 °C defaults)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonateSystem {
    /// pK of H2CO3* <-> HCO3- + H+
    pub pk1: f64,
    /// pK of HCO3- <-> CO3-- + H+
    pub pk2: f64,
    /// pK of water self-ionization
    pub pkw: f64,
}

impl Default for CarbonateSystem {
    fn default() -> Self {
        CarbonateSystem {
            pk1: 6.35,
            pk2: 10.33,
            pkw: 14.0,
        }
    }
}

impl CarbonateSystem {
    pub fn k1(&self) -> f64 {
        10f64.powf(-self.pk1)
    }

    pub fn k2(&self) -> f64 {
        10f64.powf(-self.pk2)
    }

    pub fn kw(&self) -> f64 {
        10f64.powf(-self.pkw)
    }
}
