//! Ideal gas law and Henry's-law gas solubility
//!
//! Every function validates its quantity arguments first, extracts raw
//! numbers in fixed internal units (bar, K), computes elementwise, and wraps
//! the result back into an appropriately kinded quantity.

use aquachem_units::{Quantity, UnitKind};

use crate::helpers::{at, common_length};
use crate::{ChemError, ConstantsTable};

/// Ideal gas constant in L·bar/(mol·K)
pub const GAS_CONSTANT: f64 = 0.0831446261815324;

/// Molarity of an ideal gas, n/V = P / (R·T).
///
/// At 1 atm and 0 °C this is the familiar 1 mol per 22.4 L ≈ 0.0446 M.
pub fn calculate_ideal_gas_molarity(
    pressure: &Quantity,
    temperature: &Quantity,
) -> Result<Quantity, ChemError> {
    pressure.require_kind(UnitKind::Pressure, "calculate_ideal_gas_molarity(pressure)")?;
    temperature.require_kind(
        UnitKind::Temperature,
        "calculate_ideal_gas_molarity(temperature)",
    )?;

    let p = pressure.extract_value("bar")?;
    let t = temperature.extract_value("K")?;

    let n = common_length("calculate_ideal_gas_molarity", &[p.len(), t.len()])?;
    let values: Vec<f64> = (0..n)
        .map(|i| at(&p, i) / (GAS_CONSTANT * at(&t, i)))
        .collect();
    Ok(Quantity::new(values, "M")?)
}

/// Henry's-law solubility of a gas at a given temperature, in M/bar:
/// H(T) = H0 · exp(slope · (1/T − 1/T0)).
///
/// At the reference temperature this returns exactly the table's H0.
/// Unknown gases fail with `MissingConstants` naming the gas.
pub fn calculate_gas_solubility(
    gas: &str,
    temperature: &Quantity,
    constants: &ConstantsTable,
) -> Result<Quantity, ChemError> {
    temperature.require_kind(
        UnitKind::Temperature,
        "calculate_gas_solubility(temperature)",
    )?;
    let entry = constants.lookup(gas)?;

    let t = temperature.extract_value("K")?;
    let values: Vec<f64> = t.iter().map(|t| entry.solubility_at(*t)).collect();
    Ok(Quantity::new(values, "M/bar")?)
}

/// Equilibrium dissolved concentration of a gas under a headspace partial
/// pressure: solubility × pressure → molarity.
pub fn calculate_dissolved_gas_molarity(
    gas: &str,
    pressure: &Quantity,
    temperature: &Quantity,
    constants: &ConstantsTable,
) -> Result<Quantity, ChemError> {
    pressure.require_kind(
        UnitKind::Pressure,
        "calculate_dissolved_gas_molarity(pressure)",
    )?;
    let solubility = calculate_gas_solubility(gas, temperature, constants)?;
    Ok(solubility.mul(pressure)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_constants;
    use aquachem_units::quantity;

    #[test]
    fn test_ideal_gas_at_stp() {
        let p = quantity(1.0, "atm").unwrap();
        let t = quantity(0.0, "C").unwrap();
        let c = calculate_ideal_gas_molarity(&p, &t).unwrap();
        assert_eq!(c.kind(), UnitKind::Molarity);
        // 1 atm / (R * 273.15 K) = 0.04461 M, i.e. 22.4 L/mol
        assert!((c.values()[0] - 0.0446).abs() < 2e-4);
    }

    #[test]
    fn test_ideal_gas_at_one_bar() {
        let p = quantity(1.0, "bar").unwrap();
        let t = quantity(0.0, "C").unwrap();
        let c = calculate_ideal_gas_molarity(&p, &t).unwrap();
        let expected = 1.0 / (GAS_CONSTANT * 273.15);
        assert!((c.values()[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ideal_gas_elementwise() {
        let p = quantity(vec![0.5, 1.0, 2.0], "bar").unwrap();
        let t = quantity(25.0, "C").unwrap();
        let c = calculate_ideal_gas_molarity(&p, &t).unwrap();
        assert_eq!(c.len(), 3);
        assert!((c.values()[2] / c.values()[0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_ideal_gas_rejects_swapped_arguments() {
        let p = quantity(1.0, "bar").unwrap();
        let t = quantity(298.15, "K").unwrap();
        let err = calculate_ideal_gas_molarity(&t, &p).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("pressure"));
        assert!(msg.contains("temperature"));
    }

    #[test]
    fn test_solubility_at_reference_reproduces_h0() {
        let table = default_constants();
        let h0 = table.lookup("CO2").unwrap().henry_solubility;
        let t = quantity(298.15, "K").unwrap();
        let sol = calculate_gas_solubility("CO2", &t, table).unwrap();
        assert_eq!(sol.kind(), UnitKind::Solubility);
        assert_eq!(sol.values()[0], h0);
    }

    #[test]
    fn test_solubility_unknown_gas() {
        let t = quantity(25.0, "C").unwrap();
        let err = calculate_gas_solubility("unobtainium", &t, default_constants()).unwrap_err();
        assert_eq!(
            err,
            ChemError::MissingConstants { gas: "unobtainium".into() }
        );
    }

    #[test]
    fn test_dissolved_gas_molarity() {
        let t = quantity(25.0, "C").unwrap();
        let p = quantity(1.0, "bar").unwrap();
        let c = calculate_dissolved_gas_molarity("CO2", &p, &t, default_constants()).unwrap();
        assert_eq!(c.kind(), UnitKind::Molarity);
        // 0.033 M/bar * 1 bar at the reference temperature
        assert!((c.values()[0] - 0.033).abs() < 1e-10);
    }
}
