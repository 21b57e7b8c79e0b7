//! Aquachem - unit-aware aquatic carbonate chemistry
//!
//! Facade crate tying the workspace together:
//! - `aquachem-units`: kinds, units, registry, and vector quantities
//! - `aquachem-table`: tabular containers with quantity columns
//! - `aquachem-chem`: gas solubility, ideal gas law, carbonate speciation,
//!   and open/closed-system pH and alkalinity
//!
//! ```
//! use aquachem::{quantity, calculate_ideal_gas_molarity};
//!
//! let p = quantity(1.0, "atm").unwrap();
//! let t = quantity(0.0, "C").unwrap();
//! let m = calculate_ideal_gas_molarity(&p, &t).unwrap();
//! assert!((m.values()[0] - 0.0446).abs() < 1e-3);
//! ```

pub use aquachem_units::{
    quantity, DerivedKind, IntoValues, Quantity, QuantityError, Unit, UnitKind, UnitRegistry,
    METRIC_PREFIXES, UNITS,
};

pub use aquachem_table::{Aggregate, Column, Table, TableError};

pub use aquachem_chem::{
    bisect, calculate_carbonate_speciation, calculate_closed_system_alkalinity,
    calculate_closed_system_ph, calculate_closed_system_tic, calculate_dissolved_gas_molarity,
    calculate_gas_solubility, calculate_ideal_gas_molarity, calculate_open_system_alkalinity,
    calculate_open_system_ph, default_constants, CarbonateSpeciation, CarbonateSystem, ChemError,
    ConstantsTable, GasConstants, SolverOptions, GAS_CONSTANT,
};

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Gas laws ==========

    #[test]
    fn ideal_gas_at_stp() {
        // 1 mol of ideal gas occupies 22.4 L at 1 atm and 0 C
        let p = quantity(1.0, "atm").unwrap();
        let t = quantity(0.0, "C").unwrap();
        let m = calculate_ideal_gas_molarity(&p, &t).unwrap();
        assert!((m.values()[0] - 1.0 / 22.414).abs() < 1e-4);

        // same state expressed in base units gives the same answer
        let p2 = quantity(1.01325, "bar").unwrap();
        let t2 = quantity(273.15, "K").unwrap();
        let m2 = calculate_ideal_gas_molarity(&p2, &t2).unwrap();
        assert!((m.values()[0] - m2.values()[0]).abs() < 1e-12);
    }

    #[test]
    fn henry_reproduces_reference_solubility() {
        let constants = default_constants();
        let co2 = constants.lookup("CO2").unwrap();
        let t = quantity(co2.reference_temperature, "K").unwrap();
        let s = calculate_gas_solubility("CO2", &t, constants).unwrap();
        assert_eq!(s.values()[0], co2.henry_solubility);
        assert_eq!(s.unit().symbol, "M/bar");
    }

    #[test]
    fn dissolved_co2_under_ambient_air() {
        let constants = default_constants();
        let p = quantity(400e-6, "bar").unwrap();
        let t = quantity(25.0, "C").unwrap();
        let c = calculate_dissolved_gas_molarity("CO2", &p, &t, constants).unwrap();
        assert!(c.is_molarity());
        // 0.033 M/bar * 400 ubar ~ 13 uM
        assert!((c.values()[0] - 0.033 * 400e-6).abs() < 1e-9);
    }

    #[test]
    fn unknown_gas_is_rejected() {
        let constants = default_constants();
        let t = quantity(298.15, "K").unwrap();
        let err = calculate_gas_solubility("unobtainium", &t, constants).unwrap_err();
        assert!(matches!(err, ChemError::MissingConstants { .. }));
    }

    // ========== Dimensional guards ==========

    #[test]
    fn adding_molarity_and_pressure_fails() {
        let a = quantity(1.0, "mM").unwrap();
        let b = quantity(1.0, "bar").unwrap();
        let err = a.add(&b).unwrap_err();
        assert!(matches!(err, QuantityError::IncompatibleUnit { .. }));
    }

    #[test]
    fn derived_kind_rejects_units_outside_its_set() {
        let err = DerivedKind::GasPressure.quantity(1.0, "K").unwrap_err();
        assert!(matches!(err, QuantityError::InvalidUnitForKind { .. }));
    }

    #[test]
    fn chem_functions_check_argument_kinds() {
        let not_pressure = quantity(1.0, "mM").unwrap();
        let t = quantity(298.15, "K").unwrap();
        let err = calculate_ideal_gas_molarity(&not_pressure, &t).unwrap_err();
        assert!(matches!(
            err,
            ChemError::Quantity(QuantityError::WrongQuantityKind { .. })
        ));
    }

    // ========== Conversions ==========

    #[test]
    fn conversion_round_trip_preserves_values() {
        let q = quantity(vec![1.5, 0.25], "mM").unwrap();
        let back = q.convert_to("M").unwrap().convert_to("mM").unwrap();
        for (a, b) in q.values().iter().zip(back.values()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn celsius_is_affine() {
        let freezing = quantity(0.0, "C").unwrap();
        let k = freezing.convert_to("K").unwrap();
        assert!((k.values()[0] - 273.15).abs() < 1e-12);
    }

    #[test]
    fn auto_scale_is_idempotent() {
        let q = quantity(0.0025, "M").unwrap();
        let once = q.auto_scale();
        assert_eq!(once.unit().symbol, "mM");
        let twice = once.auto_scale();
        assert_eq!(once, twice);
    }

    // ========== Tables ==========

    #[test]
    fn quantity_column_aggregates_in_its_unit() {
        let dic = quantity(vec![1.0, 2.0, 3.0], "mM").unwrap();
        let table = Table::new()
            .with_column("site", Column::Text(vec!["a".into(), "b".into(), "c".into()]))
            .unwrap()
            .with_column("DIC", Column::Quantity(dic))
            .unwrap();

        let total = table.aggregate("DIC", Aggregate::Sum, false).unwrap();
        assert_eq!(total.unit().symbol, "mM");
        assert!((total.values()[0] - 6.0).abs() < 1e-12);
    }

    // ========== Carbonate system ==========

    #[test]
    fn closed_system_ph_round_trip() {
        let sys = CarbonateSystem::default();
        let options = SolverOptions::default();

        let tic = quantity(2e-3, "M").unwrap();
        let ph = quantity(8.1, "pH").unwrap();
        let alk = calculate_closed_system_alkalinity(&ph, &tic, &sys).unwrap();
        let solved = calculate_closed_system_ph(&tic, &alk, &sys, &options).unwrap();
        assert!((solved.values()[0] - 8.1).abs() < 1e-6);
    }

    #[test]
    fn rainwater_is_mildly_acidic() {
        let constants = default_constants();
        let sys = CarbonateSystem::default();
        let options = SolverOptions::default();

        // pure water in equilibrium with ambient CO2, no alkalinity
        let pco2 = quantity(400e-6, "bar").unwrap();
        let t = quantity(25.0, "C").unwrap();
        let alk = quantity(0.0, "M").unwrap();
        let ph = calculate_open_system_ph(&pco2, &t, &alk, constants, &sys, &options).unwrap();
        assert!(ph.values()[0] > 5.0 && ph.values()[0] < 6.0);
    }

    #[test]
    fn speciation_vectorizes_over_ph() {
        let sys = CarbonateSystem::default();
        let ph = quantity(vec![4.0, 6.35, 12.0], "pH").unwrap();
        let dic = quantity(1e-3, "M").unwrap();
        let speciation = calculate_carbonate_speciation(&ph, &dic, &sys).unwrap();

        // acidic: mostly CO2(aq); at pK1: equal parts; basic: mostly carbonate
        assert!(speciation.h2co3.values()[0] > 0.99e-3);
        assert!((speciation.h2co3.values()[1] - speciation.hco3.values()[1]).abs() < 1e-6);
        assert!(speciation.co3.values()[2] > 0.9e-3);
    }
}
