//! Unit registry - recognized symbols organized by kind
//!
//! Metric-prefixed symbols are generated systematically from each kind's base
//! symbol (mM, µmol, kbar, ...). Temperature and pressure carry a handful of
//! extra named units; temperature is the only kind with affine conversions.
//!
//! The global registry is write-once process state behind a `LazyLock`.
//! `UnitRegistry::new()` stays public so tests can build extended registries
//! without mutating the global one.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{QuantityError, Unit, UnitKind};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Metric prefixes, smallest to largest. The empty prefix is the base unit.
pub const METRIC_PREFIXES: &[(&str, f64)] = &[
    ("f", 1e-15),
    ("p", 1e-12),
    ("n", 1e-9),
    ("µ", 1e-6),
    ("m", 1e-3),
    ("", 1.0),
    ("k", 1e3),
    ("M", 1e6),
    ("G", 1e9),
    ("T", 1e12),
];

/// Registry of all recognized units
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        if let Some(canonical) = self.aliases.get(symbol) {
            return self.units.get(canonical);
        }
        None
    }

    /// Get a unit by symbol, failing with `UnknownUnit`
    pub fn lookup(&self, symbol: &str) -> Result<&Unit, QuantityError> {
        self.get(symbol).ok_or_else(|| QuantityError::UnknownUnit {
            symbol: symbol.to_string(),
        })
    }

    /// The physical kind a symbol measures
    pub fn kind_of(&self, symbol: &str) -> Result<UnitKind, QuantityError> {
        Ok(self.lookup(symbol)?.kind)
    }

    /// Convert a single value between two recognized symbols
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, QuantityError> {
        let from_unit = self.lookup(from)?;
        let to_unit = self.lookup(to)?;
        from_unit.convert_to(value, to_unit)
    }

    /// All units of one kind
    pub fn by_kind(&self, kind: UnitKind) -> Vec<&Unit> {
        self.units.values().filter(|u| u.kind == kind).collect()
    }

    /// All recognized unit symbols
    pub fn symbols(&self) -> Vec<&str> {
        self.units.keys().map(|s| s.as_str()).collect()
    }

    /// Register a unit. Exposed for test registries with custom units;
    /// the global registry is never mutated after initialization.
    pub fn register(&mut self, unit: Unit) {
        self.units.insert(unit.symbol.clone(), unit);
    }

    /// Register an alternate spelling for a registered symbol
    pub fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    /// Register the full metric family for a base symbol ("mol" -> fmol..Tmol)
    fn register_metric_family(&mut self, base: &str, kind: UnitKind) {
        for (prefix, factor) in METRIC_PREFIXES {
            let symbol = format!("{}{}", prefix, base);
            self.register(Unit::new(&symbol, kind, *factor));
            if *prefix == "µ" {
                // ASCII spelling of micro
                self.alias(&format!("u{}", base), &symbol);
            }
        }
    }

    fn register_all_units(&mut self) {
        self.register_amount_units();
        self.register_molarity_units();
        self.register_mass_units();
        self.register_density_units();
        self.register_volume_units();
        self.register_pressure_units();
        self.register_solubility_units();
        self.register_temperature_units();
        self.register_dimensionless_units();
    }

    fn register_amount_units(&mut self) {
        self.register_metric_family("mol", UnitKind::Amount);
        self.alias("mole", "mol");
        self.alias("moles", "mol");
    }

    fn register_molarity_units(&mut self) {
        self.register_metric_family("M", UnitKind::Molarity);
        self.alias("molar", "M");
        self.alias("mol/L", "M");
        self.alias("mmol/L", "mM");
        self.alias("µmol/L", "µM");
        self.alias("umol/L", "µM");
        self.alias("nmol/L", "nM");
    }

    fn register_mass_units(&mut self) {
        self.register_metric_family("g", UnitKind::Mass);
        self.alias("gram", "g");
        self.alias("grams", "g");
    }

    fn register_density_units(&mut self) {
        self.register_metric_family("g/L", UnitKind::Density);
        self.alias("mg/mL", "g/L");
        self.alias("µg/mL", "mg/L");
        self.alias("ug/mL", "mg/L");
    }

    fn register_volume_units(&mut self) {
        self.register_metric_family("L", UnitKind::Volume);
        self.alias("liter", "L");
        self.alias("liters", "L");
        self.alias("litre", "L");
        self.alias("litres", "L");
        self.alias("ml", "mL");
        self.alias("ul", "µL");
    }

    fn register_pressure_units(&mut self) {
        self.register_metric_family("bar", UnitKind::Pressure);
        self.register(Unit::new("atm", UnitKind::Pressure, 1.01325));
        self.register(Unit::new("Pa", UnitKind::Pressure, 1e-5));
        self.register(Unit::new("hPa", UnitKind::Pressure, 1e-3));
        self.register(Unit::new("kPa", UnitKind::Pressure, 1e-2));
        self.register(Unit::new("MPa", UnitKind::Pressure, 10.0));
        self.alias("pascal", "Pa");
        self.alias("atmosphere", "atm");
        self.alias("atmospheres", "atm");
    }

    fn register_solubility_units(&mut self) {
        self.register_metric_family("M/bar", UnitKind::Solubility);
        self.register(Unit::new("M/atm", UnitKind::Solubility, 1.0 / 1.01325));
        self.alias("mol/L/bar", "M/bar");
        self.alias("mmol/L/bar", "mM/bar");
    }

    fn register_temperature_units(&mut self) {
        // Kelvin is the base; Celsius and Fahrenheit are the affine exception,
        // handled via the unit offset and never as a bare scale factor.
        self.register(Unit::new("K", UnitKind::Temperature, 1.0));
        self.register(Unit::with_offset("C", UnitKind::Temperature, 1.0, 273.15));
        self.register(Unit::with_offset(
            "F",
            UnitKind::Temperature,
            5.0 / 9.0,
            255.3722222222222, // 459.67 * 5/9
        ));
        self.alias("kelvin", "K");
        self.alias("°C", "C");
        self.alias("degC", "C");
        self.alias("celsius", "C");
        self.alias("°F", "F");
        self.alias("degF", "F");
        self.alias("fahrenheit", "F");
    }

    fn register_dimensionless_units(&mut self) {
        self.register(Unit::new("", UnitKind::Dimensionless, 1.0));
        // pH is a label on a pure number, not a physical unit
        self.register(Unit::new("pH", UnitKind::Dimensionless, 1.0));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
