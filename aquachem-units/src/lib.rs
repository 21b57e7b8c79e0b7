//! Aquachem Units - unit-aware chemical quantities
//!
//! Tags numeric sequences with a physical unit and enforces dimensional
//! compatibility at every operation. A `Quantity` carries a vector of values
//! (scalar = length 1, NA = NaN) plus one unit; arithmetic auto-converts
//! compatible operands and rejects everything else up front.
//!
//! Kinds:
//! - Amount (mol, mmol, µmol, ...)
//! - Molarity (M, mM, µM, ...)
//! - Mass (g, mg, kg, ...)
//! - Density (g/L, mg/L, ...)
//! - Volume (L, mL, µL, ...)
//! - Pressure (bar, mbar, atm, Pa, ...)
//! - Solubility (M/bar, mM/bar, ...)
//! - Temperature (K, C, F) — the one affine conversion
//! - Dimensionless (pure numbers, pH)

mod kind;
mod unit;
mod registry;
mod quantity;
mod scale;
mod derived;
mod error;

pub use kind::UnitKind;
pub use unit::Unit;
pub use registry::{UnitRegistry, METRIC_PREFIXES, UNITS};
pub use quantity::{quantity, IntoValues, Quantity};
pub use derived::DerivedKind;
pub use error::QuantityError;
