//! Error type for quantity operations
//!
//! All failures are raised at the earliest point of detection (construction
//! or argument validation) and always name the offending symbols and kinds.
//! Nothing is deferred into a silent NaN downstream.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::UnitKind;

/// Errors produced by the quantity/unit system
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum QuantityError {
    #[error("unknown unit: '{symbol}'")]
    UnknownUnit { symbol: String },

    #[error(
        "incompatible units in {op}: '{left_symbol}' ({left_kind}) vs '{right_symbol}' ({right_kind})"
    )]
    IncompatibleUnit {
        op: &'static str,
        left_symbol: String,
        left_kind: UnitKind,
        right_symbol: String,
        right_kind: UnitKind,
    },

    #[error("no defined result for {left} {op} {right}")]
    UnsupportedOperation {
        op: &'static str,
        left: UnitKind,
        right: UnitKind,
    },

    #[error("unit '{symbol}' is not a valid {derived} unit (allowed: {allowed})")]
    InvalidUnitForKind {
        derived: &'static str,
        symbol: String,
        allowed: &'static str,
    },

    #[error("{context}: expected a {expected} quantity, got {actual}")]
    WrongQuantityKind {
        context: String,
        expected: UnitKind,
        actual: UnitKind,
    },

    #[error("length mismatch in {op}: {left_len} vs {right_len} (only length-1 broadcasts)")]
    LengthMismatch {
        op: &'static str,
        left_len: usize,
        right_len: usize,
    },
}

impl QuantityError {
    pub(crate) fn incompatible(
        op: &'static str,
        left_symbol: &str,
        left_kind: UnitKind,
        right_symbol: &str,
        right_kind: UnitKind,
    ) -> Self {
        QuantityError::IncompatibleUnit {
            op,
            left_symbol: left_symbol.to_string(),
            left_kind,
            right_symbol: right_symbol.to_string(),
            right_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offenders() {
        let err = QuantityError::UnknownUnit { symbol: "pints".into() };
        assert!(err.to_string().contains("pints"));

        let err = QuantityError::incompatible(
            "+",
            "mM",
            UnitKind::Molarity,
            "bar",
            UnitKind::Pressure,
        );
        let msg = err.to_string();
        assert!(msg.contains("mM"));
        assert!(msg.contains("bar"));
        assert!(msg.contains("molarity"));
        assert!(msg.contains("pressure"));
    }

    #[test]
    fn test_wrong_kind_names_both_kinds() {
        let err = QuantityError::WrongQuantityKind {
            context: "calculate_gas_solubility(temperature)".into(),
            expected: UnitKind::Temperature,
            actual: UnitKind::Pressure,
        };
        let msg = err.to_string();
        assert!(msg.contains("temperature"));
        assert!(msg.contains("pressure"));
    }
}
