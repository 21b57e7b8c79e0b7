//! Error type for chemistry calculations

use thiserror::Error;

use aquachem_units::QuantityError;

/// Errors produced by the calculation functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChemError {
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error("no constants found for gas '{gas}'")]
    MissingConstants { gas: String },

    #[error("found {count} constant entries for gas '{gas}', expected exactly one")]
    AmbiguousConstants { gas: String, count: usize },

    #[error("{context}: charge balance has no root in pH [{ph_min}, {ph_max}]")]
    NoRootInBracket {
        context: &'static str,
        ph_min: f64,
        ph_max: f64,
    },

    #[error("{context}: root search did not converge within {max_iterations} iterations")]
    ConvergenceFailure {
        context: &'static str,
        max_iterations: usize,
    },
}
