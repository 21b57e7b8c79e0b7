//! Shared elementwise plumbing for the calculation functions

use aquachem_units::QuantityError;

use crate::ChemError;

/// Common output length for elementwise arguments: all lengths must agree,
/// except that length-1 arguments broadcast.
pub(crate) fn common_length(op: &'static str, lens: &[usize]) -> Result<usize, ChemError> {
    let mut n = 1usize;
    for &len in lens {
        if len == n || len == 1 {
            continue;
        }
        if n == 1 {
            n = len;
            continue;
        }
        return Err(QuantityError::LengthMismatch {
            op,
            left_len: n,
            right_len: len,
        }
        .into());
    }
    Ok(n)
}

/// Index into a possibly-broadcast argument vector
pub(crate) fn at(v: &[f64], i: usize) -> f64 {
    if v.len() == 1 {
        v[0]
    } else {
        v[i]
    }
}
