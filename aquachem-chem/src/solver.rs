//! 1-D root finding for charge-balance pH solving
//!
//! The charge balance is monotonic in pH over the physical range, so plain
//! bisection over a fixed bracket is robust and needs no derivative.

use crate::ChemError;

/// Bounds and convergence settings for the pH search.
///
/// Defaults: pH in [0, 14], absolute tolerance 1e-10 on pH, 200 iterations.
/// Bisection halves the bracket each step, so 200 iterations is far beyond
/// what the default tolerance needs; hitting the cap means the inputs are
/// pathological.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub ph_min: f64,
    pub ph_max: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            ph_min: 0.0,
            ph_max: 14.0,
            tolerance: 1e-10,
            max_iterations: 200,
        }
    }
}

/// Find the root of a monotonic function over the options' pH bracket.
///
/// Fails with `NoRootInBracket` when the function does not change sign over
/// the bracket, and `ConvergenceFailure` if the iteration cap is exhausted
/// before the bracket shrinks below tolerance.
pub fn bisect(
    f: impl Fn(f64) -> f64,
    options: &SolverOptions,
    context: &'static str,
) -> Result<f64, ChemError> {
    let mut lo = options.ph_min;
    let mut hi = options.ph_max;
    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if !f_lo.is_finite() || !f_hi.is_finite() || f_lo.signum() == f_hi.signum() {
        return Err(ChemError::NoRootInBracket {
            context,
            ph_min: options.ph_min,
            ph_max: options.ph_max,
        });
    }

    for _ in 0..options.max_iterations {
        let mid = 0.5 * (lo + hi);
        if hi - lo < options.tolerance {
            return Ok(mid);
        }
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Err(ChemError::ConvergenceFailure {
        context,
        max_iterations: options.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_simple_root() {
        let opts = SolverOptions::default();
        let root = bisect(|x| x - 7.25, &opts, "test").unwrap();
        assert!((root - 7.25).abs() < 1e-9);
    }

    #[test]
    fn test_descending_function() {
        let opts = SolverOptions::default();
        let root = bisect(|x| 3.0 - x, &opts, "test").unwrap();
        assert!((root - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_sign_change() {
        let opts = SolverOptions::default();
        let err = bisect(|x| x + 1.0, &opts, "test").unwrap_err();
        assert!(matches!(err, ChemError::NoRootInBracket { .. }));
    }

    #[test]
    fn test_iteration_cap() {
        let opts = SolverOptions {
            tolerance: 0.0, // can never be met
            max_iterations: 10,
            ..SolverOptions::default()
        };
        // 7.25 is never an exact midpoint of the [0, 14] bracket, so the
        // f(mid) == 0 early return cannot short-circuit the cap
        let err = bisect(|x| x - 7.25, &opts, "test").unwrap_err();
        assert!(matches!(err, ChemError::ConvergenceFailure { .. }));
    }

    #[test]
    fn test_endpoint_roots() {
        let opts = SolverOptions::default();
        assert_eq!(bisect(|x| x, &opts, "test").unwrap(), 0.0);
        assert_eq!(bisect(|x| x - 14.0, &opts, "test").unwrap(), 14.0);
    }
}
