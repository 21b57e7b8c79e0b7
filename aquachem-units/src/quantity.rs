//! Quantity type - a sequence of values bound to one unit
//!
//! A `Quantity` is the only way numbers enter or leave the unit system:
//! construction validates the unit symbol, arithmetic converts operands
//! before combining, and `extract_value` is the sanctioned exit back to raw
//! numerics. Quantities are immutable value objects; every operation returns
//! a new one. A scalar is a length-1 sequence, and `f64::NAN` elements are
//! missing values.

use std::fmt;
use std::ops::Neg;
use serde::{Serialize, Deserialize};

use crate::registry::UNITS;
use crate::{QuantityError, Unit, UnitKind};

/// A unit-tagged numeric sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantity {
    values: Vec<f64>,
    unit: Unit,
}

/// Anything accepted as the numeric payload of a quantity
pub trait IntoValues {
    fn into_values(self) -> Vec<f64>;
}

impl IntoValues for f64 {
    fn into_values(self) -> Vec<f64> {
        vec![self]
    }
}

impl IntoValues for Vec<f64> {
    fn into_values(self) -> Vec<f64> {
        self
    }
}

impl IntoValues for &[f64] {
    fn into_values(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl<const N: usize> IntoValues for [f64; N] {
    fn into_values(self) -> Vec<f64> {
        self.to_vec()
    }
}

/// Construct a quantity from raw numbers and a unit symbol.
///
/// This is the sole entry point for creating quantities from scratch; all
/// other quantities derive from operations on existing ones.
///
/// ```
/// use aquachem_units::quantity;
///
/// let dic = quantity(vec![1.0, 2.0, 3.0], "mM").unwrap();
/// let temp = quantity(25.0, "C").unwrap();
/// assert!(quantity(1.0, "furlong").is_err());
/// ```
pub fn quantity<V: IntoValues>(values: V, symbol: &str) -> Result<Quantity, QuantityError> {
    Quantity::new(values, symbol)
}

impl Quantity {
    /// Create a new quantity, validating the unit symbol against the registry
    pub fn new<V: IntoValues>(values: V, symbol: &str) -> Result<Self, QuantityError> {
        let unit = UNITS.lookup(symbol)?.clone();
        Ok(Quantity {
            values: values.into_values(),
            unit,
        })
    }

    /// Create a quantity from an already-resolved unit
    pub fn with_unit<V: IntoValues>(values: V, unit: Unit) -> Self {
        Quantity {
            values: values.into_values(),
            unit,
        }
    }

    /// Create a dimensionless quantity (pure numbers)
    pub fn dimensionless<V: IntoValues>(values: V) -> Self {
        Quantity::with_unit(values, Unit::new("", UnitKind::Dimensionless, 1.0))
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The physical kind of this quantity, derived from its unit
    pub fn kind(&self) -> UnitKind {
        self.unit.kind
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // ========== Kind predicates ==========

    pub fn is_amount(&self) -> bool {
        self.kind() == UnitKind::Amount
    }

    pub fn is_molarity(&self) -> bool {
        self.kind() == UnitKind::Molarity
    }

    pub fn is_mass(&self) -> bool {
        self.kind() == UnitKind::Mass
    }

    pub fn is_density(&self) -> bool {
        self.kind() == UnitKind::Density
    }

    pub fn is_volume(&self) -> bool {
        self.kind() == UnitKind::Volume
    }

    pub fn is_pressure(&self) -> bool {
        self.kind() == UnitKind::Pressure
    }

    pub fn is_solubility(&self) -> bool {
        self.kind() == UnitKind::Solubility
    }

    pub fn is_temperature(&self) -> bool {
        self.kind() == UnitKind::Temperature
    }

    pub fn is_dimensionless(&self) -> bool {
        self.kind() == UnitKind::Dimensionless
    }

    /// Whether two quantities share a kind (and can be combined)
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Validate that this quantity has the expected kind.
    ///
    /// Calculation functions call this on every argument before touching the
    /// values, so a misplaced argument fails with the expected and actual
    /// kinds named instead of surfacing as an arithmetic error later.
    pub fn require_kind(&self, expected: UnitKind, context: &str) -> Result<&Self, QuantityError> {
        if self.kind() != expected {
            return Err(QuantityError::WrongQuantityKind {
                context: context.to_string(),
                expected,
                actual: self.kind(),
            });
        }
        Ok(self)
    }

    // ========== Conversion ==========

    /// Convert to another unit of the same kind
    pub fn convert_to(&self, symbol: &str) -> Result<Quantity, QuantityError> {
        let target = UNITS.lookup(symbol)?;
        self.convert_to_unit(target)
    }

    /// Convert to an already-resolved unit
    pub fn convert_to_unit(&self, target: &Unit) -> Result<Quantity, QuantityError> {
        if !self.unit.is_compatible(target) {
            return Err(QuantityError::incompatible(
                "convert",
                &self.unit.symbol,
                self.kind(),
                &target.symbol,
                target.kind,
            ));
        }
        let values = self
            .values
            .iter()
            .map(|v| target.from_base(self.unit.to_base(*v)))
            .collect();
        Ok(Quantity {
            values,
            unit: target.clone(),
        })
    }

    /// Convert to the base unit of this quantity's kind
    pub fn to_base(&self) -> Quantity {
        let base = self.unit.base();
        let values = self.values.iter().map(|v| self.unit.to_base(*v)).collect();
        Quantity { values, unit: base }
    }

    /// Extract raw numbers converted to the given unit.
    ///
    /// The one sanctioned way to leave the quantity type, e.g. to hand values
    /// to a numeric solver or a plotting routine.
    pub fn extract_value(&self, symbol: &str) -> Result<Vec<f64>, QuantityError> {
        Ok(self.convert_to(symbol)?.values)
    }

    /// Extract a single raw number converted to the given unit.
    /// Fails unless the quantity has exactly one element.
    pub fn extract_scalar(&self, symbol: &str) -> Result<f64, QuantityError> {
        if self.len() != 1 {
            return Err(QuantityError::LengthMismatch {
                op: "extract_scalar",
                left_len: self.len(),
                right_len: 1,
            });
        }
        Ok(self.extract_value(symbol)?[0])
    }

    // ========== Arithmetic ==========

    /// Add two quantities of the same kind. The right operand is converted to
    /// the left operand's unit before combining.
    pub fn add(&self, other: &Quantity) -> Result<Quantity, QuantityError> {
        let rhs = self.reconcile(other, "+")?;
        let values = broadcast("+", &self.values, &rhs.values, |a, b| a + b)?;
        Ok(Quantity {
            values,
            unit: self.unit.clone(),
        })
    }

    /// Subtract two quantities of the same kind
    pub fn sub(&self, other: &Quantity) -> Result<Quantity, QuantityError> {
        let rhs = self.reconcile(other, "-")?;
        let values = broadcast("-", &self.values, &rhs.values, |a, b| a - b)?;
        Ok(Quantity {
            values,
            unit: self.unit.clone(),
        })
    }

    /// Multiply two quantities. The kind pair must have a defined product
    /// (e.g. molarity × volume → amount); a dimensionless operand preserves
    /// the other operand's unit.
    pub fn mul(&self, other: &Quantity) -> Result<Quantity, QuantityError> {
        let result_kind = self.kind().multiply(&other.kind()).ok_or(
            QuantityError::UnsupportedOperation {
                op: "*",
                left: self.kind(),
                right: other.kind(),
            },
        )?;

        // Dimensionless factors scale in place without touching the unit
        if other.is_dimensionless() {
            let values = broadcast("*", &self.values, &other.values, |a, b| a * b)?;
            return Ok(Quantity { values, unit: self.unit.clone() });
        }
        if self.is_dimensionless() {
            let values = broadcast("*", &self.values, &other.values, |a, b| a * b)?;
            return Ok(Quantity { values, unit: other.unit.clone() });
        }

        let lhs = self.to_base();
        let rhs = other.to_base();
        let values = broadcast("*", &lhs.values, &rhs.values, |a, b| a * b)?;
        Ok(Quantity::with_unit(
            values,
            Unit::new(result_kind.base_symbol(), result_kind, 1.0),
        ))
    }

    /// Divide two quantities. The kind pair must have a defined quotient
    /// (e.g. amount ÷ volume → molarity); same-kind division cancels to a
    /// pure number.
    pub fn div(&self, other: &Quantity) -> Result<Quantity, QuantityError> {
        let result_kind = self.kind().divide(&other.kind()).ok_or(
            QuantityError::UnsupportedOperation {
                op: "/",
                left: self.kind(),
                right: other.kind(),
            },
        )?;

        if other.is_dimensionless() && !self.is_dimensionless() {
            let values = broadcast("/", &self.values, &other.values, |a, b| a / b)?;
            return Ok(Quantity { values, unit: self.unit.clone() });
        }

        let lhs = self.to_base();
        let rhs = other.to_base();
        let values = broadcast("/", &lhs.values, &rhs.values, |a, b| a / b)?;
        Ok(Quantity::with_unit(
            values,
            Unit::new(result_kind.base_symbol(), result_kind, 1.0),
        ))
    }

    /// Multiply every element by a bare scalar, preserving kind and unit
    pub fn scale(&self, factor: f64) -> Quantity {
        Quantity {
            values: self.values.iter().map(|v| v * factor).collect(),
            unit: self.unit.clone(),
        }
    }

    /// Divide every element by a bare scalar, preserving kind and unit
    pub fn unscale(&self, divisor: f64) -> Quantity {
        Quantity {
            values: self.values.iter().map(|v| v / divisor).collect(),
            unit: self.unit.clone(),
        }
    }

    /// Apply a kind-preserving elementwise map to the values
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Quantity {
        Quantity {
            values: self.values.iter().map(|v| f(*v)).collect(),
            unit: self.unit.clone(),
        }
    }

    // ========== Comparisons ==========

    /// Elementwise `<`, converting the right side to this quantity's unit
    pub fn lt(&self, other: &Quantity) -> Result<Vec<bool>, QuantityError> {
        self.compare(other, "<", |a, b| a < b)
    }

    /// Elementwise `<=`
    pub fn le(&self, other: &Quantity) -> Result<Vec<bool>, QuantityError> {
        self.compare(other, "<=", |a, b| a <= b)
    }

    /// Elementwise `>`
    pub fn gt(&self, other: &Quantity) -> Result<Vec<bool>, QuantityError> {
        self.compare(other, ">", |a, b| a > b)
    }

    /// Elementwise `>=`
    pub fn ge(&self, other: &Quantity) -> Result<Vec<bool>, QuantityError> {
        self.compare(other, ">=", |a, b| a >= b)
    }

    /// Elementwise equality within an absolute tolerance in this quantity's
    /// unit. Floating-point round-trips make exact equality too strict for
    /// converted values.
    pub fn eq_within(&self, other: &Quantity, tol: f64) -> Result<Vec<bool>, QuantityError> {
        let rhs = self.reconcile(other, "==")?;
        broadcast_bool(&self.values, &rhs.values, |a, b| (a - b).abs() <= tol)
            .ok_or(QuantityError::LengthMismatch {
                op: "==",
                left_len: self.values.len(),
                right_len: rhs.values.len(),
            })
    }

    fn compare(
        &self,
        other: &Quantity,
        op: &'static str,
        cmp: impl Fn(f64, f64) -> bool,
    ) -> Result<Vec<bool>, QuantityError> {
        let rhs = self.reconcile(other, op)?;
        broadcast_bool(&self.values, &rhs.values, cmp).ok_or(QuantityError::LengthMismatch {
            op,
            left_len: self.values.len(),
            right_len: rhs.values.len(),
        })
    }

    /// Convert `other` to this quantity's unit, failing across kinds
    fn reconcile(&self, other: &Quantity, op: &'static str) -> Result<Quantity, QuantityError> {
        if !self.is_compatible(other) {
            return Err(QuantityError::incompatible(
                op,
                &self.unit.symbol,
                self.kind(),
                &other.unit.symbol,
                other.kind(),
            ));
        }
        other.convert_to_unit(&self.unit)
    }

    // ========== Reductions ==========

    /// Mean of the finite elements, in this quantity's unit.
    /// `None` when no finite element exists.
    pub fn mean_magnitude(&self) -> Option<f64> {
        let finite: Vec<f64> = self
            .values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .map(f64::abs)
            .collect();
        if finite.is_empty() {
            return None;
        }
        Some(finite.iter().sum::<f64>() / finite.len() as f64)
    }

    // ========== Formatting ==========

    /// One formatted string per element ("10 mM"; NaN renders as "NA")
    pub fn format_each(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|v| {
                let num = format_value(*v);
                if self.unit.symbol.is_empty() {
                    num
                } else {
                    format!("{} {}", num, self.unit.symbol)
                }
            })
            .collect()
    }
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NA".to_string()
    } else {
        format!("{}", v)
    }
}

/// Elementwise combine with scalar broadcast. Lengths must match, or either
/// side must have length 1.
fn broadcast(
    op: &'static str,
    left: &[f64],
    right: &[f64],
    f: impl Fn(f64, f64) -> f64,
) -> Result<Vec<f64>, QuantityError> {
    match (left.len(), right.len()) {
        (l, r) if l == r => Ok(left.iter().zip(right).map(|(a, b)| f(*a, *b)).collect()),
        (_, 1) => Ok(left.iter().map(|a| f(*a, right[0])).collect()),
        (1, _) => Ok(right.iter().map(|b| f(left[0], *b)).collect()),
        (l, r) => Err(QuantityError::LengthMismatch {
            op,
            left_len: l,
            right_len: r,
        }),
    }
}

fn broadcast_bool(left: &[f64], right: &[f64], f: impl Fn(f64, f64) -> bool) -> Option<Vec<bool>> {
    match (left.len(), right.len()) {
        (l, r) if l == r => Some(left.iter().zip(right).map(|(a, b)| f(*a, *b)).collect()),
        (_, 1) => Some(left.iter().map(|a| f(*a, right[0])).collect()),
        (1, _) => Some(right.iter().map(|b| f(left[0], *b)).collect()),
        _ => None,
    }
}

impl Neg for &Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        self.scale(-1.0)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        self.scale(-1.0)
    }
}

impl PartialEq for Quantity {
    /// Whole-quantity equality on base-unit values; quantities of different
    /// kinds are never equal. NA elements compare unequal, like NaN.
    fn eq(&self, other: &Self) -> bool {
        if !self.is_compatible(other) || self.len() != other.len() {
            return false;
        }
        self.values
            .iter()
            .zip(&other.values)
            .all(|(a, b)| self.unit.to_base(*a) == other.unit.to_base(*b))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.values.iter().map(|v| format_value(*v)).collect();
        let body = if self.values.len() == 1 {
            rendered.into_iter().next().unwrap_or_default()
        } else {
            format!("[{}]", rendered.join(", "))
        };
        if self.unit.symbol.is_empty() {
            write!(f, "{}", body)
        } else {
            write!(f, "{} {}", body, self.unit.symbol)
        }
    }
}
