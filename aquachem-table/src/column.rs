//! Column type - one named, equal-length sequence in a table
//!
//! Quantity columns behave like numeric columns under filtering, row
//! binding, and aggregation, but they never silently lose their unit:
//! aggregation re-wraps results as quantities, and only
//! `make_units_explicit` converts a quantity column to bare numbers (moving
//! the unit into the column name).

use serde::{Serialize, Deserialize};

use aquachem_units::Quantity;

use crate::TableError;

/// A single table column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Column {
    Number(Vec<f64>),
    Text(Vec<String>),
    Bool(Vec<bool>),
    Quantity(Quantity),
}

/// Reduction applied to a quantity column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Sum,
    Mean,
    Min,
    Max,
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Number(v) => v.len(),
            Column::Text(v) => v.len(),
            Column::Bool(v) => v.len(),
            Column::Quantity(q) => q.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Column::Number(_) => "Number",
            Column::Text(_) => "Text",
            Column::Bool(_) => "Bool",
            Column::Quantity(_) => "Quantity",
        }
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Column::Quantity(q) => Some(q),
            _ => None,
        }
    }

    /// Combine individually constructed quantities into one column.
    ///
    /// All elements must share one kind; mixed units within the kind are
    /// converted to the first element's unit. A kind mismatch fails with
    /// `IncompatibleUnit` naming the offending pair - it is never dropped.
    pub fn from_quantities(quantities: &[Quantity]) -> Result<Column, TableError> {
        let first = quantities.first().ok_or(TableError::EmptyColumn)?;
        let unit = first.unit().clone();

        let mut values = Vec::new();
        for q in quantities {
            let converted = q.convert_to_unit(&unit)?;
            values.extend_from_slice(converted.values());
        }
        Ok(Column::Quantity(Quantity::with_unit(values, unit)))
    }

    /// Select the rows flagged true in the mask
    pub(crate) fn filter(&self, keep: &[bool]) -> Column {
        fn pick<T: Clone>(v: &[T], keep: &[bool]) -> Vec<T> {
            v.iter()
                .zip(keep)
                .filter(|(_, k)| **k)
                .map(|(x, _)| x.clone())
                .collect()
        }
        match self {
            Column::Number(v) => Column::Number(pick(v, keep)),
            Column::Text(v) => Column::Text(pick(v, keep)),
            Column::Bool(v) => Column::Bool(pick(v, keep)),
            Column::Quantity(q) => Column::Quantity(Quantity::with_unit(
                pick(q.values(), keep),
                q.unit().clone(),
            )),
        }
    }

    /// Append another column of the same type. Quantity columns reconcile to
    /// this column's unit; kind mismatches fail.
    pub(crate) fn append(&self, name: &str, other: &Column) -> Result<Column, TableError> {
        match (self, other) {
            (Column::Number(a), Column::Number(b)) => {
                let mut v = a.clone();
                v.extend_from_slice(b);
                Ok(Column::Number(v))
            }
            (Column::Text(a), Column::Text(b)) => {
                let mut v = a.clone();
                v.extend_from_slice(b);
                Ok(Column::Text(v))
            }
            (Column::Bool(a), Column::Bool(b)) => {
                let mut v = a.clone();
                v.extend_from_slice(b);
                Ok(Column::Bool(v))
            }
            (Column::Quantity(a), Column::Quantity(b)) => {
                let b = b.convert_to_unit(a.unit())?;
                let mut values = a.values().to_vec();
                values.extend_from_slice(b.values());
                Ok(Column::Quantity(Quantity::with_unit(values, a.unit().clone())))
            }
            _ => Err(TableError::ColumnType {
                column: name.to_string(),
                expected: self.type_name(),
                actual: other.type_name(),
            }),
        }
    }

    /// Reduce a quantity column in its stored unit, re-wrapping the result
    /// as a length-1 quantity of the same unit. With `na_rm`, NA elements
    /// are skipped; otherwise any NA makes the result NA.
    pub fn aggregate(&self, name: &str, agg: Aggregate, na_rm: bool) -> Result<Quantity, TableError> {
        let q = self.as_quantity().ok_or_else(|| TableError::ColumnType {
            column: name.to_string(),
            expected: "Quantity",
            actual: self.type_name(),
        })?;

        let values: Vec<f64> = if na_rm {
            q.values().iter().copied().filter(|v| !v.is_nan()).collect()
        } else {
            q.values().to_vec()
        };

        // f64::min/max skip NaN, so without na_rm an NA must short-circuit
        let result = if values.is_empty() || values.iter().any(|v| v.is_nan()) {
            f64::NAN
        } else {
            match agg {
                Aggregate::Sum => values.iter().sum(),
                Aggregate::Mean => values.iter().sum::<f64>() / values.len() as f64,
                Aggregate::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
                Aggregate::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            }
        };
        Ok(Quantity::with_unit(vec![result], q.unit().clone()))
    }
}
