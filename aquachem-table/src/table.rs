//! Table type - a mapping from column name to equal-length sequence
//!
//! The core never assumes a specific table implementation; this one exists
//! so quantity columns can be exercised under the operations the contract
//! names (filter, row binding, aggregation, unit explicitization). Column
//! order is preserved for display.

use std::collections::HashMap;
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::{Aggregate, Column, TableError};
use aquachem_units::Quantity;

/// An ordered collection of named, equal-length columns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    names: Vec<String>,
    columns: HashMap<String, Column>,
}

impl Table {
    pub fn new() -> Self {
        Table::default()
    }

    /// Add a column, validating its length against existing columns.
    /// Builder-style so tables read as a column list at the call site.
    pub fn with_column(mut self, name: &str, column: Column) -> Result<Self, TableError> {
        if let Some(expected) = self.names.first().map(|n| self.columns[n].len()) {
            if column.len() != expected {
                return Err(TableError::LengthMismatch {
                    column: name.to_string(),
                    expected,
                    actual: column.len(),
                });
            }
        }
        if !self.columns.contains_key(name) {
            self.names.push(name.to_string());
        }
        self.columns.insert(name.to_string(), column);
        Ok(self)
    }

    /// Add a column built from individually constructed quantities
    pub fn with_quantity_column(self, name: &str, quantities: &[Quantity]) -> Result<Self, TableError> {
        self.with_column(name, Column::from_quantities(quantities)?)
    }

    pub fn nrows(&self) -> usize {
        self.names.first().map_or(0, |n| self.columns[n].len())
    }

    pub fn ncols(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Result<&Column, TableError> {
        self.columns.get(name).ok_or_else(|| TableError::UnknownColumn {
            name: name.to_string(),
        })
    }

    /// Keep the rows flagged true in the mask
    pub fn filter(&self, keep: &[bool]) -> Result<Table, TableError> {
        if keep.len() != self.nrows() {
            return Err(TableError::MaskLength {
                mask_len: keep.len(),
                rows: self.nrows(),
            });
        }
        let mut out = Table::new();
        for name in &self.names {
            out = out.with_column(name, self.columns[name].filter(keep))?;
        }
        Ok(out)
    }

    /// Stack another table's rows under this one. Both tables must have the
    /// same column set; quantity columns are reconciled to this table's
    /// units, and a kind mismatch fails rather than silently dropping rows.
    pub fn bind_rows(&self, other: &Table) -> Result<Table, TableError> {
        let mut left: Vec<String> = self.names.clone();
        let mut right: Vec<String> = other.names.clone();
        left.sort();
        right.sort();
        if left != right {
            return Err(TableError::ColumnSetMismatch {
                left: self.names.clone(),
                right: other.names.clone(),
            });
        }

        let mut out = Table::new();
        for name in &self.names {
            let appended = self.columns[name].append(name, &other.columns[name])?;
            out = out.with_column(name, appended)?;
        }
        Ok(out)
    }

    /// Rewrite quantity columns as plain numeric columns with the unit moved
    /// into the column name ("DIC" -> "DIC [mM]"). Needed before reshaping
    /// operations that require one scalar numeric type per cell.
    pub fn make_units_explicit(&self, columns: &[&str]) -> Result<Table, TableError> {
        for requested in columns {
            if !self.columns.contains_key(*requested) {
                return Err(TableError::UnknownColumn {
                    name: requested.to_string(),
                });
            }
        }
        let mut out = Table::new();
        for name in &self.names {
            let col = &self.columns[name];
            if columns.contains(&name.as_str()) {
                let q = col.as_quantity().ok_or_else(|| TableError::ColumnType {
                    column: name.clone(),
                    expected: "Quantity",
                    actual: col.type_name(),
                })?;
                let new_name = format!("{} [{}]", name, q.unit().symbol);
                out = out.with_column(&new_name, Column::Number(q.values().to_vec()))?;
            } else {
                out = out.with_column(name, col.clone())?;
            }
        }
        Ok(out)
    }

    /// Apply `make_units_explicit` to every quantity column
    pub fn make_all_units_explicit(&self) -> Result<Table, TableError> {
        let quantity_cols: Vec<&str> = self
            .names
            .iter()
            .filter(|n| self.columns[*n].as_quantity().is_some())
            .map(|n| n.as_str())
            .collect();
        self.make_units_explicit(&quantity_cols)
    }

    /// Reduce a quantity column, re-wrapping the result in the stored unit
    pub fn aggregate(&self, name: &str, agg: Aggregate, na_rm: bool) -> Result<Quantity, TableError> {
        self.column(name)?.aggregate(name, agg, na_rm)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} rows x {} columns", self.nrows(), self.ncols())?;
        for name in &self.names {
            let col = &self.columns[name];
            match col {
                Column::Quantity(q) => writeln!(f, "  {}: <{}> {}", name, col.type_name(), q)?,
                _ => writeln!(f, "  {}: <{}>", name, col.type_name())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquachem_units::quantity;

    fn sample() -> Table {
        Table::new()
            .with_column(
                "sample",
                Column::Text(vec!["a".into(), "b".into(), "c".into()]),
            )
            .unwrap()
            .with_column(
                "DIC",
                Column::Quantity(quantity(vec![1.0, 2.0, 3.0], "mM").unwrap()),
            )
            .unwrap()
    }

    #[test]
    fn test_length_validation() {
        let err = sample()
            .with_column("extra", Column::Number(vec![1.0]))
            .unwrap_err();
        assert!(matches!(err, TableError::LengthMismatch { .. }));
    }

    #[test]
    fn test_filter_keeps_unit() {
        let t = sample().filter(&[true, false, true]).unwrap();
        assert_eq!(t.nrows(), 2);
        let q = t.column("DIC").unwrap().as_quantity().unwrap();
        assert_eq!(q.values(), &[1.0, 3.0]);
        assert_eq!(q.unit().symbol, "mM");
    }

    #[test]
    fn test_bind_rows_reconciles_units() {
        let other = Table::new()
            .with_column("sample", Column::Text(vec!["d".into()]))
            .unwrap()
            .with_column(
                "DIC",
                Column::Quantity(quantity(0.004, "M").unwrap()),
            )
            .unwrap();

        let bound = sample().bind_rows(&other).unwrap();
        assert_eq!(bound.nrows(), 4);
        let q = bound.column("DIC").unwrap().as_quantity().unwrap();
        assert_eq!(q.unit().symbol, "mM");
        assert!((q.values()[3] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_bind_rows_rejects_kind_mismatch() {
        let other = Table::new()
            .with_column("sample", Column::Text(vec!["d".into()]))
            .unwrap()
            .with_column("DIC", Column::Quantity(quantity(1.0, "bar").unwrap()))
            .unwrap();
        assert!(sample().bind_rows(&other).is_err());
    }

    #[test]
    fn test_bind_rows_rejects_column_set_mismatch() {
        let other = Table::new()
            .with_column("sample", Column::Text(vec!["d".into()]))
            .unwrap();
        let err = sample().bind_rows(&other).unwrap_err();
        assert!(matches!(err, TableError::ColumnSetMismatch { .. }));
    }

    #[test]
    fn test_make_units_explicit() {
        let t = sample().make_units_explicit(&["DIC"]).unwrap();
        assert!(t.column("DIC").is_err());
        let col = t.column("DIC [mM]").unwrap();
        assert_eq!(col.type_name(), "Number");
        match col {
            Column::Number(v) => assert_eq!(v, &vec![1.0, 2.0, 3.0]),
            _ => unreachable!(),
        }
        // non-quantity columns pass through untouched
        assert_eq!(t.column("sample").unwrap().type_name(), "Text");
    }

    #[test]
    fn test_make_units_explicit_rejects_unknown_column() {
        // A typo must not silently return the table unchanged
        let err = sample().make_units_explicit(&["DICC"]).unwrap_err();
        assert_eq!(err, TableError::UnknownColumn { name: "DICC".into() });
    }

    #[test]
    fn test_make_all_units_explicit() {
        let t = sample().make_all_units_explicit().unwrap();
        assert!(t.column("DIC [mM]").is_ok());
    }

    #[test]
    fn test_aggregate_through_table() {
        let total = sample().aggregate("DIC", Aggregate::Sum, false).unwrap();
        assert_eq!(total.values(), &[6.0]);
        assert_eq!(total.unit().symbol, "mM");
    }

    #[test]
    fn test_unknown_column() {
        let err = sample().column("pH").unwrap_err();
        assert_eq!(err, TableError::UnknownColumn { name: "pH".into() });
    }
}
