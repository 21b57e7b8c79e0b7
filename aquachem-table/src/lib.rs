//! Aquachem Table - quantity columns in tabular data
//!
//! Adapts `aquachem_units::Quantity` to a row-oriented table abstraction:
//! a table is a mapping from column name to equal-length sequence of values,
//! and quantity columns survive filtering, row binding, and aggregation
//! without losing their unit.

mod column;
mod table;
mod error;

pub use column::{Aggregate, Column};
pub use table::Table;
pub use error::TableError;
