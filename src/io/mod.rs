//! IO module for format-specific reading and writing operations.
//!
//! The core never touches files; these adapters move result rows and derived
//! tables in and out of Polars DataFrames.
//!
//! # Format Modules
//!
//! - `csv` - CSV format for raw result rows and derived tables
//! - `json` - JSON format for derived tables
//! - `frame` - conversions between DataFrames and row types
//! - `columns` - renaming source columns to the canonical result schema

mod columns;
mod csv;
mod frame;
mod json;

pub use polars::frame::DataFrame;

pub use columns::ColumnMapping;
pub use csv::*;
pub use frame::*;
pub use json::*;
