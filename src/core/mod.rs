//! Core extraction modules
//!
//! This module contains the extraction pipeline:
//! - `normalize`: line normalization before structural parsing
//! - `grid`: structural grid-table parser
//! - `project`: records/mapping projections and JSON value coercion

pub mod grid;
pub mod normalize;
pub mod project;

// Re-export main types and functions
pub use grid::{scan_lines, GridCell, ParsedTable};
pub use normalize::{normalize_lines, starts_new_row};
pub use project::{mapping_from_table, records_from_table, CoercedValue, Record};
