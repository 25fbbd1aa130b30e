//! # gridjson
//!
//! Convert plain-text grid tables (as emitted by prettytable and similar
//! table printers) into JSON.
//!
//! ## Features
//!
//! - **Records mode**: header row supplies the field names, every body
//!   row becomes one JSON object
//! - **Mapping mode**: a two-column table becomes one flat JSON object
//! - **Normalization**: implicit row separators and the header/body
//!   separator are synthesized before parsing, so unseparated
//!   prettytable output parses like a full reStructuredText grid table
//! - **Value coercion**: cell text is parsed as a JSON literal where
//!   possible (`42` → number, `true` → boolean) and kept as a string
//!   otherwise
//!
//! ## Usage Examples
//!
//! ```rust
//! use gridjson::table_to_records_json;
//!
//! let table = "\
//! +-------+-----+
//! | name  | age |
//! +-------+-----+
//! | alice | 30  |
//! | bob   | 25  |
//! +-------+-----+
//! ";
//!
//! let json = table_to_records_json(table).unwrap();
//! assert_eq!(
//!     json,
//!     r#"[{"name":"alice","age":30},{"name":"bob","age":25}]"#
//! );
//! ```
//!
//! ```rust
//! use gridjson::table_to_mapping_json;
//!
//! let table = "\
//! +-------+-----------+
//! | Field | Value     |
//! +-------+-----------+
//! | host  | localhost |
//! | port  | 8080      |
//! +-------+-----------+
//! ";
//!
//! let json = table_to_mapping_json(table).unwrap();
//! assert_eq!(json, r#"{"host":"localhost","port":8080}"#);
//! ```

/// Core extraction modules
pub mod core;

/// Utility modules
pub mod utils;

// Re-export core types and functions
pub use core::grid::{scan_lines, GridCell, ParsedTable};
pub use core::normalize::{normalize_lines, starts_new_row};
pub use core::project::{mapping_from_table, records_from_table, CoercedValue, Record};

// Re-export utilities
pub use utils::error::{ExtractError, ExtractResult};

/// Parse raw grid-table text into a structured table.
///
/// Runs the normalization pass and the structural scanner.
pub fn parse_grid_table(input: &str) -> ExtractResult<ParsedTable> {
    let lines = normalize_lines(input);
    scan_lines(&lines)
}

/// Convert grid-table text into one record per body row, keyed by the
/// header fields.
pub fn table_to_records(input: &str) -> ExtractResult<Vec<Record>> {
    let table = parse_grid_table(input)?;
    records_from_table(&table)
}

/// Convert two-column grid-table text into a single flat key/value record.
pub fn table_to_mapping(input: &str) -> ExtractResult<Record> {
    let table = parse_grid_table(input)?;
    mapping_from_table(&table)
}

/// Convert grid-table text into a JSON array of objects, as a single line.
pub fn table_to_records_json(input: &str) -> ExtractResult<String> {
    let records = table_to_records(input)?;
    serde_json::to_string(&records).map_err(|e| ExtractError::Io {
        message: e.to_string(),
    })
}

/// Convert two-column grid-table text into a JSON object, as a single line.
pub fn table_to_mapping_json(input: &str) -> ExtractResult<String> {
    let mapping = table_to_mapping(input)?;
    serde_json::to_string(&mapping).map_err(|e| ExtractError::Io {
        message: e.to_string(),
    })
}
