//! Grid-table structural parser
//!
//! Parses plain-text grid tables drawn with `+`, `-`, `=`, and `|`:
//!
//! ```text
//! +-------+-----+
//! | name  | age |
//! +=======+=====+
//! | alice | 30  |
//! +-------+-----+
//! ```
//!
//! Column boundaries come from the `+` positions in the top border, row
//! boundaries from the separator lines, and the `=` separator splits the
//! header from the body. Wrapped multi-line cell text is joined with
//! single spaces and trimmed.

mod cell;
mod scanner;


// Re-export public API
pub use cell::{GridCell, ParsedTable};
pub use scanner::scan_lines;
