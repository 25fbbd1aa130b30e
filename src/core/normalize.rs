//! Line normalization before structural parsing
//!
//! Pretty-printer output (prettytable and friends) omits the interior row
//! separators and the heavier header/body separator that a grid-table
//! parser expects. This pass rewrites the raw lines into a fully separated
//! grid:
//!
//! ```text
//! +------+-----+          +------+-----+
//! | name | age |          | name | age |
//! +------+-----+    =>    +======+=====+
//! | a    | 30  |          | a    | 30  |
//! | b    | 25  |          +------+-----+
//! +------+-----+          | b    | 25  |
//!                         +------+-----+ ...
//! ```
//!
//! The pass also fires before lines that already follow an explicit
//! separator, producing runs of consecutive separator lines; the grid
//! scanner skips the empty row groups those create, so an already fully
//! separated table parses identically with or without this pass.

/// Position within a line used to decide whether it starts a new logical row.
///
/// Wrapped cell continuations are indented past the left border padding, so
/// this column is blank for them and non-blank for lines that begin a row.
const ROW_START_PROBE: usize = 3;

/// Number of leading lines exempt from separator reinsertion: top border,
/// header, header/body separator, and the first body line.
const SKELETON_LINES: usize = 4;

/// Index (1-based, counting non-empty lines) of the header/body separator.
const HEADER_SEPARATOR_LINE: usize = 3;

/// Returns true when a content line starts a new logical row rather than
/// continuing a wrapped cell from the previous line.
///
/// A line shorter than the probe column is treated as starting a row; the
/// synthesized separator in front of it then surfaces the fragment as a
/// structural error instead of silently merging it into the previous cell.
pub fn starts_new_row(line: &str) -> bool {
    line.chars().nth(ROW_START_PROBE).map_or(true, |c| c != ' ')
}

/// Normalize raw grid-table text into fully separated lines.
///
/// - drops empty lines,
/// - reinserts a copy of the top border before every post-skeleton line
///   that starts a new logical row,
/// - promotes the 3rd non-empty line to the header/body separator by
///   replacing every `-` with `=`.
pub fn normalize_lines(input: &str) -> Vec<String> {
    let mut normalized = Vec::new();
    let mut border: Option<&str> = None;
    let mut count = 0usize;

    for line in input.lines() {
        if line.is_empty() {
            continue;
        }
        count += 1;
        let border = *border.get_or_insert(line);

        if count > SKELETON_LINES && starts_new_row(line) {
            normalized.push(border.to_string());
        }
        if count == HEADER_SEPARATOR_LINE {
            normalized.push(line.replace('-', "="));
        } else {
            normalized.push(line.to_string());
        }
    }

    normalized
}
