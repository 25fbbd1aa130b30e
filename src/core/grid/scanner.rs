//! Structural scanner for normalized grid-table lines
//!
//! Consumes the output of the normalization pass: a top border, a header
//! row, a `=` header/body separator, and body rows delimited by `-`
//! separator lines. Column edges come from the `+` positions of the top
//! border and must be consistent on every separator line.

use lazy_static::lazy_static;
use regex::Regex;

use super::cell::{GridCell, ParsedTable};
use crate::utils::error::{ExtractError, ExtractResult};

lazy_static! {
    static ref ROW_SEPARATOR: Regex = Regex::new(r"^\+(?:-+\+)+$").unwrap();
    static ref HEADER_SEPARATOR: Regex = Regex::new(r"^\+(?:=+\+)+$").unwrap();
}

/// Minimum line count for a well-formed table: top border, header row,
/// header/body separator, and at least one body line (the normalizer
/// guarantees a bottom border is also present in any input that parses).
const MIN_TABLE_LINES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    RowSeparator,
    HeaderSeparator,
    Content,
}

fn classify(line: &str, number: usize) -> ExtractResult<LineKind> {
    if ROW_SEPARATOR.is_match(line) {
        Ok(LineKind::RowSeparator)
    } else if HEADER_SEPARATOR.is_match(line) {
        Ok(LineKind::HeaderSeparator)
    } else if line.starts_with('|') {
        Ok(LineKind::Content)
    } else {
        Err(ExtractError::structural_at(
            "line is neither a separator nor a row of cells",
            number,
        ))
    }
}

fn plus_positions(line: &str) -> Vec<usize> {
    line.chars()
        .enumerate()
        .filter(|&(_, c)| c == '+')
        .map(|(i, _)| i)
        .collect()
}

/// Scan normalized lines into a [`ParsedTable`].
///
/// Line numbers in errors are 1-based positions within the normalized
/// line sequence.
pub fn scan_lines(lines: &[String]) -> ExtractResult<ParsedTable> {
    if lines.len() < MIN_TABLE_LINES {
        return Err(ExtractError::structural(format!(
            "grid table needs at least {} lines, found {}",
            MIN_TABLE_LINES,
            lines.len()
        )));
    }

    if classify(&lines[0], 1)? != LineKind::RowSeparator {
        return Err(ExtractError::structural_at(
            "expected a `+---+` top border",
            1,
        ));
    }
    let edges = plus_positions(&lines[0]);

    let last_number = lines.len();
    if classify(&lines[last_number - 1], last_number)? != LineKind::RowSeparator {
        return Err(ExtractError::structural_at(
            "table must end with a `+---+` bottom border",
            last_number,
        ));
    }

    let mut header: Option<Vec<GridCell>> = None;
    let mut body: Vec<Vec<GridCell>> = Vec::new();
    let mut seen_header_separator = false;
    // Content lines of the row group currently being collected, with their
    // 1-based line numbers.
    let mut group: Vec<(&str, usize)> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let number = idx + 1;
        match classify(line, number)? {
            kind @ (LineKind::RowSeparator | LineKind::HeaderSeparator) => {
                if plus_positions(line) != edges {
                    return Err(ExtractError::structural_at(
                        "column markers do not line up with the top border",
                        number,
                    ));
                }
                // Empty groups come from consecutive separators (the
                // normalizer synthesizes those) and are skipped.
                if !group.is_empty() {
                    let cells = extract_cells(&group, &edges)?;
                    group.clear();
                    if seen_header_separator {
                        body.push(cells);
                    } else if header.is_some() {
                        return Err(ExtractError::structural_at(
                            "more than one row before the header/body separator",
                            number,
                        ));
                    } else {
                        header = Some(cells);
                    }
                }
                if kind == LineKind::HeaderSeparator {
                    if seen_header_separator {
                        return Err(ExtractError::structural_at(
                            "duplicate header/body separator",
                            number,
                        ));
                    }
                    if header.is_none() {
                        return Err(ExtractError::structural_at(
                            "no header row before the header/body separator",
                            number,
                        ));
                    }
                    seen_header_separator = true;
                }
            }
            LineKind::Content => group.push((line.as_str(), number)),
        }
    }

    let header = match header {
        Some(cells) if seen_header_separator => cells,
        _ => {
            return Err(ExtractError::structural(
                "missing header/body separator (`+===+` line)",
            ))
        }
    };
    if body.is_empty() {
        return Err(ExtractError::structural("table has no body rows"));
    }

    Ok(ParsedTable { header, body })
}

/// Extract the cells of one row group (the content lines between two
/// separator lines).
///
/// A column edge counts as a cell boundary only when every line of the
/// group carries `|` there; an edge missing its `|` in some line merges
/// the adjacent columns into one spanning cell. Wrapped text is trimmed
/// per line and joined with single spaces.
fn extract_cells(group: &[(&str, usize)], edges: &[usize]) -> ExtractResult<Vec<GridCell>> {
    let right = *edges.last().unwrap_or(&0);
    let mut char_lines: Vec<Vec<char>> = Vec::with_capacity(group.len());

    for &(line, number) in group {
        let chars: Vec<char> = line.chars().collect();
        if chars.get(edges[0]) != Some(&'|') || chars.get(right) != Some(&'|') {
            return Err(ExtractError::structural_at(
                "row line does not reach the table border",
                number,
            ));
        }
        if chars[right + 1..].iter().any(|c| !c.is_whitespace()) {
            return Err(ExtractError::structural_at(
                "text outside the right table border",
                number,
            ));
        }
        char_lines.push(chars);
    }

    let boundary: Vec<bool> = edges
        .iter()
        .map(|&e| char_lines.iter().all(|chars| chars.get(e) == Some(&'|')))
        .collect();

    let mut cells = Vec::new();
    let mut col = 0;
    while col < edges.len() - 1 {
        let mut end = col + 1;
        while !boundary[end] {
            end += 1;
        }

        let pieces: Vec<String> = char_lines
            .iter()
            .map(|chars| {
                chars[edges[col] + 1..edges[end]]
                    .iter()
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .filter(|piece| !piece.is_empty())
            .collect();

        cells.push(GridCell::spanning(pieces.join(" "), col, end - col));
        col = end;
    }

    Ok(cells)
}
