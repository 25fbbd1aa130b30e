//! Cell and table types produced by the grid scanner

/// A single cell extracted from the grid.
///
/// Wrapped (multi-line) cell text is already joined with single spaces and
/// trimmed by the time a `GridCell` is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Trimmed cell text
    pub content: String,
    /// Index of the leftmost column this cell occupies
    pub column: usize,
    /// Number of columns this cell spans
    pub colspan: usize,
}

impl GridCell {
    /// Create a cell at the given column with a span of 1
    pub fn new(content: impl Into<String>, column: usize) -> Self {
        GridCell {
            content: content.into(),
            column,
            colspan: 1,
        }
    }

    /// Create a cell spanning several columns
    pub fn spanning(content: impl Into<String>, column: usize, colspan: usize) -> Self {
        GridCell {
            content: content.into(),
            column,
            colspan,
        }
    }
}

/// A structurally parsed grid table: one header row plus body rows,
/// each an ordered sequence of cells aligned by column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    /// Cells of the header row (row 0)
    pub header: Vec<GridCell>,
    /// Body rows, in table order
    pub body: Vec<Vec<GridCell>>,
}

impl ParsedTable {
    /// Header cell texts in column order
    pub fn field_names(&self) -> Vec<&str> {
        self.header.iter().map(|c| c.content.as_str()).collect()
    }

    /// Number of body rows
    pub fn row_count(&self) -> usize {
        self.body.len()
    }
}
