//! CSV data model types
//!
//! The grid is kept rectangular: every row has exactly `column_count` cells.
//! Mutations work in place and either commit fully or return an error
//! without touching the grid.

use crate::error::CsvError;

/// Supported CSV delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Get the delimiter as a single byte (all supported delimiters are ASCII)
    pub fn byte(self) -> u8 {
        self.char() as u8
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular grid of string cells; row 0 is the header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvData {
    rows: Vec<Vec<String>>,
    column_count: usize,
}

impl CsvData {
    /// Create empty CSV data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create CSV data from parsed rows, padding short rows with empty cells
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);

        for row in &mut rows {
            row.resize(column_count, String::new());
        }

        Self { rows, column_count }
    }

    /// Get number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get number of columns
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Check if data is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get cell value at position, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Get a single row
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// All rows, header first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Replace the cell at `(row, col)` with `value`
    pub fn edit_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<(), CsvError> {
        let rows = self.row_count();
        let cols = self.column_count;
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(CsvError::OutOfRange {
                row,
                col: Some(col),
                rows,
                cols,
            })?;

        *cell = value.into();
        tracing::debug!(row, col, "edited cell");
        Ok(())
    }

    /// Append a row of empty cells as wide as the header, returning its index
    pub fn add_row(&mut self) -> usize {
        self.rows.push(vec![String::new(); self.column_count]);
        let index = self.rows.len() - 1;
        tracing::debug!(index, columns = self.column_count, "added row");
        index
    }

    /// Remove a data row, returning its cells
    ///
    /// Row 0 is the header and is never removed here.
    pub fn delete_row(&mut self, row: usize) -> Result<Vec<String>, CsvError> {
        if row == 0 || row >= self.rows.len() {
            return Err(CsvError::OutOfRange {
                row,
                col: None,
                rows: self.rows.len(),
                cols: self.column_count,
            });
        }

        let removed = self.rows.remove(row);
        tracing::debug!(row, remaining = self.rows.len(), "deleted row");
        Ok(removed)
    }
}
