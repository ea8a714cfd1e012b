//! Error types for CSV loading, editing, and saving
//!
//! Every variant is recoverable: the update loop reports it as a
//! notification and leaves the current grid as it was.

/// Errors produced by the CSV model and its file boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// Malformed input, e.g. a quoted field that never closes
    Parse {
        message: String,
        /// 1-based line where the problem starts, when known
        line: Option<usize>,
    },
    /// Row or column index outside the grid
    OutOfRange {
        row: usize,
        /// Column index, `None` for row-level operations
        col: Option<usize>,
        rows: usize,
        cols: usize,
    },
    /// Upload was zero bytes or whitespace only
    EmptyFile,
    /// Upload was not valid UTF-8
    Encoding(String),
    /// Reading or writing a file failed
    Io(String),
}

impl CsvError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse { .. } => format!("Could not read CSV: {}", self),
            Self::OutOfRange { .. } => {
                let mut msg = self.to_string();
                if let Some(first) = msg.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                msg
            }
            Self::EmptyFile => "The selected file is empty".to_string(),
            Self::Encoding(msg) => format!("File is not valid UTF-8 text: {}", msg),
            Self::Io(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse {
                message,
                line: Some(line),
            } => write!(f, "CSV parse error at line {}: {}", line, message),
            Self::Parse {
                message,
                line: None,
            } => write!(f, "CSV parse error: {}", message),
            Self::OutOfRange {
                row,
                col: Some(col),
                rows,
                cols,
            } => write!(
                f,
                "cell ({}, {}) is out of range for a {}x{} grid",
                row, col, rows, cols
            ),
            Self::OutOfRange {
                row,
                col: None,
                rows,
                ..
            } => {
                if *row == 0 && *rows > 0 {
                    write!(f, "row 0 is the header and cannot be deleted")
                } else {
                    write!(f, "row {} is out of range ({} rows)", row, rows)
                }
            }
            Self::EmptyFile => write!(f, "file is empty"),
            Self::Encoding(msg) => write!(f, "invalid UTF-8: {}", msg),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CsvError {}
