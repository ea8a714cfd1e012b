//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::csv::CellPosition;

/// Grid editing messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvMsg {
    /// Replace one cell's value
    EditCell { at: CellPosition, value: String },
    /// Append an empty row
    AddRow,
    /// Delete a data row (row 0 is the header and is refused)
    DeleteRow(usize),
    /// Serialize the grid and save it
    Download { file_name: Option<String> },
}

/// Application-level messages (file lifecycle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// User picked a file to upload
    OpenFile(PathBuf),
    /// Upload read finished (raw bytes or I/O error text)
    FileLoaded {
        path: PathBuf,
        result: Result<Vec<u8>, String>,
    },
    /// Download write finished
    SaveCompleted {
        path: PathBuf,
        result: Result<(), String>,
    },
    /// Leave the session
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Csv(CsvMsg),
    App(AppMsg),
}

impl From<CsvMsg> for Msg {
    fn from(msg: CsvMsg) -> Self {
        Msg::Csv(msg)
    }
}

impl From<AppMsg> for Msg {
    fn from(msg: AppMsg) -> Self {
        Msg::App(msg)
    }
}
