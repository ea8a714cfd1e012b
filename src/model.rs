//! Application state
//!
//! `AppModel` is the single owner of the in-session grid. Updates take it by
//! `&mut` and replace or mutate the grid; nothing else holds a copy.

use crate::config::ToolConfig;
use crate::csv::{render_table, CsvData, Delimiter, RenderOptions};
use crate::notification::Notification;

/// The whole session state
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    /// The grid being edited; empty until the first successful upload
    pub data: CsvData,
    /// Delimiter of the uploaded file, reused for download
    pub delimiter: Delimiter,
    /// Name of the last successfully uploaded file
    pub file_name: Option<String>,
    pub config: ToolConfig,
    /// Most recent notification, kept for display
    pub last_notification: Option<Notification>,
    /// An upload read is in flight
    pub is_loading: bool,
    /// A download write is in flight
    pub is_saving: bool,
    pub should_quit: bool,
}

impl AppModel {
    pub fn new(config: ToolConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start from an already parsed grid
    pub fn with_data(data: CsvData, config: ToolConfig) -> Self {
        Self {
            data,
            config,
            ..Self::default()
        }
    }

    /// Whether a table should be shown (there is at least a header row)
    pub fn has_table(&self) -> bool {
        !self.data.is_empty()
    }

    /// Text rendering of the current grid using configured options
    pub fn render(&self) -> String {
        render_table(
            &self.data,
            RenderOptions {
                show_row_numbers: self.config.show_row_numbers,
                max_column_width: self.config.max_column_width,
            },
        )
    }

    /// One-line summary: file name and dimensions
    pub fn summary(&self) -> String {
        let name = self.file_name.as_deref().unwrap_or("(no file)");
        if self.data.is_empty() {
            return format!("{} - empty", name);
        }
        format!(
            "{} - {} data rows x {} columns",
            name,
            self.data.row_count() - 1,
            self.data.column_count()
        )
    }
}
