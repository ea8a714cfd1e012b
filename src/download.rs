//! File output boundary
//!
//! Resolves where a download goes and what it is called.

use std::path::{Path, PathBuf};

use crate::csv::{serialize_csv, CsvData, Delimiter};

/// MIME type of downloaded files
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// File name used when nothing else is known
pub const DEFAULT_FILE_NAME: &str = "data.csv";

/// A serialized grid ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub path: PathBuf,
    pub content: String,
    pub mime_type: &'static str,
}

impl DownloadRequest {
    /// Serialize `data` and place it at `output_dir/file_name`
    pub fn new(data: &CsvData, delimiter: Delimiter, output_dir: &Path, file_name: &str) -> Self {
        Self {
            path: output_dir.join(file_name),
            content: serialize_csv(data, delimiter),
            mime_type: CSV_MIME_TYPE,
        }
    }
}

/// Choose the download file name
///
/// Order: explicit name, then the uploaded file's name, then `fallback`.
/// Only the final path component is kept, and names without an extension get
/// `.csv`.
pub fn resolve_file_name(
    requested: Option<&str>,
    uploaded: Option<&str>,
    fallback: &str,
) -> String {
    let chosen = [requested, uploaded, Some(fallback)]
        .into_iter()
        .flatten()
        .filter_map(|name| {
            Path::new(name.trim())
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
        })
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

    if Path::new(&chosen).extension().is_some() {
        chosen
    } else {
        format!("{}.csv", chosen)
    }
}
