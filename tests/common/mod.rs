//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;

use csvtool::csv::CsvData;
use csvtool::notification::RecordingSink;
use csvtool::{AppModel, Runtime, ToolConfig};

/// Build a grid from string slices
pub fn grid(rows: &[&[&str]]) -> CsvData {
    CsvData::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

/// The people table used across tests
pub fn people() -> CsvData {
    grid(&[&["name", "age"], &["Alice", "30"], &["Bob", "25"]])
}

/// Row `index` as string slices
pub fn row(data: &CsvData, index: usize) -> Vec<&str> {
    data.row(index)
        .expect("row exists")
        .iter()
        .map(String::as_str)
        .collect()
}

/// A runtime writing downloads into `output_dir`, with a recording sink
pub fn test_runtime(output_dir: &std::path::Path) -> (Runtime, Arc<RecordingSink>) {
    let config = ToolConfig {
        output_dir: Some(output_dir.to_path_buf()),
        ..ToolConfig::default()
    };
    let sink = Arc::new(RecordingSink::new());
    let runtime = Runtime::new(AppModel::new(config), sink.clone());
    (runtime, sink)
}
