//! Command-line argument parsing
//!
//! Supports:
//! - Opening a file at startup
//! - Overriding the download directory
//! - Table display options

use clap::Parser;
use std::path::PathBuf;

use crate::config::ToolConfig;

/// View and edit CSV files
#[derive(Parser, Debug)]
#[command(name = "csvtool", version, about = "View and edit CSV files")]
pub struct CliArgs {
    /// CSV file to open
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory downloads are written to
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Hide row numbers in the table
    #[arg(long)]
    pub no_row_numbers: bool,

    /// Truncate cells wider than N characters
    #[arg(long, value_name = "N")]
    pub max_column_width: Option<usize>,
}

impl CliArgs {
    /// Apply flags on top of the loaded configuration
    pub fn apply_to(&self, config: &mut ToolConfig) {
        if let Some(dir) = &self.output_dir {
            config.output_dir = Some(dir.clone());
        }
        if self.no_row_numbers {
            config.show_row_numbers = false;
        }
        if let Some(width) = self.max_column_width {
            config.max_column_width = width;
        }
    }
}
