//! CSV model
//!
//! Round-trips CSV text through an editable in-memory grid:
//! - Quoting-aware parsing (embedded delimiters, newlines, doubled quotes)
//! - Cell edit, row add, row delete on a rectangular grid
//! - Canonical serialization that parses back to the same grid
//!
//! # Architecture
//!
//! ```text
//! text ──parse_csv──▶ CsvData ──serialize_csv──▶ text
//!                       │
//!                       ├── edit_cell
//!                       ├── add_row
//!                       └── delete_row (header protected)
//! ```

mod model;
mod parser;
pub mod render;
mod writer;

pub use model::{CellPosition, CsvData, Delimiter};
pub use parser::{detect_delimiter, parse_csv};
pub use render::{render_table, RenderOptions};
pub use writer::{escape_csv_value, serialize_csv, serialize_row};
