//! File input boundary
//!
//! Turns the raw bytes of a picked file into text the parser can take.

use std::path::Path;

use crate::csv::{detect_delimiter, Delimiter};
use crate::error::CsvError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode an uploaded file as UTF-8 text
///
/// Strips a leading byte order mark. Zero-byte and whitespace-only files are
/// rejected with `CsvError::EmptyFile`.
pub fn decode_upload(bytes: &[u8]) -> Result<&str, CsvError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let text = std::str::from_utf8(bytes).map_err(|e| CsvError::Encoding(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    Ok(text)
}

/// Pick the delimiter from the file extension
///
/// Content is only sniffed when the path has no extension at all.
pub fn delimiter_for(path: &Path, content: &str) -> Delimiter {
    path.extension()
        .and_then(|e| e.to_str())
        .map(Delimiter::from_extension)
        .unwrap_or_else(|| detect_delimiter(content))
}

/// Display name of an uploaded file
pub fn file_name_of(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().to_string())
}
