//! CSV parsing using the csv crate
//!
//! RFC 4180 parsing with support for quoted fields, escaped quotes, and
//! custom delimiters. The csv crate silently accepts a quoted field that
//! runs to end of input, so quote balance is checked first and such input is
//! rejected as a whole.

use super::model::{CsvData, Delimiter};
use crate::error::CsvError;

/// Parse CSV content into CsvData
///
/// Blank lines (including the one left by a trailing newline) produce no
/// row. Short rows are padded to the grid width.
pub fn parse_csv(content: &str, delimiter: Delimiter) -> Result<CsvData, CsvError> {
    check_quotes(content, delimiter)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| CsvError::Parse {
            message: e.to_string(),
            line: e.position().map(|p| p.line() as usize),
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(rows = rows.len(), ?delimiter, "parsed csv");
    Ok(CsvData::from_rows(rows))
}

/// Reject input where a quoted field is never closed
///
/// A quote only opens a quoted field at the start of a field; elsewhere it is
/// literal, matching how the csv crate reads unquoted fields.
fn check_quotes(content: &str, delimiter: Delimiter) -> Result<(), CsvError> {
    let delim = delimiter.char();
    let mut chars = content.chars().peekable();
    let mut line = 1;
    let mut field_start = true;
    let mut open_quote_line = None;

    while let Some(ch) = chars.next() {
        if open_quote_line.is_some() {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                }
                '"' => open_quote_line = None,
                '\n' => line += 1,
                '\r' if chars.peek() != Some(&'\n') => line += 1,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' if field_start => {
                open_quote_line = Some(line);
                field_start = false;
            }
            '\n' => {
                line += 1;
                field_start = true;
            }
            '\r' => {
                // A bare CR ends a line on its own; CRLF is counted at the LF
                if chars.peek() != Some(&'\n') {
                    line += 1;
                }
                field_start = true;
            }
            c if c == delim => field_start = true,
            _ => field_start = false,
        }
    }

    match open_quote_line {
        Some(line) => Err(CsvError::Parse {
            message: "unterminated quoted field".to_string(),
            line: Some(line),
        }),
        None => Ok(()),
    }
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 || comma_count == max {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else {
        Delimiter::Semicolon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(data: &CsvData, index: usize) -> Vec<&str> {
        data.row(index)
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_parse_simple_csv() {
        let content = "a,b,c\n1,2,3\n";
        let data = parse_csv(content, Delimiter::Comma).unwrap();

        assert_eq!(data.row_count(), 2);
        assert_eq!(data.column_count(), 3);
        assert_eq!(data.get(0, 0), Some("a"));
        assert_eq!(data.get(1, 2), Some("3"));
    }

    #[test]
    fn test_parse_quoted_comma() {
        let data = parse_csv("a,\"b,c\",d", Delimiter::Comma).unwrap();
        assert_eq!(row(&data, 0), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_parse_escaped_quote() {
        let data = parse_csv("a,\"b\"\"c\",d", Delimiter::Comma).unwrap();
        assert_eq!(row(&data, 0), vec!["a", "b\"c", "d"]);
    }

    #[test]
    fn test_parse_quoted_newline() {
        let data = parse_csv("note,id\n\"line one\nline two\",7\n", Delimiter::Comma).unwrap();

        assert_eq!(data.row_count(), 2);
        assert_eq!(data.get(1, 0), Some("line one\nline two"));
        assert_eq!(data.get(1, 1), Some("7"));
    }

    #[test]
    fn test_parse_crlf() {
        let data = parse_csv("a,b\r\n1,2\r\n", Delimiter::Comma).unwrap();

        assert_eq!(data.row_count(), 2);
        assert_eq!(row(&data, 1), vec!["1", "2"]);
    }

    #[test]
    fn test_parse_bare_cr_line_endings() {
        let data = parse_csv("a,b\r1,2\r3,4", Delimiter::Comma).unwrap();

        assert_eq!(data.row_count(), 3);
        assert_eq!(row(&data, 1), vec!["1", "2"]);
        assert_eq!(row(&data, 2), vec!["3", "4"]);
    }

    #[test]
    fn test_unterminated_quote_line_with_bare_cr() {
        let err = parse_csv("a,b\r1,2\r\"x,3", Delimiter::Comma).unwrap_err();
        assert!(matches!(err, CsvError::Parse { line: Some(3), .. }));

        let err = parse_csv("a,b\r\n1,2\r\n\"x,3", Delimiter::Comma).unwrap_err();
        assert!(matches!(err, CsvError::Parse { line: Some(3), .. }));
    }

    #[test]
    fn test_parse_tsv() {
        let content = "a\tb\tc\n1\t2\t3\n";
        let data = parse_csv(content, Delimiter::Tab).unwrap();

        assert_eq!(data.row_count(), 2);
        assert_eq!(data.get(0, 1), Some("b"));
    }

    #[test]
    fn test_parse_ragged_rows() {
        let content = "a,b,c\n1,2\n";
        let data = parse_csv(content, Delimiter::Comma).unwrap();

        assert_eq!(data.column_count(), 3);
        assert_eq!(data.get(1, 2), Some(""));
    }

    #[test]
    fn test_parse_unterminated_quote() {
        let err = parse_csv("a,b\n1,\"open\n2,3\n", Delimiter::Comma).unwrap_err();
        assert_eq!(
            err,
            CsvError::Parse {
                message: "unterminated quoted field".to_string(),
                line: Some(2),
            }
        );
    }

    #[test]
    fn test_parse_mid_field_quote_is_literal() {
        let data = parse_csv("a,b\"c\n", Delimiter::Comma).unwrap();
        assert_eq!(row(&data, 0), vec!["a", "b\"c"]);
    }

    #[test]
    fn test_parse_quoted_empty_single_field() {
        let data = parse_csv("h\n\"\"\nx", Delimiter::Comma).unwrap();

        assert_eq!(data.row_count(), 3);
        assert_eq!(data.get(1, 0), Some(""));
    }

    #[test]
    fn test_parse_empty() {
        let data = parse_csv("", Delimiter::Comma).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_parse_single_column() {
        let content = "a\nb\nc\n";
        let data = parse_csv(content, Delimiter::Comma).unwrap();

        assert_eq!(data.row_count(), 3);
        assert_eq!(data.column_count(), 1);
    }

    #[test]
    fn test_detect_delimiter_comma() {
        let content = "a,b,c\n1,2,3\n";
        assert_eq!(detect_delimiter(content), Delimiter::Comma);
    }

    #[test]
    fn test_detect_delimiter_tab() {
        let content = "a\tb\tc\n1\t2\t3\n";
        assert_eq!(detect_delimiter(content), Delimiter::Tab);
    }

    #[test]
    fn test_detect_delimiter_pipe() {
        let content = "a|b|c\n1|2|3\n";
        assert_eq!(detect_delimiter(content), Delimiter::Pipe);
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        let content = "a;b;c\n1;2;3\n";
        assert_eq!(detect_delimiter(content), Delimiter::Semicolon);
    }
}
