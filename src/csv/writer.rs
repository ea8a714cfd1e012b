//! CSV serialization
//!
//! Output is canonical: fields are quoted only when they must be, rows are
//! separated by a single `\n`, and there is no trailing newline.

use std::borrow::Cow;

use super::model::{CsvData, Delimiter};

/// Quote a field if it contains the delimiter, a quote, or a line break
///
/// Internal quotes are doubled.
pub fn escape_csv_value(value: &str, delimiter: Delimiter) -> Cow<'_, str> {
    let delim = delimiter.char();
    let needs_quotes = value
        .chars()
        .any(|c| c == delim || c == '"' || c == '\n' || c == '\r');

    if needs_quotes {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Serialize a single row
///
/// A row made of one empty cell is written as `""`, otherwise it would be an
/// empty line and vanish on the next parse.
pub fn serialize_row(row: &[String], delimiter: Delimiter) -> String {
    if let [only] = row {
        if only.is_empty() {
            return "\"\"".to_string();
        }
    }

    let mut line = String::new();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            line.push(delimiter.char());
        }
        line.push_str(&escape_csv_value(cell, delimiter));
    }
    line
}

/// Serialize the whole grid back to CSV text
pub fn serialize_csv(data: &CsvData, delimiter: Delimiter) -> String {
    data.rows()
        .iter()
        .map(|row| serialize_row(row, delimiter))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse_csv;

    fn grid(rows: &[&[&str]]) -> CsvData {
        CsvData::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_escape_plain_value_borrows() {
        assert!(matches!(
            escape_csv_value("plain", Delimiter::Comma),
            Cow::Borrowed("plain")
        ));
    }

    #[test]
    fn test_escape_special_values() {
        assert_eq!(escape_csv_value("b,c", Delimiter::Comma), "\"b,c\"");
        assert_eq!(escape_csv_value("b\"c", Delimiter::Comma), "\"b\"\"c\"");
        assert_eq!(escape_csv_value("b\nc", Delimiter::Comma), "\"b\nc\"");
        assert_eq!(escape_csv_value("b\rc", Delimiter::Comma), "\"b\rc\"");
    }

    #[test]
    fn test_escape_respects_delimiter() {
        assert_eq!(escape_csv_value("a,b", Delimiter::Tab), "a,b");
        assert_eq!(escape_csv_value("a\tb", Delimiter::Tab), "\"a\tb\"");
    }

    #[test]
    fn test_serialize_no_trailing_newline() {
        let data = grid(&[&["name", "age"], &["Alice", "30"], &["Bob", "25"]]);
        assert_eq!(
            serialize_csv(&data, Delimiter::Comma),
            "name,age\nAlice,30\nBob,25"
        );
    }

    #[test]
    fn test_serialize_quotes_when_needed() {
        let data = grid(&[&["a", "b,c", "d\"e"]]);
        assert_eq!(
            serialize_csv(&data, Delimiter::Comma),
            "a,\"b,c\",\"d\"\"e\""
        );
    }

    #[test]
    fn test_serialize_lone_empty_cell() {
        let data = grid(&[&["h"], &[""], &["x"]]);
        let text = serialize_csv(&data, Delimiter::Comma);

        assert_eq!(text, "h\n\"\"\nx");
        assert_eq!(parse_csv(&text, Delimiter::Comma).unwrap(), data);
    }

    #[test]
    fn test_serialize_empty_grid() {
        assert_eq!(serialize_csv(&CsvData::new(), Delimiter::Comma), "");
    }

    #[test]
    fn test_round_trip_tricky_grid() {
        let data = grid(&[
            &["id", "note", "quote"],
            &["1", "multi\nline", "say \"hi\""],
            &["2", "", " padded "],
            &["3", "a,b", "\r\n"],
            &["", "", ""],
        ]);

        let text = serialize_csv(&data, Delimiter::Comma);
        let parsed = parse_csv(&text, Delimiter::Comma).unwrap();

        assert_eq!(parsed, data);
        assert_eq!(serialize_csv(&parsed, Delimiter::Comma), text);
    }

    #[test]
    fn test_round_trip_tab_delimited() {
        let data = grid(&[&["a", "b"], &["x\ty", "1,2"]]);

        let text = serialize_csv(&data, Delimiter::Tab);
        assert_eq!(text, "a\tb\n\"x\ty\"\t1,2");
        assert_eq!(parse_csv(&text, Delimiter::Tab).unwrap(), data);
    }
}
