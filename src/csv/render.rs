//! CSV grid rendering
//!
//! Renders the grid as a fixed-width text table with:
//! - Optional row numbers column (the same indices `edit` and `delete` take)
//! - Header row and separator
//! - Numeric cells right-aligned, long cells truncated

use super::model::CsvData;

const MIN_WIDTH: usize = 4;

/// Rows sampled when sizing columns
const WIDTH_SAMPLE_ROWS: usize = 100;

/// Options for text rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_row_numbers: bool,
    pub max_column_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_row_numbers: true,
            max_column_width: 40,
        }
    }
}

/// Check if a string looks like a number (for right-alignment)
pub fn is_number(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.parse::<f64>().is_ok()
}

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Make a cell printable on one line
fn display_cell(s: &str) -> String {
    s.replace("\r\n", "↵").replace(['\n', '\r'], "↵")
}

/// Calculate column widths based on content
pub fn column_widths(data: &CsvData, max_width: usize) -> Vec<usize> {
    let max_width = max_width.max(MIN_WIDTH);
    let mut widths = vec![MIN_WIDTH; data.column_count()];

    for row in data.rows().iter().take(WIDTH_SAMPLE_ROWS) {
        for (col, cell) in row.iter().enumerate() {
            let cell_width = display_cell(cell).chars().count();
            widths[col] = widths[col].max(cell_width).min(max_width);
        }
    }

    widths
}

/// Render the grid as a text table, or an empty string for an empty grid
pub fn render_table(data: &CsvData, options: RenderOptions) -> String {
    if data.is_empty() {
        return String::new();
    }

    let widths = column_widths(data, options.max_column_width);
    let number_width = data.row_count().saturating_sub(1).to_string().len();
    let mut out = String::new();

    for (index, row) in data.rows().iter().enumerate() {
        if options.show_row_numbers {
            out.push_str(&format!("{:>width$} │ ", index, width = number_width));
        }

        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| {
                let text = truncate_text(&display_cell(cell), width);
                if index > 0 && is_number(cell) {
                    format!("{:>width$}", text, width = width)
                } else {
                    format!("{:<width$}", text, width = width)
                }
            })
            .collect();
        out.push_str(cells.join(" │ ").trim_end());
        out.push('\n');

        if index == 0 {
            if options.show_row_numbers {
                out.push_str(&"─".repeat(number_width + 1));
                out.push_str("┼─");
            }
            let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
            out.push_str(&rule.join("─┼─"));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CsvData {
        CsvData::from_rows(vec![
            vec!["name".to_string(), "age".to_string()],
            vec!["Alice".to_string(), "30".to_string()],
            vec!["Bob".to_string(), "7".to_string()],
        ])
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("42"));
        assert!(is_number("-3.5"));
        assert!(!is_number(""));
        assert!(!is_number("abc"));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("hello", 1), "h");
    }

    #[test]
    fn test_column_widths_clamped() {
        let data = CsvData::from_rows(vec![vec!["a".to_string(), "x".repeat(100)]]);
        assert_eq!(column_widths(&data, 40), vec![4, 40]);
    }

    #[test]
    fn test_render_empty_grid() {
        assert_eq!(render_table(&CsvData::new(), RenderOptions::default()), "");
    }

    #[test]
    fn test_render_without_row_numbers() {
        let options = RenderOptions {
            show_row_numbers: false,
            max_column_width: 40,
        };
        let text = render_table(&sample(), options);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "name  │ age");
        assert_eq!(lines[1], "──────┼─────");
        assert_eq!(lines[2], "Alice │   30");
        assert_eq!(lines[3], "Bob   │    7");
    }

    #[test]
    fn test_render_with_row_numbers() {
        let text = render_table(&sample(), RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("0 │ name"));
        assert!(lines[2].starts_with("1 │ Alice"));
    }

    #[test]
    fn test_render_multiline_cell_on_one_line() {
        let data = CsvData::from_rows(vec![
            vec!["note".to_string()],
            vec!["a\nb".to_string()],
        ]);
        let text = render_table(&data, RenderOptions::default());
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("a↵b"));
    }
}
