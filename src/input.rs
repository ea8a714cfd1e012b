//! Terminal command input
//!
//! Maps one typed line to a message. Row numbers are grid indices (the
//! header is row 0), columns are 0-based.

use std::path::PathBuf;

use crate::csv::CellPosition;
use crate::messages::{AppMsg, CsvMsg, Msg};

pub const HELP: &str = "\
Commands:
  open <path>               load a CSV file (replaces the current table)
  edit <row> <col> <value>  set a cell; \\n in the value inserts a newline
  add                       append an empty row
  delete <row>              delete a data row (row 0 is the header)
  save [name]               write the table (default: uploaded name or data.csv)
  show                      print the table
  help                      show this help
  quit                      exit";

/// What a typed line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Send a message through `update`
    Dispatch(Msg),
    /// Print the table
    Show,
    /// Print the command list
    Help,
    /// Blank line
    Nothing,
}

/// Parse one line of user input
pub fn parse_line(line: &str) -> Result<Input, String> {
    let (command, rest) = next_word(line);

    let input = match command.to_ascii_lowercase().as_str() {
        "" => Input::Nothing,
        "open" => {
            let path = rest.trim();
            if path.is_empty() {
                return Err("usage: open <path>".to_string());
            }
            Input::Dispatch(AppMsg::OpenFile(PathBuf::from(path)).into())
        }
        "edit" => {
            let (row, rest) = next_word(rest);
            let (col, rest) = next_word(rest);
            let row = parse_index(row, "row")?;
            let col = parse_index(col, "column")?;
            let value = rest.strip_prefix([' ', '\t']).unwrap_or(rest);
            Input::Dispatch(
                CsvMsg::EditCell {
                    at: CellPosition::new(row, col),
                    value: unescape(value),
                }
                .into(),
            )
        }
        "add" => Input::Dispatch(CsvMsg::AddRow.into()),
        "delete" | "del" => {
            let (row, _) = next_word(rest);
            Input::Dispatch(CsvMsg::DeleteRow(parse_index(row, "row")?).into())
        }
        "save" | "download" => {
            let name = rest.trim();
            let file_name = (!name.is_empty()).then(|| name.to_string());
            Input::Dispatch(CsvMsg::Download { file_name }.into())
        }
        "show" | "ls" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Dispatch(AppMsg::Quit.into()),
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };

    Ok(input)
}

/// Split off the first whitespace-separated word
fn next_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}

fn parse_index(word: &str, what: &str) -> Result<usize, String> {
    if word.is_empty() {
        return Err(format!("missing {} number", what));
    }
    word.parse()
        .map_err(|_| format!("invalid {} number '{}'", what, word))
}

/// Expand `\n`, `\t` and `\\` escapes
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
