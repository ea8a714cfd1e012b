//! Grid update functions
//!
//! Handles CsvMsg messages. Every operation either commits or leaves the
//! grid exactly as it was and reports why.

use crate::commands::Cmd;
use crate::csv::CellPosition;
use crate::download::{resolve_file_name, DownloadRequest};
use crate::messages::CsvMsg;
use crate::model::AppModel;

/// Handle grid messages
pub fn update_csv(model: &mut AppModel, msg: CsvMsg) -> Option<Cmd> {
    match msg {
        CsvMsg::EditCell { at, value } => edit_cell(model, at, value),
        CsvMsg::AddRow => add_row(model),
        CsvMsg::DeleteRow(row) => delete_row(model, row),
        CsvMsg::Download { file_name } => download(model, file_name.as_deref()),
    }
}

/// Cell edits are silent on success
fn edit_cell(model: &mut AppModel, at: CellPosition, value: String) -> Option<Cmd> {
    match model.data.edit_cell(at.row, at.col, value) {
        Ok(()) => Some(Cmd::Redraw),
        Err(e) => {
            tracing::warn!("Cell edit rejected: {}", e);
            Some(Cmd::error(e.user_message()))
        }
    }
}

fn add_row(model: &mut AppModel) -> Option<Cmd> {
    model.data.add_row();
    Some(Cmd::batch(vec![Cmd::Redraw, Cmd::success("New row added")]))
}

fn delete_row(model: &mut AppModel, row: usize) -> Option<Cmd> {
    match model.data.delete_row(row) {
        Ok(_) => Some(Cmd::batch(vec![Cmd::Redraw, Cmd::success("Row deleted")])),
        Err(e) => {
            tracing::warn!("Row delete rejected: {}", e);
            Some(Cmd::error(e.user_message()))
        }
    }
}

/// Serialize the grid and hand it to the save boundary
fn download(model: &mut AppModel, requested: Option<&str>) -> Option<Cmd> {
    if !model.has_table() {
        return Some(Cmd::error("Nothing to download"));
    }

    let file_name = resolve_file_name(
        requested,
        model.file_name.as_deref(),
        &model.config.default_file_name,
    );
    let request = DownloadRequest::new(
        &model.data,
        model.delimiter,
        &model.config.output_dir(),
        &file_name,
    );

    tracing::info!(
        path = %request.path.display(),
        bytes = request.content.len(),
        "downloading csv"
    );
    model.is_saving = true;

    Some(Cmd::SaveFile {
        path: request.path,
        content: request.content,
        mime_type: request.mime_type,
    })
}
