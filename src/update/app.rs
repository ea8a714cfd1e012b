//! App message handlers (upload and download lifecycle)

use std::path::Path;

use crate::commands::Cmd;
use crate::csv::parse_csv;
use crate::error::CsvError;
use crate::messages::AppMsg;
use crate::model::AppModel;
use crate::upload::{decode_upload, delimiter_for, file_name_of};

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::OpenFile(path) => {
            model.is_loading = true;
            tracing::debug!("Loading {}", path.display());
            Some(Cmd::LoadFile { path })
        }

        AppMsg::FileLoaded { path, result } => {
            model.is_loading = false;
            let loaded = result
                .map_err(CsvError::Io)
                .and_then(|bytes| load_grid(model, &path, &bytes));

            match loaded {
                Ok(()) => Some(Cmd::batch(vec![
                    Cmd::Redraw,
                    Cmd::success("CSV file uploaded successfully"),
                ])),
                Err(e) => {
                    tracing::warn!("Upload of {} failed: {}", path.display(), e);
                    Some(Cmd::error(e.user_message()))
                }
            }
        }

        AppMsg::SaveCompleted { path, result } => {
            model.is_saving = false;
            match result {
                Ok(()) => {
                    tracing::info!("Saved {}", path.display());
                    Some(Cmd::success("CSV file downloaded"))
                }
                Err(e) => {
                    tracing::warn!("Save of {} failed: {}", path.display(), e);
                    Some(Cmd::error(format!("Download failed: {}", e)))
                }
            }
        }

        AppMsg::Quit => {
            model.should_quit = true;
            Some(Cmd::Quit)
        }
    }
}

/// Decode and parse an upload, replacing the grid only if both succeed
fn load_grid(model: &mut AppModel, path: &Path, bytes: &[u8]) -> Result<(), CsvError> {
    let content = decode_upload(bytes)?;
    let delimiter = delimiter_for(path, content);
    let data = parse_csv(content, delimiter)?;

    tracing::info!(
        "Loaded {} ({} rows, {} columns)",
        path.display(),
        data.row_count(),
        data.column_count()
    );

    model.data = data;
    model.delimiter = delimiter;
    model.file_name = file_name_of(path);
    Ok(())
}
