//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod csv;

use crate::commands::Cmd;
use crate::messages::{AppMsg, CsvMsg, Msg};
use crate::model::AppModel;

use tracing::{debug, span, Level};

pub use app::update_app;
pub use csv::update_csv;

/// Main update function - dispatches to sub-handlers
///
/// The last notification a command carries is remembered on the model.
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let result = match msg {
        Msg::Csv(m) => csv::update_csv(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    if let Some(last) = result.as_ref().and_then(|cmd| cmd.notifications().pop()) {
        model.last_notification = Some(last.clone());
    }

    result
}

/// Short name of a message for logs
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Csv(m) => match m {
            CsvMsg::EditCell { at, .. } => format!("Csv::EditCell({}, {})", at.row, at.col),
            CsvMsg::AddRow => "Csv::AddRow".to_string(),
            CsvMsg::DeleteRow(row) => format!("Csv::DeleteRow({})", row),
            CsvMsg::Download { .. } => "Csv::Download".to_string(),
        },
        Msg::App(m) => match m {
            AppMsg::OpenFile(_) => "App::OpenFile".to_string(),
            AppMsg::FileLoaded { .. } => "App::FileLoaded".to_string(),
            AppMsg::SaveCompleted { .. } => "App::SaveCompleted".to_string(),
            AppMsg::Quit => "App::Quit".to_string(),
        },
    }
}
