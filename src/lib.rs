//! csvtool - Elm-style CSV viewer/editor
//!
//! This crate provides a quoting-correct CSV model (parse, edit, serialize)
//! and the message/update/command core that drives it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod download;
pub mod error;
pub mod input;
pub mod messages;
pub mod model;
pub mod notification;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod upload;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ToolConfig;
pub use error::CsvError;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Runtime;
