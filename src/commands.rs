//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::notification::Notification;

/// Side effects requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Grid changed, the table should be shown again
    Redraw,
    /// Read a file asynchronously; result comes back as `AppMsg::FileLoaded`
    LoadFile { path: PathBuf },
    /// Write a file asynchronously; result comes back as `AppMsg::SaveCompleted`
    SaveFile {
        path: PathBuf,
        content: String,
        mime_type: &'static str,
    },
    /// Show a notification to the user
    Notify(Notification),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Cmd::Notify(Notification::success(message))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Cmd::Notify(Notification::error(message))
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }

    /// Notifications carried by this command, in order
    pub fn notifications(&self) -> Vec<&Notification> {
        match self {
            Cmd::Notify(n) => vec![n],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.notifications()).collect(),
            _ => Vec::new(),
        }
    }
}
