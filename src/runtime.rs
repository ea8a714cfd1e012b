//! Command execution
//!
//! Runs the side effects `update` asks for. File reads and writes happen on
//! worker threads and come back as messages over a channel, so the model is
//! only ever touched from the thread that owns the runtime.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::notification::NotificationSink;
use crate::update::update;

/// Owns the model and executes commands
pub struct Runtime {
    model: AppModel,
    sink: Arc<dyn NotificationSink>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Reads/writes started but not yet applied
    in_flight: usize,
}

impl Runtime {
    pub fn new(model: AppModel, sink: Arc<dyn NotificationSink>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            sink,
            msg_tx,
            msg_rx,
            in_flight: 0,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Whether file I/O is still pending
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Run one message through `update` and execute the resulting command
    ///
    /// Returns true if the table should be redrawn.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => self.process_cmd(cmd),
            None => false,
        }
    }

    /// Apply any I/O results that have already arrived, without blocking
    pub fn pump(&mut self) -> bool {
        let mut redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            redraw |= self.receive(msg);
        }
        redraw
    }

    /// Block until every pending read/write has finished and been applied
    pub fn wait_idle(&mut self) -> bool {
        let mut redraw = false;
        while self.in_flight > 0 {
            match self.msg_rx.recv() {
                Ok(msg) => redraw |= self.receive(msg),
                Err(_) => break,
            }
        }
        redraw
    }

    fn receive(&mut self, msg: Msg) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(msg)
    }

    fn process_cmd(&mut self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::None | Cmd::Quit => false,
            Cmd::Redraw => true,
            Cmd::LoadFile { path } => {
                self.in_flight += 1;
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = std::fs::read(&path)
                        .map_err(|e| format!("Failed to read {}: {}", path.display(), e));
                    let _ = tx.send(Msg::App(AppMsg::FileLoaded { path, result }));
                });
                false
            }
            Cmd::SaveFile {
                path,
                content,
                mime_type,
            } => {
                self.in_flight += 1;
                tracing::debug!(path = %path.display(), mime_type, "saving");
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = write_file(&path, content);
                    let _ = tx.send(Msg::App(AppMsg::SaveCompleted { path, result }));
                });
                false
            }
            Cmd::Notify(notification) => {
                self.sink.notify(&notification);
                false
            }
            Cmd::Batch(cmds) => cmds
                .into_iter()
                .fold(false, |redraw, cmd| self.process_cmd(cmd) || redraw),
        }
    }
}

fn write_file(path: &Path, content: String) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}
