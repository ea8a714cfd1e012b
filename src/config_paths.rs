//! Where csvtool keeps its files
//!
//! ```text
//! <config dir>/csvtool/
//!   config.yaml
//!   logs/csvtool.log.YYYY-MM-DD
//! ```
//!
//! `<config dir>` is `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS,
//! `%APPDATA%` on Windows.

use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "csvtool";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// `<config dir>/csvtool`, or `None` when no home directory is known
pub fn config_dir() -> Option<PathBuf> {
    platform_config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs dir if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or("no config directory available")?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("cannot create {}: {}", dir.display(), e))?;
    Ok(dir)
}
