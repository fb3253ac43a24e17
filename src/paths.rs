//! XDG-style path utilities for the configuration directory.
//!
//! XDG Base Directory conventions are preferred over OS-specific locations so
//! the config lives in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "lingua";

/// Returns the configuration directory for lingua.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/lingua` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/lingua` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
