//! Configuration management module

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::model::Config;

/// Load configuration from `path`, or the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Write the default configuration unless the file already exists
///
/// Returns the path and whether a file was created.
pub fn init_config(path: Option<&Path>) -> Result<(PathBuf, bool)> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(Config::config_path);
    if path.exists() {
        return Ok((path, false));
    }
    Config::default().save_to(&path)?;
    Ok((path, true))
}
