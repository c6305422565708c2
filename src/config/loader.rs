// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawSheetsFile, SheetsFile};
use crate::errors::Result;

/// Read and deserialize a sheets file without any semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSheetsFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawSheetsFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), sheets = raw.sheet.len(), "loaded sheets file");

    Ok(raw)
}

/// Load a sheets file and check sheet ids (non-blank, unique).
///
/// Task rows are validated later, per sheet, by the planner.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<SheetsFile> {
    let raw = load_from_path(&path)?;
    SheetsFile::try_from(raw)
}

/// `Runsheet.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Runsheet.toml")
}
