// src/config/mod.rs

//! Loading task snapshots from a TOML sheets file.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: reading a file from disk.
//! - `validate.rs`: sheet-level checks (ids).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{RawSheetsFile, SheetConfig, SheetsFile};
