// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{RawSheetsFile, SheetsFile};
use crate::errors::{Result, RunsheetError};

impl TryFrom<RawSheetsFile> for SheetsFile {
    type Error = RunsheetError;

    fn try_from(raw: RawSheetsFile) -> std::result::Result<Self, Self::Error> {
        validate_sheet_ids(&raw)?;
        Ok(SheetsFile::new_unchecked(raw.sheet))
    }
}

// Task rows are left alone here: each sheet is validated when it is planned,
// so one broken sheet does not hide the others.
fn validate_sheet_ids(raw: &RawSheetsFile) -> Result<()> {
    let mut seen = HashSet::new();
    for sheet in raw.sheet.iter() {
        if sheet.id.trim().is_empty() {
            return Err(RunsheetError::Config(
                "runsheet id cannot be blank".to_string(),
            ));
        }
        if !seen.insert(sheet.id.as_str()) {
            return Err(RunsheetError::Config(format!(
                "runsheet id '{}' must be unique",
                sheet.id
            )));
        }
    }
    Ok(())
}
