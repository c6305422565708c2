// src/config/model.rs

use serde::Deserialize;

use crate::dag::TaskRecord;

/// Sheets file as read from TOML, before sheet-level validation.
///
/// ```toml
/// [[sheet]]
/// id = "release"
/// name = "Release day"
/// start_time = "2024-05-01T09:00"
///
/// [[sheet.task]]
/// id = "freeze"
/// duration = 2
/// assignee = "alice"
///
/// [[sheet.task]]
/// id = "tag"
/// duration = 1
/// assignee = "bob"
/// dependees = "freeze"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSheetsFile {
    #[serde(default)]
    pub sheet: Vec<SheetConfig>,
}

/// A validated sheets file: sheet ids are non-blank and unique.
///
/// Construct via `TryFrom<RawSheetsFile>`.
#[derive(Debug, Clone)]
pub struct SheetsFile {
    sheets: Vec<SheetConfig>,
}

impl SheetsFile {
    pub(crate) fn new_unchecked(sheets: Vec<SheetConfig>) -> Self {
        Self { sheets }
    }

    pub fn sheets(&self) -> &[SheetConfig] {
        &self.sheets
    }

    pub fn sheet(&self, id: &str) -> Option<&SheetConfig> {
        self.sheets.iter().find(|s| s.id == id)
    }

    pub fn into_sheets(self) -> Vec<SheetConfig> {
        self.sheets
    }
}

/// `[[sheet]]` entry: one independent task snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SheetConfig {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Free-form label for when the sheet begins; passed through untouched.
    #[serde(default)]
    pub start_time: Option<String>,

    /// `[[sheet.task]]` rows. Validated per sheet when planning.
    #[serde(default)]
    pub task: Vec<TaskRecord>,
}
