// src/sheet/mod.rs

//! Runsheets: independent task snapshots, each planned on its own.

pub mod plan;
pub mod render;

pub use plan::{PlannedSheet, plan_sheet, plan_sheets, plan_sheets_with, plan_tasks};
pub use render::{SheetView, SheetsDocument, TaskView, render_json, render_text};
