// src/sheet/render.rs

//! JSON and plain-text views of planned sheets.
//!
//! The JSON shape is what a dashboard front-end consumes: dependee and
//! dependent ids are always explicit sorted lists (`[]`, never absent) and
//! `error` is `""` when a sheet planned fine.

use std::fmt::Write as _;

use serde::Serialize;

use crate::dag::ScheduledTask;
use crate::errors::Result;
use crate::sheet::plan::PlannedSheet;
use crate::types::TaskStatus;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView<'a> {
    pub id: &'a str,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub status: TaskStatus,
    pub starts_at: u64,
    pub duration: u64,
    pub assignee: &'a str,
    pub dependees: Vec<&'a str>,
    pub dependers: Vec<&'a str>,
}

impl<'a> From<ScheduledTask<'a>> for TaskView<'a> {
    fn from(st: ScheduledTask<'a>) -> Self {
        Self {
            id: &st.task.id,
            name: st.task.name.as_deref(),
            description: st.task.description.as_deref(),
            status: st.task.status,
            starts_at: st.starts_at,
            duration: st.task.duration,
            assignee: &st.task.assignee,
            dependees: st.dependee_ids(),
            dependers: st.dependent_ids(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetView<'a> {
    pub id: &'a str,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub start_time: Option<&'a str>,
    pub error: &'a str,
    /// Empty when planning failed.
    pub tasks: Vec<TaskView<'a>>,
}

impl<'a> From<&'a PlannedSheet> for SheetView<'a> {
    fn from(planned: &'a PlannedSheet) -> Self {
        let sheet = &planned.sheet;
        let tasks = planned
            .schedule()
            .map(|s| s.iter().map(TaskView::from).collect())
            .unwrap_or_default();
        Self {
            id: &sheet.id,
            name: sheet.name.as_deref(),
            description: sheet.description.as_deref(),
            start_time: sheet.start_time.as_deref(),
            error: planned.error().unwrap_or(""),
            tasks,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SheetsDocument<'a> {
    pub sheets: Vec<SheetView<'a>>,
    pub error: &'a str,
}

impl<'a> SheetsDocument<'a> {
    pub fn new(planned: &'a [PlannedSheet]) -> Self {
        Self {
            sheets: planned.iter().map(SheetView::from).collect(),
            error: "",
        }
    }
}

/// Pretty-printed `{"sheets": [...], "error": ""}` document.
pub fn render_json(planned: &[PlannedSheet]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SheetsDocument::new(planned))?)
}

/// Timeline per sheet, one line per task ordered by start time then id.
pub fn render_text(planned: &[PlannedSheet]) -> String {
    let mut out = String::new();
    for p in planned {
        let title = p.sheet.name.as_deref().unwrap_or(&p.sheet.id);
        let _ = writeln!(out, "{} ({})", title, p.sheet.id);

        match &p.outcome {
            Err(msg) => {
                let _ = writeln!(out, "  error: {msg}");
            }
            Ok(schedule) => {
                let mut rows: Vec<ScheduledTask<'_>> = schedule.iter().collect();
                rows.sort_by(|a, b| {
                    a.starts_at
                        .cmp(&b.starts_at)
                        .then_with(|| a.task.id.cmp(&b.task.id))
                });
                for t in rows {
                    let _ = writeln!(
                        out,
                        "  {:>6} - {:<6} {:<12} {}",
                        t.starts_at,
                        t.finishes_at(),
                        t.task.assignee,
                        t.task.id
                    );
                }
                let _ = writeln!(out, "  makespan: {}", schedule.makespan());
            }
        }
    }
    out
}
