// src/sheet/plan.rs

use tokio::task::{self, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::config::SheetConfig;
use crate::dag::{Schedule, TaskGraph, TaskRecord, schedule, validate_acyclic};
use crate::errors::Result;

/// Full pipeline for one task snapshot: build the graph, reject cycles,
/// then schedule. Either every task gets a start time or an error is
/// returned.
pub fn plan_tasks(records: &[TaskRecord]) -> Result<Schedule> {
    let graph = TaskGraph::build(records)?;
    validate_acyclic(&graph)?;
    schedule(graph)
}

/// A sheet together with the result of planning it.
#[derive(Debug, Clone)]
pub struct PlannedSheet {
    pub sheet: SheetConfig,
    /// The schedule, or the rendered error message that prevented it.
    pub outcome: std::result::Result<Schedule, String>,
}

impl PlannedSheet {
    pub fn schedule(&self) -> Option<&Schedule> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().err().map(String::as_str)
    }
}

/// Plan a single sheet, keeping a failure as the sheet's error string.
pub fn plan_sheet(sheet: SheetConfig) -> PlannedSheet {
    let outcome = match plan_tasks(&sheet.task) {
        Ok(schedule) => {
            debug!(
                sheet = %sheet.id,
                tasks = schedule.len(),
                makespan = schedule.makespan(),
                "sheet planned"
            );
            Ok(schedule)
        }
        Err(err) => {
            warn!(sheet = %sheet.id, error = %err, "sheet could not be planned");
            Err(err.to_string())
        }
    };
    PlannedSheet { sheet, outcome }
}

/// Plan every sheet concurrently, one blocking task per sheet.
///
/// Sheets share nothing, so they are planned independently; the result is
/// ordered by ascending sheet id.
pub async fn plan_sheets(sheets: Vec<SheetConfig>) -> Vec<PlannedSheet> {
    plan_sheets_with(sheets, plan_sheet).await
}

/// [`plan_sheets`] with a custom per-sheet planner.
///
/// A planner that panics only fails its own sheet: the sheet is kept with
/// the join error as its `error` string.
pub async fn plan_sheets_with<F>(sheets: Vec<SheetConfig>, planner: F) -> Vec<PlannedSheet>
where
    F: Fn(SheetConfig) -> PlannedSheet + Clone + Send + 'static,
{
    let count = sheets.len();
    let handles: Vec<(SheetConfig, JoinHandle<PlannedSheet>)> = sheets
        .into_iter()
        .map(|sheet| {
            let planner = planner.clone();
            let owned = sheet.clone();
            (sheet, task::spawn_blocking(move || planner(owned)))
        })
        .collect();

    let mut planned = Vec::with_capacity(count);
    for (sheet, handle) in handles {
        match handle.await {
            Ok(p) => planned.push(p),
            Err(err) => {
                error!(sheet = %sheet.id, error = %err, "sheet planner did not complete");
                planned.push(PlannedSheet {
                    sheet,
                    outcome: Err(format!("planning failed: {err}")),
                });
            }
        }
    }
    planned.sort_by(|a, b| a.sheet.id.cmp(&b.sheet.id));

    let failed = planned.iter().filter(|p| p.outcome.is_err()).count();
    info!(sheets = count, failed, "planned all sheets");
    planned
}
