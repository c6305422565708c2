// src/dag/task.rs

//! Task records as supplied by the task source, and the validated [`Task`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RunsheetError};
use crate::types::TaskStatus;

/// Separator used in a record's `dependees` string, e.g. `"t1|t2"`.
pub const DEPENDEE_DELIMITER: char = '|';

/// One raw task row, before any validation.
///
/// Every field is lenient on purpose so that a malformed row is reported by
/// [`Task::from_record`] with the task id and rule, instead of failing
/// deserialization of the whole sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: TaskStatus,

    /// Time units; must be present and positive.
    #[serde(default)]
    pub duration: Option<i64>,

    #[serde(default)]
    pub assignee: String,

    /// Ids of the tasks that must finish first, joined by `|`.
    #[serde(default)]
    pub dependees: Option<String>,
}

/// A validated unit of work. Dependency links live in
/// [`TaskGraph`](crate::dag::TaskGraph), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub duration: u64,
    pub assignee: String,
}

impl Task {
    /// Validate the per-task rules and build a [`Task`].
    ///
    /// Rules are checked in order: non-blank id, non-blank assignee,
    /// positive duration, no delimiter in the id.
    pub fn from_record(record: &TaskRecord) -> Result<Self> {
        let id = record.id.as_str();

        if id.trim().is_empty() {
            return Err(RunsheetError::validation(id, "task id cannot be blank"));
        }
        if record.assignee.trim().is_empty() {
            return Err(RunsheetError::validation(
                id,
                format!("task '{id}' must have an assignee"),
            ));
        }
        let duration = match record.duration {
            Some(d) if d > 0 => d as u64,
            _ => {
                return Err(RunsheetError::validation(
                    id,
                    format!("duration of task '{id}' must be positive integer"),
                ));
            }
        };
        if id.contains(DEPENDEE_DELIMITER) {
            return Err(RunsheetError::delimiter_in_id(id));
        }

        Ok(Self {
            id: id.to_string(),
            name: record.name.clone(),
            description: record.description.clone(),
            status: record.status,
            duration,
            assignee: record.assignee.clone(),
        })
    }
}

/// Split a `dependees` string into ids, keeping declaration order.
///
/// `None` and `""` both mean "no dependees".
pub fn parse_dependees(task: &str, raw: Option<&str>) -> Result<Vec<String>> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(Vec::new()),
    };

    let mut seen: HashSet<&str> = HashSet::new();
    let mut ids = Vec::new();

    for dep in raw.split(DEPENDEE_DELIMITER) {
        if dep.trim().is_empty() {
            return Err(RunsheetError::BlankDependee(task.to_string()));
        }
        if dep == task {
            return Err(RunsheetError::SelfDependency(task.to_string()));
        }
        if !seen.insert(dep) {
            return Err(RunsheetError::DuplicateDependency {
                task: task.to_string(),
                dependee: dep.to_string(),
            });
        }
        ids.push(dep.to_string());
    }

    Ok(ids)
}
