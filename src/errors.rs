// src/errors.rs

//! Crate-wide error type.
//!
//! Every variant aborts the whole scheduling run for its sheet: nothing is
//! scheduled when any of them is returned.

use thiserror::Error;

use crate::dag::task::DEPENDEE_DELIMITER;

#[derive(Error, Debug)]
pub enum RunsheetError {
    /// A single task record breaks one of the per-task rules.
    #[error("{rule}")]
    Validation { task: String, rule: String },

    #[error("task id '{0}' must be unique")]
    DuplicateTask(String),

    #[error("task '{0}' cannot have blank dependees")]
    BlankDependee(String),

    #[error("task '{task}' has duplicate dependee '{dependee}'")]
    DuplicateDependency { task: String, dependee: String },

    #[error("referenced task '{dependee}' is missing")]
    MissingDependency { task: String, dependee: String },

    #[error("task '{0}' cannot depend on itself")]
    SelfDependency(String),

    /// `tasks` holds the ids of one offending component, sorted.
    #[error("dependency loop detected between tasks {tasks:?}")]
    DependencyCycle { tasks: Vec<String> },

    /// The task's finish time does not fit in the time range.
    #[error("finish time of task '{task}' overflows")]
    ScheduleOverflow { task: String },

    /// Raised when the scheduler finds no ready task while some remain.
    /// Validation should make this impossible.
    #[error("internal error: no schedulable task among {remaining:?}")]
    NoReadyTask { remaining: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RunsheetError {
    pub(crate) fn validation(task: &str, rule: impl Into<String>) -> Self {
        RunsheetError::Validation {
            task: task.to_string(),
            rule: rule.into(),
        }
    }

    pub(crate) fn delimiter_in_id(task: &str) -> Self {
        Self::validation(
            task,
            format!("task id '{task}' cannot contain '{DEPENDEE_DELIMITER}'"),
        )
    }
}

pub type Result<T> = std::result::Result<T, RunsheetError>;
