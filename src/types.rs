use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Progress marker carried through from the task source.
///
/// Scheduling never looks at it; it is only echoed back to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Idle,
    Ongoing,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Idle => "idle",
            TaskStatus::Ongoing => "ongoing",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "idle" => Ok(TaskStatus::Idle),
            "ongoing" => Ok(TaskStatus::Ongoing),
            "done" => Ok(TaskStatus::Done),
            other => Err(format!(
                "invalid task status: {other} (expected \"idle\", \"ongoing\" or \"done\")"
            )),
        }
    }
}
