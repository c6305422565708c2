#![allow(dead_code)]

use runsheet::config::SheetConfig;
use runsheet::dag::TaskRecord;
use runsheet::types::TaskStatus;

/// Builder for `TaskRecord` with a valid default shape
/// (assignee `"a"`, duration `1`, no dependees).
pub struct TaskRecordBuilder {
    record: TaskRecord,
}

impl TaskRecordBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: TaskRecord {
                id: id.to_string(),
                name: None,
                description: None,
                status: TaskStatus::Idle,
                duration: Some(1),
                assignee: "a".to_string(),
                dependees: None,
            },
        }
    }

    pub fn assignee(mut self, assignee: &str) -> Self {
        self.record.assignee = assignee.to_string();
        self
    }

    pub fn duration(mut self, duration: i64) -> Self {
        self.record.duration = Some(duration);
        self
    }

    pub fn no_duration(mut self) -> Self {
        self.record.duration = None;
        self
    }

    /// Append one dependee id to the `|`-joined list.
    pub fn after(mut self, dep: &str) -> Self {
        let deps = self.record.dependees.get_or_insert_with(String::new);
        if !deps.is_empty() {
            deps.push('|');
        }
        deps.push_str(dep);
        self
    }

    /// Set the raw dependee string verbatim.
    pub fn dependees_raw(mut self, raw: &str) -> Self {
        self.record.dependees = Some(raw.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = Some(name.to_string());
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn build(self) -> TaskRecord {
        self.record
    }
}

/// Builder for `SheetConfig`.
pub struct SheetBuilder {
    sheet: SheetConfig,
}

impl SheetBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            sheet: SheetConfig {
                id: id.to_string(),
                ..SheetConfig::default()
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.sheet.name = Some(name.to_string());
        self
    }

    pub fn start_time(mut self, start: &str) -> Self {
        self.sheet.start_time = Some(start.to_string());
        self
    }

    pub fn with_task(mut self, task: TaskRecord) -> Self {
        self.sheet.task.push(task);
        self
    }

    pub fn build(self) -> SheetConfig {
        self.sheet
    }
}

/// The four-task fixture: `t1`(a,2), `t2`(a,1) after t1,
/// `t3`(a,1) after t1/t2/t4, `t4`(b,2) after t1.
pub fn four_task_fixture() -> Vec<TaskRecord> {
    vec![
        TaskRecordBuilder::new("t1").duration(2).build(),
        TaskRecordBuilder::new("t2").after("t1").build(),
        TaskRecordBuilder::new("t3")
            .after("t1")
            .after("t2")
            .after("t4")
            .build(),
        TaskRecordBuilder::new("t4")
            .assignee("b")
            .duration(2)
            .after("t1")
            .build(),
    ]
}
