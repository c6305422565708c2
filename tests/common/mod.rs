#![allow(dead_code)]

use runsheet::dag::Schedule;

/// `(id, startsAt)` pairs in id order, for compact assertions.
pub fn starts(schedule: &Schedule) -> Vec<(String, u64)> {
    schedule
        .iter()
        .map(|t| (t.task.id.clone(), t.starts_at))
        .collect()
}

pub fn start(schedule: &Schedule, id: &str) -> u64 {
    schedule
        .start_of(id)
        .unwrap_or_else(|| panic!("task '{id}' missing from schedule"))
}
