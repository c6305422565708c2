// src/dag/mod.rs

//! Task dependency graph and scheduling.
//!
//! - [`task`] validates raw task records and parses dependee lists.
//! - [`graph`] resolves those lists into an id-ordered arena with edges in
//!   both directions.
//! - [`validate`] rejects graphs containing a dependency cycle.
//! - [`scheduler`] assigns start times with a greedy earliest-start rule.

pub mod graph;
pub mod scheduler;
pub mod task;
pub mod validate;

pub use graph::TaskGraph;
pub use scheduler::{Schedule, ScheduledTask, schedule};
pub use task::{DEPENDEE_DELIMITER, Task, TaskRecord, parse_dependees};
pub use validate::{find_cycle, validate_acyclic};
