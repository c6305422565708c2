// src/dag/scheduler.rs

use std::collections::HashMap;

use tracing::{debug, error, trace};

use crate::dag::graph::TaskGraph;
use crate::dag::task::Task;
use crate::errors::{Result, RunsheetError};

/// Start times for every task of a [`TaskGraph`].
///
/// Owns the graph it was computed from; `starts_at[i]` belongs to
/// `graph.task(i)`.
#[derive(Debug, Clone)]
pub struct Schedule {
    graph: TaskGraph,
    starts_at: Vec<u64>,
    finishes_at: Vec<u64>,
}

/// Read-only view of one scheduled task.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledTask<'a> {
    pub task: &'a Task,
    pub starts_at: u64,
    finishes_at: u64,
    index: usize,
    graph: &'a TaskGraph,
}

impl<'a> ScheduledTask<'a> {
    /// Exclusive end of the task's slot.
    pub fn finishes_at(&self) -> u64 {
        self.finishes_at
    }

    pub fn dependee_ids(&self) -> Vec<&'a str> {
        self.graph.dependee_ids(self.index)
    }

    pub fn dependent_ids(&self) -> Vec<&'a str> {
        self.graph.dependent_ids(self.index)
    }
}

/// Greedy list scheduling of an acyclic task graph.
///
/// Repeatedly picks, among the tasks whose dependees are all placed, the one
/// that can start earliest given its dependees' finish times and its
/// assignee's availability. Ties go to the smallest task id.
///
/// The graph must have passed [`validate_acyclic`](crate::dag::validate_acyclic);
/// a cyclic graph stalls the loop and yields [`RunsheetError::NoReadyTask`].
/// A finish time beyond `u64::MAX` yields [`RunsheetError::ScheduleOverflow`].
pub fn schedule(graph: TaskGraph) -> Result<Schedule> {
    let n = graph.len();
    let mut starts_at = vec![0u64; n];
    // Filled alongside `starts_at`; every entry has passed `checked_add`.
    let mut finishes_at = vec![0u64; n];
    let mut scheduled = vec![false; n];
    // Ascending index order is ascending id order.
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut assignee_free_at: HashMap<&str, u64> = HashMap::new();

    while !remaining.is_empty() {
        let mut picked: Option<(usize, usize, u64)> = None;

        'candidates: for (pos, &idx) in remaining.iter().enumerate() {
            let task = graph.task(idx);
            let mut earliest = 0u64;
            for &d in graph.dependees_of(idx) {
                if !scheduled[d] {
                    continue 'candidates;
                }
                earliest = earliest.max(finishes_at[d]);
            }
            let free_at = assignee_free_at
                .get(task.assignee.as_str())
                .copied()
                .unwrap_or(0);
            let start = earliest.max(free_at);

            if picked.is_none_or(|(_, _, best)| start < best) {
                picked = Some((pos, idx, start));
            }
        }

        let Some((pos, idx, start)) = picked else {
            let remaining: Vec<String> = remaining
                .iter()
                .map(|&i| graph.task(i).id.clone())
                .collect();
            error!(?remaining, "no ready task while tasks remain; graph is not acyclic");
            return Err(RunsheetError::NoReadyTask { remaining });
        };

        let task = graph.task(idx);
        let Some(finish) = start.checked_add(task.duration) else {
            return Err(RunsheetError::ScheduleOverflow {
                task: task.id.clone(),
            });
        };
        trace!(task = %task.id, assignee = %task.assignee, start, finish, "scheduled task");
        starts_at[idx] = start;
        finishes_at[idx] = finish;
        scheduled[idx] = true;
        assignee_free_at.insert(task.assignee.as_str(), finish);
        remaining.remove(pos);
    }

    let schedule = Schedule {
        graph,
        starts_at,
        finishes_at,
    };
    debug!(
        tasks = schedule.len(),
        makespan = schedule.makespan(),
        "schedule computed"
    );
    Ok(schedule)
}

impl Schedule {
    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.starts_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts_at.is_empty()
    }

    pub fn starts_at(&self, idx: usize) -> u64 {
        self.starts_at[idx]
    }

    pub fn start_of(&self, id: &str) -> Option<u64> {
        self.graph.index_of(id).map(|i| self.starts_at[i])
    }

    /// Time at which the last task finishes; `0` for an empty schedule.
    pub fn makespan(&self) -> u64 {
        self.iter().map(|t| t.finishes_at()).max().unwrap_or(0)
    }

    /// Scheduled tasks in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = ScheduledTask<'_>> + '_ {
        self.graph
            .tasks()
            .iter()
            .enumerate()
            .map(move |(index, task)| ScheduledTask {
                task,
                starts_at: self.starts_at[index],
                finishes_at: self.finishes_at[index],
                index,
                graph: &self.graph,
            })
    }

    pub fn get(&self, id: &str) -> Option<ScheduledTask<'_>> {
        let index = self.graph.index_of(id)?;
        Some(ScheduledTask {
            task: self.graph.task(index),
            starts_at: self.starts_at[index],
            finishes_at: self.finishes_at[index],
            index,
            graph: &self.graph,
        })
    }
}
