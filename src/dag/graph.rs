// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::dag::task::{Task, TaskRecord, parse_dependees};
use crate::errors::{Result, RunsheetError};

/// Arena of validated tasks plus their dependency edges.
///
/// Tasks are stored sorted by ascending id, so a task's index doubles as its
/// rank in id order. Edges are index lists in both directions:
/// - `dependees[i]`: tasks that must finish before task `i` starts.
/// - `dependents[i]`: tasks that wait on task `i`.
///
/// Both lists are sorted ascending. Building a graph does not check for
/// cycles; see [`validate_acyclic`](crate::dag::validate_acyclic).
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
    dependees: Vec<Vec<usize>>,
    dependents: Vec<Vec<usize>>,
}

impl TaskGraph {
    /// Validate raw records and resolve their dependency lists.
    ///
    /// Fails fast on the first bad record (input order), then on the first
    /// unresolvable dependee (id order).
    pub fn build<'a, I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a TaskRecord>,
    {
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut parsed: Vec<(Task, Vec<String>)> = Vec::new();

        for record in records {
            let task = Task::from_record(record)?;
            if !seen_ids.insert(task.id.clone()) {
                return Err(RunsheetError::DuplicateTask(task.id));
            }
            let deps = parse_dependees(&task.id, record.dependees.as_deref())?;
            parsed.push((task, deps));
        }

        parsed.sort_by(|(a, _), (b, _)| a.id.cmp(&b.id));

        let index: HashMap<String, usize> = parsed
            .iter()
            .enumerate()
            .map(|(i, (task, _))| (task.id.clone(), i))
            .collect();

        let mut dependees: Vec<Vec<usize>> = vec![Vec::new(); parsed.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); parsed.len()];

        for (i, (task, deps)) in parsed.iter().enumerate() {
            for dep in deps {
                let Some(&d) = index.get(dep) else {
                    return Err(RunsheetError::MissingDependency {
                        task: task.id.clone(),
                        dependee: dep.clone(),
                    });
                };
                dependees[i].push(d);
                // `i` only grows, so each dependents list stays sorted.
                dependents[d].push(i);
            }
            dependees[i].sort_unstable();
        }

        let tasks: Vec<Task> = parsed.into_iter().map(|(task, _)| task).collect();
        let edge_count: usize = dependees.iter().map(Vec::len).sum();
        debug!(tasks = tasks.len(), edges = edge_count, "built task graph");

        Ok(Self {
            tasks,
            index,
            dependees,
            dependents,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks, ordered by ascending id.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, idx: usize) -> &Task {
        &self.tasks[idx]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.index_of(id).map(|i| &self.tasks[i])
    }

    /// Indices of the tasks that must finish before `idx` may start.
    pub fn dependees_of(&self, idx: usize) -> &[usize] {
        &self.dependees[idx]
    }

    /// Indices of the tasks waiting on `idx`.
    pub fn dependents_of(&self, idx: usize) -> &[usize] {
        &self.dependents[idx]
    }

    /// Dependee ids of `idx`, ascending.
    pub fn dependee_ids(&self, idx: usize) -> Vec<&str> {
        self.ids(&self.dependees[idx])
    }

    /// Dependent ids of `idx`, ascending.
    pub fn dependent_ids(&self, idx: usize) -> Vec<&str> {
        self.ids(&self.dependents[idx])
    }

    /// Every edge as `(dependee, depender)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.dependents
            .iter()
            .enumerate()
            .flat_map(|(from, tos)| tos.iter().map(move |&to| (from, to)))
    }

    fn ids(&self, indices: &[usize]) -> Vec<&str> {
        indices.iter().map(|&i| self.tasks[i].id.as_str()).collect()
    }
}
