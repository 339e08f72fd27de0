//! Task board - the collection owning all live tasks

use std::collections::HashMap;

use super::{Task, TaskId};

/// Id-keyed set of tasks.
///
/// Insertion order is irrelevant; the display order is newest-first, which
/// the monotonic ids make equivalent to descending id. Tasks may be removed
/// at any time; the simulation simply no longer sees them on the next tick.
#[derive(Debug, Default)]
pub struct TaskBoard {
    tasks: HashMap<TaskId, Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, task: Task) {
        self.tasks.insert(task.id, task);
    }

    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.remove(&id)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in display order, newest first
    pub fn snapshot(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.values().cloned().collect();
        tasks.sort_by(|a, b| b.id.cmp(&a.id));
        tasks
    }

    /// Replace the whole collection with a ticked snapshot
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks.into_iter().map(|t| (t.id, t)).collect();
    }
}
