//! Dashboard service - task creation and tick application
//!
//! Owns the factory and the board, and is the "caller" the error contract
//! talks about: blank names and underivable plans are rejected here, before
//! the factory is involved.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::chat::ChatSession;
use crate::error::{Error, Result};
use crate::simulation::{self, RandomSource};
use crate::task::{Step, Task, TaskBoard, TaskFactory, TaskId};

/// Shared handle hosts pass between their chat flow and their tick loop.
///
/// The tick loop is the sole writer of task state after creation; creation
/// and ticking interleave only at lock boundaries.
pub type SharedDashboard = Arc<RwLock<Dashboard>>;

/// The monitoring surface: all live tasks plus the means to create more
pub struct Dashboard {
    factory: TaskFactory,
    board: TaskBoard,
}

impl Dashboard {
    pub fn new(factory: TaskFactory) -> Self {
        Self {
            factory,
            board: TaskBoard::new(),
        }
    }

    /// Wrap in the shared handle used by hosts
    pub fn into_shared(self) -> SharedDashboard {
        Arc::new(RwLock::new(self))
    }

    /// Create a task with the default four-stage pipeline
    pub fn create_task(&mut self, name: &str) -> Result<Task> {
        self.create_task_with_pipeline(name, None)
    }

    /// Create a task with an explicit pipeline
    pub fn create_task_with_pipeline(
        &mut self,
        name: &str,
        pipeline: Option<Vec<Step>>,
    ) -> Result<Task> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Task("task name cannot be empty".to_string()));
        }

        let task = self.factory.create(name, pipeline);
        tracing::info!(id = task.id, name = %task.name, "task created");
        self.board.insert(task.clone());
        Ok(task)
    }

    /// Create a task from the pipeline proposed in a chat session.
    ///
    /// Declines when the transcript holds no usable plan; falling back to
    /// `create_task` instead is the host's choice.
    pub fn create_task_from_chat(&mut self, name: &str, session: &ChatSession) -> Result<Task> {
        match session.proposed_pipeline() {
            Some(steps) => self.create_task_with_pipeline(name, Some(steps)),
            None => Err(Error::Chat(
                "no derivable plan in the transcript".to_string(),
            )),
        }
    }

    /// Advance every task one tick, replacing the board snapshot
    pub fn tick(&mut self, now: DateTime<Utc>, rng: &mut dyn RandomSource) {
        let ticked = simulation::tick(&self.board.snapshot(), now, rng);
        self.board.replace(ticked);
    }

    /// Tasks in display order, newest first
    pub fn snapshot(&self) -> Vec<Task> {
        self.board.snapshot()
    }

    /// Snapshot serialized for the presentation layer
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.board.get(id)
    }

    /// Remove a task; the next tick simply no longer sees it
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        self.board.remove(id)
    }

    pub fn task_count(&self) -> usize {
        self.board.len()
    }

    /// Whether every task on the board has completed
    pub fn all_complete(&self) -> bool {
        self.board.snapshot().iter().all(Task::is_complete)
    }
}
