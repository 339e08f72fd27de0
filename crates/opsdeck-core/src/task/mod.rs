//! Task board domain model
//!
//! Tasks represent multi-step ops work attributed to language-model workers.
//! This module defines:
//! - Task and Step entities with their status lifecycles
//! - Construction via TaskFactory and the monotonic IdGenerator
//! - The TaskBoard collection that owns all live tasks

mod board;
mod factory;

pub use board::TaskBoard;
pub use factory::{default_pipeline, IdGenerator, TaskFactory, INITIAL_TASK_PROGRESS};

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique task identifier, issued monotonically and never reused
pub type TaskId = u64;

/// Worker label applied when a plan line names no worker
pub const DEFAULT_WORKER: &str = "GPT-4";

/// Progress a step starts from when it begins running
pub const INITIAL_STEP_PROGRESS: f64 = 5.0;

/// Lifecycle of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Queued,
    Running,
    Complete,
}

/// Lifecycle of a single pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Queued,
    Running,
    Complete,
}

/// One stage of a task's pipeline, assigned to a worker-model label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub status: StepStatus,
    /// Worker-model label. Cosmetic in the simulation: no model is invoked.
    pub llm: String,
    /// None while queued; 100 once complete
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub progress: Option<f64>,
    /// Populated once the step starts running
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration: Option<String>,
}

impl Step {
    /// Create a queued step with no progress or duration yet
    pub fn queued(name: impl Into<String>, llm: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Queued,
            llm: llm.into(),
            progress: None,
            duration: None,
        }
    }

    /// Create a step already running at its initial progress
    pub fn running(name: impl Into<String>, llm: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Running,
            llm: llm.into(),
            progress: Some(INITIAL_STEP_PROGRESS),
            duration: Some("0s".to_string()),
        }
    }

    /// Promote a queued step definition to running in place
    pub fn start(&mut self) {
        self.status = StepStatus::Running;
        self.progress = Some(self.progress.unwrap_or(INITIAL_STEP_PROGRESS));
        self.duration.get_or_insert_with(|| "0s".to_string());
    }

    pub fn is_complete(&self) -> bool {
        self.status == StepStatus::Complete
    }
}

/// A user-visible unit of ops work composed of ordered steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    /// Owning user identifier
    pub owner: String,
    pub status: TaskStatus,
    /// Overall progress, 0-100, fractional
    pub progress: f64,
    /// Worker-model label currently most active on this task
    pub llm: String,
    pub started_at: DateTime<Utc>,
    /// Human-readable elapsed time, recomputed on each tick
    pub duration: String,
    pub steps: Vec<Step>,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        self.status == TaskStatus::Complete
    }

    /// Count of steps that have finished
    pub fn steps_completed(&self) -> usize {
        self.steps.iter().filter(|s| s.is_complete()).count()
    }

    /// Whether every step in the pipeline has finished
    pub fn all_steps_complete(&self) -> bool {
        self.steps.iter().all(Step::is_complete)
    }

    /// First currently-running step, if any
    pub fn active_step(&self) -> Option<&Step> {
        self.steps.iter().find(|s| s.status == StepStatus::Running)
    }
}

// Task identity is its id; two snapshots of the same task compare equal.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
