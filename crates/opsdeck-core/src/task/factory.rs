//! Task factory - constructs new tasks with fresh identifiers

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use super::{Step, Task, TaskId, TaskStatus, DEFAULT_WORKER};

/// Overall progress a task starts from
pub const INITIAL_TASK_PROGRESS: f64 = 5.0;

/// Monotonic task id source.
///
/// An explicit object instead of ambient global state so hosts own exactly
/// one and tests can seed it. Ids are process-wide unique for the generator's
/// lifetime and never reused.
#[derive(Debug)]
pub struct IdGenerator(AtomicU64);

impl IdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start issuing ids from a specific value
    pub fn starting_at(first: TaskId) -> Self {
        Self(AtomicU64::new(first))
    }

    /// Issue the next id
    pub fn next_id(&self) -> TaskId {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Constructs tasks from a name, owner, and an optional explicit pipeline
pub struct TaskFactory {
    ids: IdGenerator,
    default_owner: String,
}

impl TaskFactory {
    pub fn new(default_owner: impl Into<String>) -> Self {
        Self {
            ids: IdGenerator::new(),
            default_owner: default_owner.into(),
        }
    }

    /// Use a pre-seeded id generator (tests, or hosts resuming a counter)
    pub fn with_ids(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Create a task owned by the default user, started now.
    ///
    /// The name is assumed non-empty; callers reject blank input before
    /// getting here.
    pub fn create(&self, name: impl Into<String>, pipeline: Option<Vec<Step>>) -> Task {
        self.create_at(name, self.default_owner.clone(), pipeline, Utc::now())
    }

    /// Create a task with every input explicit, including the start time
    pub fn create_at(
        &self,
        name: impl Into<String>,
        owner: impl Into<String>,
        pipeline: Option<Vec<Step>>,
        now: DateTime<Utc>,
    ) -> Task {
        let steps = pipeline.unwrap_or_else(default_pipeline);
        let llm = steps
            .iter()
            .find(|s| s.status == super::StepStatus::Running)
            .map(|s| s.llm.clone())
            .unwrap_or_else(|| DEFAULT_WORKER.to_string());

        Task {
            id: self.ids.next_id(),
            name: name.into(),
            owner: owner.into(),
            status: TaskStatus::Running,
            progress: INITIAL_TASK_PROGRESS,
            llm,
            started_at: now,
            duration: "0s".to_string(),
            steps,
        }
    }
}

/// The fixed four-stage pipeline used when no explicit one is supplied
pub fn default_pipeline() -> Vec<Step> {
    vec![
        Step::running("Ingest Requirements", "GPT-4"),
        Step::queued("Draft Approach", "Claude Sonnet 4.5"),
        Step::queued("Execute Tools", "Kimi K2"),
        Step::queued("Verify & Report", "GPT-4"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::StepStatus;

    #[test]
    fn test_ids_are_monotonic() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn test_ids_can_be_seeded() {
        let ids = IdGenerator::starting_at(100);
        assert_eq!(ids.next_id(), 100);
        assert_eq!(ids.next_id(), 101);
    }

    #[test]
    fn test_create_with_default_pipeline() {
        let factory = TaskFactory::new("operator");
        let task = factory.create("Audit Logs", None);

        assert_eq!(task.status, TaskStatus::Running);
        assert_eq!(task.progress, INITIAL_TASK_PROGRESS);
        assert_eq!(task.owner, "operator");
        assert_eq!(task.duration, "0s");
        assert_eq!(task.steps.len(), 4);
        assert_eq!(task.steps[0].name, "Ingest Requirements");
        assert_eq!(task.steps[0].status, StepStatus::Running);
        assert!(task.steps[1..]
            .iter()
            .all(|s| s.status == StepStatus::Queued));
        // Primary worker comes from the first running step
        assert_eq!(task.llm, task.steps[0].llm);
    }

    #[test]
    fn test_create_with_explicit_pipeline() {
        let factory = TaskFactory::new("operator");
        let steps = vec![
            Step::running("Collect Data", "Kimi K2"),
            Step::queued("Summarize", "Claude Sonnet 4.5"),
        ];
        let task = factory.create("Weekly Report", Some(steps));

        assert_eq!(task.steps.len(), 2);
        assert_eq!(task.llm, "Kimi K2");
    }

    #[test]
    fn test_llm_falls_back_when_nothing_runs() {
        let factory = TaskFactory::new("operator");
        let steps = vec![Step::queued("Collect Data", "Kimi K2")];
        let task = factory.create("Weekly Report", Some(steps));
        assert_eq!(task.llm, DEFAULT_WORKER);
    }
}
