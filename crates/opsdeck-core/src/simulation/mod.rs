//! Progress simulation engine
//!
//! Advances every running task and step once per tick using bounded random
//! increments. The engine is a pure snapshot transform: the caller owns the
//! schedule (a timer, an event loop, or a test harness) and injects both the
//! clock and the random source, so a tick is fully reproducible.

mod rng;

pub use rng::{RandomSource, SequenceRandom, ThreadRandom};

use chrono::{DateTime, Utc};

use crate::formatting::elapsed_between;
use crate::task::{Step, StepStatus, Task, TaskStatus};

/// Maximum overall-progress gain per tick, in percentage points
pub const TASK_INCREMENT_MAX: f64 = 6.0;

/// Maximum per-step progress gain per tick, in percentage points
pub const STEP_INCREMENT_MAX: f64 = 10.0;

/// Overall progress a task must exceed before queued steps may start
pub const PROMOTION_THRESHOLD: f64 = 10.0;

/// Per-tick chance that an eligible queued step starts running
pub const PROMOTION_PROBABILITY: f64 = 0.3;

/// Advance the whole collection one tick, producing a new snapshot
pub fn tick(tasks: &[Task], now: DateTime<Utc>, rng: &mut dyn RandomSource) -> Vec<Task> {
    tasks.iter().map(|task| tick_task(task, now, rng)).collect()
}

/// Advance a single task one tick.
///
/// Tasks that are not running pass through unchanged, so a complete task is
/// never resurrected. Steps are visited left-to-right, but promotion is
/// probabilistic per step: more than one step may run at a time.
pub fn tick_task(task: &Task, now: DateTime<Utc>, rng: &mut dyn RandomSource) -> Task {
    if task.status != TaskStatus::Running {
        return task.clone();
    }

    let mut next = task.clone();
    next.progress = (next.progress + rng.next_f64() * TASK_INCREMENT_MAX).min(100.0);

    let overall = next.progress;
    let started_at = next.started_at;
    for step in &mut next.steps {
        advance_step(step, overall, started_at, now, rng);
    }

    next.duration = elapsed_between(started_at, now);
    if let Some(active_llm) = next.active_step().map(|s| s.llm.clone()) {
        next.llm = active_llm;
    }

    if next.all_steps_complete() || next.progress >= 100.0 {
        next.progress = 100.0;
        next.status = TaskStatus::Complete;
    }

    next
}

fn advance_step(
    step: &mut Step,
    overall_progress: f64,
    started_at: DateTime<Utc>,
    now: DateTime<Utc>,
    rng: &mut dyn RandomSource,
) {
    match step.status {
        StepStatus::Running => {
            let progress = step.progress.unwrap_or(0.0);
            let progress = (progress + rng.next_f64() * STEP_INCREMENT_MAX).min(100.0);
            step.progress = Some(progress);
            step.duration = Some(elapsed_between(started_at, now));
            if progress >= 100.0 {
                step.status = StepStatus::Complete;
            }
        }
        StepStatus::Queued => {
            // Promotion only becomes possible once the task is under way,
            // and no random draw happens before that.
            if overall_progress > PROMOTION_THRESHOLD && rng.next_f64() < PROMOTION_PROBABILITY {
                step.start();
                step.duration = Some(elapsed_between(started_at, now));
            }
        }
        StepStatus::Complete => {}
    }
}
