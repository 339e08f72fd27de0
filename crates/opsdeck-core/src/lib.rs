//! Opsdeck Core - ops-task monitoring with simulated pipeline progress
//!
//! This crate provides the core functionality for the Opsdeck dashboard:
//! - Task and step entities with their status lifecycles
//! - A tick-driven progress simulation with injectable randomness and clock
//! - A chat flow whose templated proposals derive back into pipelines
//! - The dashboard service tying creation and ticking together
//!
//! No language model is ever invoked: work rates are simulated numerically
//! and the chat "AI" is a fixed template. Presentation is a separate host
//! concern; this crate only produces and consumes structured snapshots.

pub mod chat;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod formatting;
pub mod simulation;
pub mod task;

pub use chat::{derive_pipeline, plan_reply, ChatMessage, ChatRole, ChatSession};
pub use config::{ChatConfig, Config, ConfigManager, GeneralConfig, SimulationConfig};
pub use dashboard::{Dashboard, SharedDashboard};
pub use error::{Error, Result};
pub use formatting::{elapsed_between, format_elapsed};
pub use simulation::{tick, tick_task, RandomSource, SequenceRandom, ThreadRandom};
pub use task::{
    default_pipeline, IdGenerator, Step, StepStatus, Task, TaskBoard, TaskFactory, TaskId,
    TaskStatus, DEFAULT_WORKER,
};
