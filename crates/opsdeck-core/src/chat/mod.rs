//! Chat-driven pipeline flow
//!
//! The chat side of the dashboard is deliberately small: a transcript of
//! user/ai messages, a templated reply planner standing in for a real model,
//! and a deriver that parses the latest proposal back into pipeline steps.

mod deriver;
mod planner;
mod session;

pub use deriver::{derive_pipeline, parse_plan_line, split_worker_label};
pub use planner::plan_reply;
pub use session::ChatSession;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

/// One message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a user-authored message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an ai-authored message
    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Ai, content)
    }
}
