//! Chat session - transcript plus the simulated reply flow

use std::time::Duration;

use crate::task::Step;

use super::{derive_pipeline, plan_reply, ChatMessage};

/// Delay before the templated reply is appended, emulating model latency
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(600);

/// An append-only conversation between the user and the templated planner.
///
/// `send_message` takes `&mut self`, so replies are appended strictly in
/// conversation order: exactly one ai reply per user message, after all
/// earlier messages' replies.
pub struct ChatSession {
    pub id: String,
    pub messages: Vec<ChatMessage>,
    reply_delay: Duration,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            messages: Vec::new(),
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }

    /// Override the simulated reply latency
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Append a user message, wait the simulated latency, and append the
    /// planner's reply. Returns the reply.
    pub async fn send_message(&mut self, content: impl Into<String>) -> ChatMessage {
        let content = content.into();
        self.messages.push(ChatMessage::user(content.clone()));

        tokio::time::sleep(self.reply_delay).await;

        let reply = ChatMessage::ai(plan_reply(&content));
        self.messages.push(reply.clone());
        reply
    }

    /// The pipeline derived from the latest proposal, if a usable one exists.
    ///
    /// Collapses "no plan message" and "plan message with no parseable
    /// lines" into `None`.
    pub fn proposed_pipeline(&self) -> Option<Vec<Step>> {
        derive_pipeline(&self.messages).filter(|steps| !steps.is_empty())
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
