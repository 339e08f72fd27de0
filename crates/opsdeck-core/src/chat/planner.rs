//! Reply planner - templated pipeline proposals
//!
//! A stateless stand-in for a planning model: every request gets the same
//! four-stage proposal, formatted so the deriver can parse it back into
//! steps. No model is invoked anywhere in this crate.

/// Produce the canned four-step proposal for an input description
pub fn plan_reply(description: &str) -> String {
    format!(
        "Here's the pipeline I'd run for \"{}\":\n\n\
         1. Ingest Inputs — GPT-4\n\
         2. Plan & Branch — Claude Sonnet 4.5\n\
         3. Execute Tools — Kimi K2\n\
         4. Verify & Report — GPT-4\n\n\
         Say the word and I'll spin it up as a task.",
        description.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{derive_pipeline, ChatMessage};
    use crate::task::StepStatus;

    #[test]
    fn test_reply_echoes_description() {
        let reply = plan_reply("  rotate the api keys  ");
        assert!(reply.contains("\"rotate the api keys\""));
    }

    #[test]
    fn test_reply_is_derivable() {
        let messages = vec![ChatMessage::ai(plan_reply("rotate the api keys"))];
        let steps = derive_pipeline(&messages).expect("template must parse");

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].name, "Ingest Inputs");
        assert_eq!(steps[0].llm, "GPT-4");
        assert_eq!(steps[0].status, StepStatus::Running);
        assert_eq!(steps[1].name, "Plan & Branch");
        assert_eq!(steps[1].llm, "Claude Sonnet 4.5");
        assert_eq!(steps[2].llm, "Kimi K2");
        assert_eq!(steps[3].name, "Verify & Report");
        assert!(steps[1..]
            .iter()
            .all(|s| s.status == StepStatus::Queued));
    }
}
