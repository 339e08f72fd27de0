//! Pipeline deriver - extracts structured steps from a chat proposal
//!
//! Parsing is split into two independently testable stages: line
//! classification (is this line `N. rest`?) and worker-label splitting on
//! the `" — "` delimiter. Malformed lines degrade instead of failing: a
//! missing label falls back to the default worker.

use std::sync::LazyLock;

use regex::Regex;

use crate::task::{Step, DEFAULT_WORKER};

use super::{ChatMessage, ChatRole};

/// Separator between a step name and its worker label in plan lines
const WORKER_SEPARATOR: &str = " — ";

static PLAN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.+)$").expect("plan line pattern is valid"));

/// Derive an ordered pipeline from a chat transcript.
///
/// Scans from the most recent message backwards for an ai message containing
/// a numbered list (a line starting with `1.`). Returns `None` when no such
/// message exists. A matching message whose lines all fail to parse yields
/// an empty vector; callers treat that as "no usable plan".
pub fn derive_pipeline(messages: &[ChatMessage]) -> Option<Vec<Step>> {
    let plan = messages.iter().rev().find(|m| {
        m.role == ChatRole::Ai
            && m.content
                .lines()
                .any(|line| line.trim_start().starts_with("1."))
    })?;

    let mut steps: Vec<Step> = plan
        .content
        .lines()
        .filter_map(|line| parse_plan_line(line))
        .map(|rest| {
            let (name, llm) = split_worker_label(rest);
            Step::queued(name, llm)
        })
        .collect();

    if let Some(first) = steps.first_mut() {
        first.start();
    }

    Some(steps)
}

/// Classify a line as `N. rest`, returning the rest
pub fn parse_plan_line(line: &str) -> Option<&str> {
    PLAN_LINE
        .captures(line.trim())
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .filter(|rest| !rest.trim().is_empty())
}

/// Split `"name — worker"` into its parts, defaulting the worker label
pub fn split_worker_label(rest: &str) -> (String, String) {
    match rest.split_once(WORKER_SEPARATOR) {
        Some((name, llm)) => (name.trim().to_string(), llm.trim().to_string()),
        None => (rest.trim().to_string(), DEFAULT_WORKER.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_line_accepts_numbered_lines() {
        assert_eq!(parse_plan_line("1. Ingest Inputs — GPT-4"), Some("Ingest Inputs — GPT-4"));
        assert_eq!(parse_plan_line("  12. Verify"), Some("Verify"));
    }

    #[test]
    fn test_parse_plan_line_rejects_everything_else() {
        assert_eq!(parse_plan_line("Ingest Inputs"), None);
        assert_eq!(parse_plan_line("- bullet point"), None);
        assert_eq!(parse_plan_line("1x. typo"), None);
        assert_eq!(parse_plan_line("1."), None);
        assert_eq!(parse_plan_line(""), None);
    }

    #[test]
    fn test_split_worker_label() {
        let (name, llm) = split_worker_label("Plan & Branch — Claude Sonnet 4.5");
        assert_eq!(name, "Plan & Branch");
        assert_eq!(llm, "Claude Sonnet 4.5");
    }

    #[test]
    fn test_split_worker_label_defaults() {
        let (name, llm) = split_worker_label("Collect Data");
        assert_eq!(name, "Collect Data");
        assert_eq!(llm, DEFAULT_WORKER);
    }
}
