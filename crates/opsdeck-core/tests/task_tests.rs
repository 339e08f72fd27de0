//! Task factory, board, and dashboard service integration tests

use chrono::{Duration, TimeZone, Utc};

use opsdeck_core::chat::ChatSession;
use opsdeck_core::simulation::SequenceRandom;
use opsdeck_core::task::{default_pipeline, Step, StepStatus, TaskFactory, TaskStatus};
use opsdeck_core::{Dashboard, Error};

fn dashboard() -> Dashboard {
    Dashboard::new(TaskFactory::new("operator"))
}

mod factory_tests {
    use super::*;

    #[test]
    fn test_default_pipeline_shape() {
        let steps = default_pipeline();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].name, "Ingest Requirements");
        assert_eq!(steps[0].status, StepStatus::Running);
        assert!(steps[1..]
            .iter()
            .all(|s| s.status == StepStatus::Queued));
    }

    #[test]
    fn test_audit_logs_example() {
        let factory = TaskFactory::new("operator");
        let task = factory.create("Audit Logs", None);

        assert_eq!(task.name, "Audit Logs");
        assert_eq!(task.status, TaskStatus::Running);
        assert_eq!(task.progress, 5.0);
        assert_eq!(task.llm, default_pipeline()[0].llm);
        assert_eq!(task.steps.len(), 4);
    }

    #[test]
    fn test_each_task_gets_a_fresh_id() {
        let factory = TaskFactory::new("operator");
        let a = factory.create("First", None);
        let b = factory.create("Second", None);
        let c = factory.create("Third", None);
        assert!(a.id < b.id && b.id < c.id);
    }
}

mod dashboard_tests {
    use super::*;

    #[test]
    fn test_create_task_rejects_blank_names() {
        let mut dash = dashboard();
        assert!(matches!(dash.create_task(""), Err(Error::Task(_))));
        assert!(matches!(dash.create_task("   "), Err(Error::Task(_))));
        assert_eq!(dash.task_count(), 0);
    }

    #[test]
    fn test_create_task_trims_the_name() {
        let mut dash = dashboard();
        let task = dash.create_task("  Audit Logs  ").unwrap();
        assert_eq!(task.name, "Audit Logs");
    }

    #[test]
    fn test_snapshot_is_newest_first() {
        let mut dash = dashboard();
        let first = dash.create_task("First").unwrap();
        let second = dash.create_task("Second").unwrap();
        let third = dash.create_task("Third").unwrap();

        let snapshot = dash.snapshot();
        assert_eq!(
            snapshot.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![third.id, second.id, first.id]
        );
    }

    #[test]
    fn test_remove_between_ticks_is_tolerated() {
        let mut dash = dashboard();
        let keep = dash.create_task("Keep").unwrap();
        let drop = dash.create_task("Drop").unwrap();

        let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut rng = SequenceRandom::new([0.5]);
        dash.tick(start + Duration::seconds(1), &mut rng);

        assert!(dash.remove_task(drop.id).is_some());
        dash.tick(start + Duration::seconds(2), &mut rng);

        assert_eq!(dash.task_count(), 1);
        assert!(dash.get_task(keep.id).is_some());
        assert!(dash.get_task(drop.id).is_none());
    }

    #[test]
    fn test_create_task_from_chat_declines_without_plan() {
        let mut dash = dashboard();
        let session = ChatSession::new();
        let result = dash.create_task_from_chat("Audit Logs", &session);
        assert!(matches!(result, Err(Error::Chat(_))));
    }

    #[tokio::test]
    async fn test_create_task_from_chat_uses_derived_steps() {
        let mut dash = dashboard();
        let mut session = ChatSession::new().with_reply_delay(std::time::Duration::ZERO);
        session.send_message("rotate the api keys").await;

        let task = dash
            .create_task_from_chat("Rotate Keys", &session)
            .unwrap();

        assert_eq!(task.steps.len(), 4);
        assert_eq!(task.steps[0].name, "Ingest Inputs");
        assert_eq!(task.steps[0].status, StepStatus::Running);
        assert_eq!(task.llm, "GPT-4");
    }

    #[test]
    fn test_snapshot_serializes_for_the_frontend() {
        let mut dash = dashboard();
        dash.create_task("Audit Logs").unwrap();

        let json = dash.snapshot_json().unwrap();
        assert!(json.contains("\"Audit Logs\""));
        assert!(json.contains("\"running\""));
        // Queued steps carry no progress field at all.
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let steps = value[0]["steps"].as_array().unwrap();
        assert!(steps[1].get("progress").is_none());
    }

    #[test]
    fn test_explicit_pipeline_is_used_verbatim() {
        let mut dash = dashboard();
        let steps = vec![
            Step::running("Collect Data", "Kimi K2"),
            Step::queued("Summarize", "Claude Sonnet 4.5"),
        ];
        let task = dash
            .create_task_with_pipeline("Weekly Report", Some(steps))
            .unwrap();

        assert_eq!(task.steps.len(), 2);
        assert_eq!(task.llm, "Kimi K2");
    }
}
