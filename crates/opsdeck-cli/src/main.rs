//! Opsdeck CLI - headless host for the ops-task dashboard
//!
//! The core owns the state model and the algorithms; this binary owns what
//! the core deliberately does not: scheduling (the tick interval), wiring
//! config into the factory, and rendering snapshots as text.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use console::style;

use opsdeck_core::chat::ChatSession;
use opsdeck_core::config::ConfigManager;
use opsdeck_core::simulation::ThreadRandom;
use opsdeck_core::task::{StepStatus, Task, TaskFactory, TaskStatus};
use opsdeck_core::Dashboard;

#[derive(Parser)]
#[command(name = "opsdeck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ops-task dashboard with simulated pipeline progress", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a demo: propose a pipeline over chat, launch it, watch it finish
    Run {
        /// What the task should do
        #[arg(default_value = "Audit Logs")]
        name: String,

        /// Stop after this many ticks even if tasks are still running
        #[arg(long, default_value_t = 120)]
        max_ticks: u32,
    },

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "info,opsdeck_core=debug"
        } else {
            "warn"
        })
        .init();

    let manager = ConfigManager::new()?;
    let config = manager.config().clone();
    tracing::debug!(
        tick_interval_ms = config.simulation.tick_interval_ms,
        reply_delay_ms = config.chat.reply_delay_ms,
        "config loaded"
    );

    match cli.command.unwrap_or(Commands::Run {
        name: "Audit Logs".to_string(),
        max_ticks: 120,
    }) {
        Commands::Run { name, max_ticks } => run_demo(&config, &name, max_ticks).await,
        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

async fn run_demo(config: &opsdeck_core::Config, name: &str, max_ticks: u32) -> Result<()> {
    let mut dashboard = Dashboard::new(TaskFactory::new(config.general.owner.clone()));

    // Chat flow: the templated planner proposes a pipeline, the deriver
    // turns it back into steps.
    let mut session =
        ChatSession::new().with_reply_delay(Duration::from_millis(config.chat.reply_delay_ms));
    println!("{} {}", style("you:").bold(), name);
    let reply = session.send_message(name).await;
    println!("{} {}\n", style("ai:").bold().cyan(), reply.content);

    let task = dashboard.create_task_from_chat(name, &session)?;
    println!(
        "launched task #{} with {} steps\n",
        task.id,
        task.steps.len()
    );

    // The core treats ticking as a pure transform; the schedule lives here.
    let mut rng = ThreadRandom::new();
    let mut interval =
        tokio::time::interval(Duration::from_millis(config.simulation.tick_interval_ms));
    interval.tick().await; // first tick fires immediately

    for _ in 0..max_ticks {
        interval.tick().await;
        dashboard.tick(Utc::now(), &mut rng);
        render(&dashboard.snapshot());
        if dashboard.all_complete() {
            break;
        }
    }

    if dashboard.all_complete() {
        println!("\n{}", style("all tasks complete").green().bold());
    } else {
        println!("\n{}", style("stopped with tasks still running").yellow());
    }
    Ok(())
}

fn render(tasks: &[Task]) {
    for task in tasks {
        let status = match task.status {
            TaskStatus::Queued => style("queued").dim(),
            TaskStatus::Running => style("running").yellow(),
            TaskStatus::Complete => style("complete").green(),
        };
        println!(
            "#{} {} [{}] {:>5.1}% {} ({})",
            task.id,
            style(&task.name).bold(),
            status,
            task.progress,
            task.llm,
            task.duration
        );
        for step in &task.steps {
            let marker = match step.status {
                StepStatus::Queued => "·",
                StepStatus::Running => ">",
                StepStatus::Complete => "✓",
            };
            let progress = step
                .progress
                .map(|p| format!("{:>5.1}%", p))
                .unwrap_or_else(|| "    -".to_string());
            println!("    {} {} {} ({})", marker, progress, step.name, step.llm);
        }
    }
}
