//! futask CLI - task runner for the futil package

use clap::Parser;
use colored::Colorize;

use futask::{executor, FixSuggestion, Task, TaskError};

#[derive(Parser)]
#[command(name = "futask")]
#[command(about = "Task runner for the futil package")]
#[command(version)]
struct Cli {
    /// Task to run: test, build, install or uninstall
    #[arg(value_name = "TASK")]
    task: String,
}

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries only child output and the
    // build completion marker.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match dispatch(&cli.task).await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            if let Some(suggestion) = e.fix_suggestion() {
                eprintln!("  {} {}", "Fix:".yellow(), suggestion);
            }
            std::process::exit(1);
        }
    }
}

/// Parse the task name and run its step sequence from the current directory,
/// which is expected to be the repository root.
async fn dispatch(name: &str) -> Result<i32, TaskError> {
    let task: Task = name.parse()?;
    let root = std::env::current_dir()?;
    executor::run(task, &root).await
}
