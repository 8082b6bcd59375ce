//! Sequential step executor.
//!
//! Walks a task's step list in order, blocking on each child process, and
//! short-circuits on the first non-zero exit. Child stdio is inherited, so
//! output and errors stream through unbuffered.

use std::path::Path;

use tokio::process::Command;
use tracing::debug;

use crate::error::TaskError;
use crate::task::{ProcessSpec, Step, Task};

/// Exit code reported when a child is terminated by a signal and carries
/// no code of its own.
const SIGNALED: i32 = 1;

/// Run a task's fixed step sequence from the given repository root.
///
/// Returns the exit code of the last step executed: 0 when every step
/// succeeded, otherwise the first non-zero child exit code (later steps
/// are never attempted). A child that cannot be spawned at all is a
/// [`TaskError::Spawn`], not an exit code.
pub async fn run(task: Task, root: &Path) -> Result<i32, TaskError> {
    debug!(%task, "dispatching");
    run_steps(task.steps(), root).await
}

/// Walk a step list sequentially, short-circuiting on the first non-zero exit.
pub async fn run_steps(steps: &[Step], root: &Path) -> Result<i32, TaskError> {
    for step in steps {
        match step {
            Step::Exec(spec) => {
                let code = exec(spec, root).await?;
                if code != 0 {
                    debug!(program = spec.program, code, "step failed, halting");
                    return Ok(code);
                }
            }
            Step::Emit(marker) => println!("{marker}"),
        }
    }
    Ok(0)
}

/// Spawn one external process with inherited stdio and wait for it.
async fn exec(spec: &ProcessSpec, root: &Path) -> Result<i32, TaskError> {
    let cwd = match spec.cwd {
        Some(sub) => root.join(sub),
        None => root.to_path_buf(),
    };
    debug!(program = spec.program, args = ?spec.args, cwd = %cwd.display(), "spawning");

    let status = Command::new(spec.program)
        .args(spec.args)
        .current_dir(&cwd)
        .status()
        .await
        .map_err(|source| TaskError::Spawn {
            program: spec.program,
            source,
        })?;

    Ok(status.code().unwrap_or(SIGNALED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn here() -> PathBuf {
        std::env::current_dir().unwrap()
    }

    #[tokio::test]
    async fn empty_sequence_succeeds() {
        let code = run_steps(&[], &here()).await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn zero_exit_propagates() {
        let steps = [Step::Exec(ProcessSpec {
            program: "true",
            args: &[],
            cwd: None,
        })];
        assert_eq!(run_steps(&steps, &here()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn nonzero_exit_propagates_unchanged() {
        let steps = [Step::Exec(ProcessSpec {
            program: "sh",
            args: &["-c", "exit 42"],
            cwd: None,
        })];
        assert_eq!(run_steps(&steps, &here()).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn failing_step_halts_the_sequence() {
        // If the second step ran, it would be a spawn error rather than
        // the first step's exit code.
        let steps = [
            Step::Exec(ProcessSpec {
                program: "false",
                args: &[],
                cwd: None,
            }),
            Step::Exec(ProcessSpec {
                program: "futask-no-such-binary",
                args: &[],
                cwd: None,
            }),
        ];
        assert_eq!(run_steps(&steps, &here()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn missing_executable_is_a_spawn_error() {
        let steps = [Step::Exec(ProcessSpec {
            program: "futask-no-such-binary",
            args: &[],
            cwd: None,
        })];
        let err = run_steps(&steps, &here()).await.unwrap_err();
        assert!(matches!(
            err,
            TaskError::Spawn {
                program: "futask-no-such-binary",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn exec_steps_run_in_their_subdirectory() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("sub")).unwrap();
        std::fs::write(root.path().join("sub/marker"), b"").unwrap();

        let steps = [Step::Exec(ProcessSpec {
            program: "sh",
            args: &["-c", "test -f marker"],
            cwd: Some("sub"),
        })];
        assert_eq!(run_steps(&steps, root.path()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_working_directory_is_a_spawn_error() {
        let root = tempfile::tempdir().unwrap();
        let steps = [Step::Exec(ProcessSpec {
            program: "true",
            args: &[],
            cwd: Some("absent"),
        })];
        assert!(run_steps(&steps, root.path()).await.is_err());
    }
}
