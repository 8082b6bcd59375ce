//! The fixed task table.
//!
//! Four tasks, each mapped to a constant, ordered list of steps. The table
//! is embedded in the source; nothing about it is configurable at runtime,
//! and no user-supplied string ever reaches a command line.

use std::fmt;
use std::str::FromStr;

use crate::error::TaskError;

/// Package managed by the external toolchain.
pub const PACKAGE: &str = "futil";

/// Subdirectory holding the package sources, relative to the repository root.
pub const PACKAGE_DIR: &str = "futil";

/// Test suite entry point, relative to the repository root.
pub const TEST_SUITE: &str = "tests/test_futil.py";

/// Completion marker printed after a successful build.
pub const BUILD_MARKER: &str = "done";

/// One external process invocation: program, fixed arguments, working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub program: &'static str,
    pub args: &'static [&'static str],
    /// Subdirectory to run in, relative to the repository root.
    /// `None` means the root itself.
    pub cwd: Option<&'static str>,
}

/// One step in a task's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Spawn an external process and wait for it to exit.
    Exec(ProcessSpec),
    /// Print a literal marker line to stdout.
    Emit(&'static str),
}

/// The four dispatchable tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Run the futil test suite.
    Test,
    /// Build the futil package, then print the completion marker.
    Build,
    /// Install the futil package.
    Install,
    /// Remove the installed futil package.
    Uninstall,
}

impl Task {
    pub const ALL: [Task; 4] = [Task::Test, Task::Build, Task::Install, Task::Uninstall];

    /// The fixed step sequence for this task. Never mutated at runtime.
    pub fn steps(self) -> &'static [Step] {
        match self {
            Task::Test => &[Step::Exec(ProcessSpec {
                program: "pytest",
                args: &[TEST_SUITE],
                cwd: None,
            })],
            Task::Build => &[
                Step::Exec(ProcessSpec {
                    program: "flit",
                    args: &["build"],
                    cwd: Some(PACKAGE_DIR),
                }),
                Step::Emit(BUILD_MARKER),
            ],
            Task::Install => &[Step::Exec(ProcessSpec {
                program: "flit",
                args: &["install"],
                cwd: Some(PACKAGE_DIR),
            })],
            Task::Uninstall => &[Step::Exec(ProcessSpec {
                program: "pip",
                args: &["uninstall", PACKAGE],
                cwd: None,
            })],
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::Test => write!(f, "test"),
            Task::Build => write!(f, "build"),
            Task::Install => write!(f, "install"),
            Task::Uninstall => write!(f, "uninstall"),
        }
    }
}

impl FromStr for Task {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Task::Test),
            "build" => Ok(Task::Build),
            "install" => Ok(Task::Install),
            "uninstall" => Ok(Task::Uninstall),
            other => Err(TaskError::UnknownTask {
                name: other.to_string(),
            }),
        }
    }
}
