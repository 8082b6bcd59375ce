//! futask - fixed-table task runner for the futil toolchain
//!
//! Maps each of the four task names (test, build, install, uninstall) to a
//! constant sequence of external commands and runs them in order from the
//! repository root, halting at the first failing step. Everything the
//! delegated commands do internally belongs to the external toolchain.

pub mod error;
pub mod executor;
pub mod task;

pub use error::{FixSuggestion, TaskError};
pub use executor::{run, run_steps};
pub use task::{ProcessSpec, Step, Task};
