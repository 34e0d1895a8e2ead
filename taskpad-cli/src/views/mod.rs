//! Interactive view implementations
//!
//! One module per screen: the login and register forms while signed
//! out, the task list while signed in. Each `run` performs a single
//! interaction round; `main` loops over them according to the session
//! state.

pub mod login;
pub mod register;
pub mod tasks;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use taskpad_core::TaskpadContext;

/// What the view loop should do after an interaction round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Get the taskpad directory from environment or default
pub fn get_taskpad_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TASKPAD_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".taskpad"))
        .context("Could not find home directory; set TASKPAD_DIR")
}

/// Get or create the taskpad context
pub fn get_context(taskpad_dir: &Path) -> Result<TaskpadContext> {
    std::fs::create_dir_all(taskpad_dir)
        .with_context(|| format!("Failed to create taskpad directory: {taskpad_dir:?}"))?;

    TaskpadContext::new(taskpad_dir).context("Failed to initialize taskpad context")
}
