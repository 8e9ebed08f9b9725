//! Top-level command orchestration.
pub mod scaffold;

use anyhow::Result;

use crate::tasks::{self, Context, Task};

/// Execute tasks in order, stopping at the first failure.
///
/// Every task's outcome is recorded in the context's logger, so the summary
/// shows what ran before the failure.
///
/// # Errors
///
/// Returns the first task error.
pub fn run_tasks<'a>(tasks: impl IntoIterator<Item = &'a dyn Task>, ctx: &Context) -> Result<()> {
    for task in tasks {
        tasks::execute(task, ctx)?;
    }
    Ok(())
}
