//! Named pipeline steps that drive resource changes.
pub mod context;
pub mod directories;
pub mod files;
pub mod permissions;

pub use context::Context;

use anyhow::Result;

/// Result of a single task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskResult {
    /// Task completed successfully.
    Ok,
    /// Task ran in dry-run mode.
    DryRun,
}

/// Counters for the resources a task touched.
///
/// # Examples
///
/// ```
/// use wpdev_cli::tasks::TaskStats;
///
/// let stats = TaskStats { changed: 2, already_ok: 3 };
/// assert_eq!(stats.summary(false), "2 changed, 3 already ok");
/// assert_eq!(stats.summary(true), "2 would change, 3 already ok");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of items created or changed.
    pub changed: u32,
    /// Number of items that were already in the desired state.
    pub already_ok: u32,
}

impl TaskStats {
    /// Create a new empty stats counter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            changed: 0,
            already_ok: 0,
        }
    }

    /// One-line summary; `dry_run` switches to conditional wording.
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> String {
        let verb = if dry_run { "would change" } else { "changed" };
        format!("{} {verb}, {} already ok", self.changed, self.already_ok)
    }

    /// Log the summary and convert to the matching [`TaskResult`].
    #[must_use]
    pub fn finish(self, ctx: &Context) -> TaskResult {
        ctx.log.info(&self.summary(ctx.dry_run));
        if ctx.dry_run {
            TaskResult::DryRun
        } else {
            TaskResult::Ok
        }
    }
}

impl std::ops::AddAssign for TaskStats {
    fn add_assign(&mut self, other: Self) {
        self.changed += other.changed;
        self.already_ok += other.already_ok;
    }
}

/// A named, executable pipeline step.
pub trait Task: Send + Sync {
    /// Human-readable task name.
    fn name(&self) -> &'static str;

    /// Whether this task has anything to do for the current run.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if any resource change fails.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Execute a task under a stage header.
///
/// A failure is logged and returned so the pipeline stops before later
/// steps. Per-path outcomes are recorded by the task itself.
///
/// # Errors
///
/// Returns the task's error after logging it.
pub fn execute(task: &dyn Task, ctx: &Context) -> Result<()> {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        return Ok(());
    }

    ctx.log.stage(task.name());
    match task.run(ctx) {
        Ok(TaskResult::Ok | TaskResult::DryRun) => Ok(()),
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            Err(e)
        }
    }
}
