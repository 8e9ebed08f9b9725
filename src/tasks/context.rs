//! Shared state handed to every task.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::exec::Executor;
use crate::logging::Log;
use crate::templates::RenderedFiles;

/// Shared context for task execution.
pub struct Context {
    /// Resolved configuration for this run.
    pub config: Arc<EnvironmentConfig>,
    /// Rendered output, keyed by path relative to the project directory.
    pub files: Arc<RenderedFiles>,
    /// Logger for output and task recording.
    pub log: Arc<dyn Log>,
    /// Command executor (for testing or real system calls).
    pub executor: Arc<dyn Executor>,
    /// Whether to perform a dry run (preview changes without applying).
    pub dry_run: bool,
    /// Whether to write files in parallel using Rayon.
    pub parallel: bool,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("files", &self.files.len())
            .field("log", &"<dyn Log>")
            .field("executor", &"<dyn Executor>")
            .field("dry_run", &self.dry_run)
            .field("parallel", &self.parallel)
            .finish()
    }
}

impl Context {
    /// Creates a new context for task execution.
    #[must_use]
    pub const fn new(
        config: Arc<EnvironmentConfig>,
        files: Arc<RenderedFiles>,
        log: Arc<dyn Log>,
        executor: Arc<dyn Executor>,
        dry_run: bool,
        parallel: bool,
    ) -> Self {
        Self {
            config,
            files,
            log,
            executor,
            dry_run,
            parallel,
        }
    }

    /// Absolute project directory.
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        self.config.project_directory()
    }

    /// Absolute path for a path relative to the project directory.
    ///
    /// An empty `relative` yields the project directory itself, without a
    /// trailing separator.
    #[must_use]
    pub fn target(&self, relative: &Path) -> PathBuf {
        if relative.as_os_str().is_empty() {
            self.project_dir().to_path_buf()
        } else {
            self.project_dir().join(relative)
        }
    }
}
