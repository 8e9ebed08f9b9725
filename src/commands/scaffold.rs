//! The scaffolding run: resolve, render, write, chmod.
//!
//! The run is a forward-only state machine.  Any error moves it straight to
//! [`RunState::Failed`]; files already written are left in place.
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::Cli;
use crate::config::EnvironmentConfig;
use crate::config::prompt::Prompter;
use crate::config::resolve::{Overrides, resolve};
use crate::config::toml_loader::Defaults;
use crate::error::{ConfigError, WpdevError};
use crate::exec::Executor;
use crate::logging::Log;
use crate::tasks::directories::CreateDirectories;
use crate::tasks::files::WriteFiles;
use crate::tasks::permissions::MarkInstallerExecutable;
use crate::tasks::{Context, Task};
use crate::templates;

use super::run_tasks;

/// State of a scaffolding run.
///
/// # Examples
///
/// ```
/// use wpdev_cli::commands::scaffold::RunState;
///
/// assert!(RunState::Idle.can_transition_to(RunState::CollectingConfig));
/// assert!(RunState::Rendering.can_transition_to(RunState::Failed));
/// assert!(!RunState::WritingFiles.can_transition_to(RunState::Rendering));
/// assert!(!RunState::Done.can_transition_to(RunState::Failed));
/// assert_eq!(RunState::Done.exit_code(), 0);
/// assert_eq!(RunState::Failed.exit_code(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing has happened yet.
    Idle,
    /// Merging flags, prompts and defaults.
    CollectingConfig,
    /// Rendering templates.
    Rendering,
    /// Creating directories and writing files.
    WritingFiles,
    /// Marking the installer executable.
    SettingPermissions,
    /// Every step succeeded.
    Done,
    /// A step failed.
    Failed,
}

impl RunState {
    /// Position in the forward sequence; `None` for [`Self::Failed`].
    const fn step(self) -> Option<u8> {
        match self {
            Self::Idle => Some(0),
            Self::CollectingConfig => Some(1),
            Self::Rendering => Some(2),
            Self::WritingFiles => Some(3),
            Self::SettingPermissions => Some(4),
            Self::Done => Some(5),
            Self::Failed => None,
        }
    }

    /// Whether the run has finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Whether `next` is a legal successor of `self`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        match (self.step(), next.step()) {
            (_, None) => true,
            (Some(from), Some(to)) => to == from + 1,
            (None, Some(_)) => false,
        }
    }

    /// Process exit code for a terminal state.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Done => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::CollectingConfig => "collecting config",
            Self::Rendering => "rendering",
            Self::WritingFiles => "writing files",
            Self::SettingPermissions => "setting permissions",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Options for a scaffolding run, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Explicit field values and target directory.
    pub overrides: Overrides,
    /// Optional TOML defaults file.
    pub defaults_file: Option<PathBuf>,
    /// Log what would be done without touching the filesystem.
    pub dry_run: bool,
    /// Write files concurrently.
    pub parallel: bool,
}

impl From<&Cli> for ScaffoldOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            overrides: Overrides::from(cli),
            defaults_file: cli.config.clone(),
            dry_run: cli.dry_run,
            parallel: cli.parallel,
        }
    }
}

/// Terminal result of [`run`].
#[derive(Debug)]
pub struct Outcome {
    /// Terminal state, [`RunState::Done`] or [`RunState::Failed`].
    pub state: RunState,
    /// Resolved configuration, if collection got that far.
    pub config: Option<Arc<EnvironmentConfig>>,
    /// The error that stopped the run.
    pub error: Option<anyhow::Error>,
}

impl Outcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.state.exit_code()
    }
}

struct Tracker<'a> {
    state: RunState,
    log: &'a dyn Log,
}

impl Tracker<'_> {
    fn advance(&mut self, next: RunState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {next}",
            self.state
        );
        self.log
            .debug(&format!("state: {} -> {next}", self.state));
        self.state = next;
    }

    fn fail(mut self, config: Option<Arc<EnvironmentConfig>>, error: anyhow::Error) -> Outcome {
        self.advance(RunState::Failed);
        Outcome {
            state: self.state,
            config,
            error: Some(error),
        }
    }
}

/// Run the whole pipeline once.
///
/// Never panics on pipeline errors; the returned [`Outcome`] carries the
/// terminal state and, on failure, the error. Every error is logged once,
/// where it happens, so callers only report the exit code.
#[must_use]
pub fn run(
    opts: &ScaffoldOptions,
    log: &Arc<dyn Log>,
    prompter: &dyn Prompter,
    executor: Arc<dyn Executor>,
    cwd: &Path,
) -> Outcome {
    let mut tracker = Tracker {
        state: RunState::Idle,
        log: log.as_ref(),
    };

    tracker.advance(RunState::CollectingConfig);
    log.stage("Collecting configuration");
    let config = match collect_config(opts, prompter, cwd, log.as_ref()) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            let error = anyhow::Error::from(WpdevError::from(e));
            log.error(&error.to_string());
            return tracker.fail(None, error);
        }
    };
    log.info(&format!(
        "project {} (WordPress {}, port {})",
        config.project_name(),
        config.wp_version(),
        config.wp_port()
    ));
    log.debug(&format!("directory: {}", config.project_directory().display()));
    log.debug(&format!("plugins: {}", config.wp_plugins()));

    tracker.advance(RunState::Rendering);
    log.stage("Rendering templates");
    let files = templates::render(&config);
    log.info(&format!("{} files rendered", files.len()));

    let ctx = Context::new(
        Arc::clone(&config),
        Arc::new(files),
        Arc::clone(log),
        executor,
        opts.dry_run,
        opts.parallel,
    );

    tracker.advance(RunState::WritingFiles);
    let writing: [&dyn Task; 2] = [&CreateDirectories, &WriteFiles];
    if let Err(e) = run_tasks(writing, &ctx) {
        return tracker.fail(Some(config), e);
    }

    tracker.advance(RunState::SettingPermissions);
    if let Err(e) = run_tasks([&MarkInstallerExecutable as &dyn Task], &ctx) {
        return tracker.fail(Some(config), e);
    }

    tracker.advance(RunState::Done);
    Outcome {
        state: tracker.state,
        config: Some(config),
        error: None,
    }
}

fn collect_config(
    opts: &ScaffoldOptions,
    prompter: &dyn Prompter,
    cwd: &Path,
    log: &dyn Log,
) -> Result<EnvironmentConfig, ConfigError> {
    let defaults = match &opts.defaults_file {
        Some(path) => {
            log.debug(&format!("loading defaults from {}", path.display()));
            Defaults::load(path)?
        }
        None => Defaults::default(),
    };
    resolve(&opts.overrides, &defaults, prompter, cwd)
}

/// Manual steps to bring the environment up.
#[must_use]
pub fn next_steps(config: &EnvironmentConfig) -> Vec<String> {
    vec![
        format!("cd {}", config.project_directory().display()),
        "docker compose up -d".to_string(),
        format!("open http://localhost:{}", config.wp_port()),
    ]
}

/// Print [`next_steps`] as a numbered list.
pub fn print_next_steps(log: &dyn Log, config: &EnvironmentConfig) {
    log.stage("Next steps");
    for (i, step) in next_steps(config).iter().enumerate() {
        log.info(&format!("  {}. {step}", i + 1));
    }
}
