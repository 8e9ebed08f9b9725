//! What a run did to each path, and the [`Log`] trait that collects it.
use std::path::PathBuf;

/// The kind of path a [`Record`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// A directory the run creates.
    Directory,
    /// A generated file.
    File,
    /// The plugin installer script's execute permission.
    Installer,
}

impl Subject {
    /// Summary order.
    pub const ALL: [Self; 3] = [Self::Directory, Self::File, Self::Installer];

    /// Plural label used in the summary.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Directory => "directories",
            Self::File => "files",
            Self::Installer => "installer",
        }
    }
}

/// What happened to one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The path did not exist and was created.
    Created,
    /// An existing file with different content was replaced.
    Overwritten,
    /// The path already matched; files are still rewritten in place.
    Unchanged,
    /// `chmod +x` ran on a script that lacked execute bits.
    MadeExecutable,
    /// Dry run: the change was only reported.
    Planned,
    /// The change could not be made.
    Failed(String),
}

impl Action {
    /// Actions in the order the summary lists them.
    pub(super) const ORDER: [&'static str; 6] = [
        "created",
        "overwritten",
        "unchanged",
        "made executable",
        "planned",
        "failed",
    ];

    /// Short label used when tallying.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Unchanged => "unchanged",
            Self::MadeExecutable => "made executable",
            Self::Planned => "planned",
            Self::Failed(_) => "failed",
        }
    }
}

/// One path touched by the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Kind of path.
    pub subject: Subject,
    /// Absolute path.
    pub path: PathBuf,
    /// Outcome.
    pub action: Action,
}

impl Record {
    /// Shorthand constructor.
    #[must_use]
    pub fn new(subject: Subject, path: impl Into<PathBuf>, action: Action) -> Self {
        Self {
            subject,
            path: path.into(),
            action,
        }
    }
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) is the production implementation;
/// pipeline steps only see `dyn Log` so tests can substitute their own.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Remember what happened to one path for the summary.
    fn record(&self, record: Record);
}
