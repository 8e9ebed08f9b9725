//! Tracing-backed [`Log`] that also collects per-path records for the summary.
use std::path::PathBuf;
use std::sync::Mutex;

use super::style::{self, Palette};
use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{Action, Log, Record, Subject};

/// Production logger.
///
/// Messages go through [`tracing`], so the console formatter and the log
/// file both see them. Records are kept in memory until
/// [`print_summary`](Self::print_summary).
#[derive(Debug)]
pub struct Logger {
    records: Mutex<Vec<Record>>,
    log_file: Option<PathBuf>,
    palette: Palette,
}

impl Logger {
    /// Create a logger that mentions `log_file` at the end of the summary.
    #[must_use]
    pub const fn new(log_file: Option<PathBuf>, palette: Palette) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            log_file,
            palette,
        }
    }

    /// Summary body: one tally line per subject, then one line per failure.
    ///
    /// Empty when nothing was recorded.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let records = match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => return Vec::new(),
        };

        let mut lines = Vec::new();
        for subject in Subject::ALL {
            let matching: Vec<&Record> = records.iter().filter(|r| r.subject == subject).collect();
            if matching.is_empty() {
                continue;
            }
            let failed = matching
                .iter()
                .any(|r| matches!(r.action, Action::Failed(_)));
            let planned = matching.iter().any(|r| r.action == Action::Planned);
            let (icon, colour) = if failed {
                ("✗", style::RED)
            } else if planned {
                ("~", style::YELLOW)
            } else {
                ("✓", style::GREEN)
            };
            lines.push(self.palette.paint(
                colour,
                &format!("{icon} {}: {}", subject.label(), tally(&matching)),
            ));
        }

        for record in &records {
            if let Action::Failed(reason) = &record.action {
                lines.push(self.palette.paint(
                    style::RED,
                    &format!("    {}: {reason}", record.path.display()),
                ));
            }
        }
        lines
    }

    /// Print the summary and the log file location.
    pub fn print_summary(&self) {
        let lines = self.summary_lines();
        if lines.is_empty() {
            return;
        }
        self.stage("Summary");
        for line in &lines {
            self.info(line);
        }
        if let Some(path) = &self.log_file {
            self.info(
                &self
                    .palette
                    .paint(style::DIM, &format!("log: {}", path.display())),
            );
        }
    }
}

/// `"3 created, 2 overwritten"` in [`Action::ORDER`].
fn tally(records: &[&Record]) -> String {
    Action::ORDER
        .iter()
        .filter_map(|label| {
            let n = records.iter().filter(|r| r.action.label() == *label).count();
            (n > 0).then(|| format!("{n} {label}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    fn record(&self, record: Record) {
        if let Ok(mut guard) = self.records.lock() {
            guard.push(record);
        }
    }
}
