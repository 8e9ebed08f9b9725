//! Tracing subscriber setup: console formatter, file layer, and initialisation.
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;

use super::style::{self, Palette};
use super::utils::{strip_ansi, timestamp};

/// Tracing target for stage headers.
pub(super) const STAGE_TARGET: &str = "wpdev::stage";
/// Tracing target for dry-run messages.
pub(super) const DRY_RUN_TARGET: &str = "wpdev::dry_run";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

fn message_of(event: &tracing::Event<'_>) -> String {
    let mut extractor = MessageExtractor::default();
    event.record(&mut extractor);
    extractor.message
}

/// Appends every event to the run's log file, timestamped and uncoloured.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Truncate `path`, write a run header and keep the file open for appends.
    pub(super) fn create(path: &Path) -> io::Result<Self> {
        let mut file = fs::File::create(path)?;
        let version = option_env!("WPDEV_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
        writeln!(file, "# wpdev {version} run started {}", timestamp())?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();
        let msg = strip_ansi(&message_of(event));
        let tag = match (*metadata.level(), metadata.target()) {
            (Level::INFO, STAGE_TARGET) => "==> ",
            (Level::INFO, DRY_RUN_TARGET) => "[dry run] ",
            (Level::ERROR, _) => "error: ",
            (Level::WARN, _) => "warning: ",
            (Level::DEBUG | Level::TRACE, _) => "debug: ",
            _ => "",
        };
        if let Ok(mut f) = self.file.lock() {
            writeln!(f, "{} {tag}{msg}", timestamp()).ok();
        }
    }
}

/// Console formatting: `==>` stage headers, indented progress lines and
/// `error:`/`warning:` prefixes on stderr.
struct WpdevFormatter {
    out: Palette,
    err: Palette,
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for WpdevFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let msg = message_of(event);
        let (out, err) = (self.out, self.err);

        match *metadata.level() {
            Level::ERROR => writeln!(writer, "{} {msg}", err.paint(style::RED, "error:")),
            Level::WARN => writeln!(writer, "{} {msg}", err.paint(style::YELLOW, "warning:")),
            Level::INFO if metadata.target() == STAGE_TARGET => writeln!(
                writer,
                "{} {}",
                out.paint(style::BOLD_BLUE, "==>"),
                out.paint(style::BOLD, &msg)
            ),
            Level::INFO if metadata.target() == DRY_RUN_TARGET => {
                writeln!(writer, "  {} {msg}", out.paint(style::YELLOW, "[dry run]"))
            }
            Level::INFO => writeln!(writer, "  {msg}"),
            _ => writeln!(writer, "  {}", out.paint(style::DIM, &msg)),
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// INFO and below go to stdout, WARN and ERROR to stderr. When `log_file` is
/// given every event, including DEBUG, is also appended there. Returns the
/// log file actually in use, which is `None` if it could not be created.
///
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool, log_file: Option<PathBuf>) -> Option<PathBuf> {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let make_writer = io::stderr
        .with_max_level(Level::WARN)
        .and(io::stdout.with_min_level(Level::INFO));

    let console_layer = fmt::layer()
        .event_format(WpdevFormatter {
            out: Palette::for_stdout(),
            err: Palette::for_stderr(),
        })
        .with_writer(make_writer)
        .with_filter(console_level);

    let (file_layer, open_error) = match log_file.as_deref().map(FileLayer::create) {
        Some(Ok(layer)) => (Some(layer.with_filter(LevelFilter::DEBUG)), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    if let (Some(e), Some(path)) = (open_error, &log_file) {
        tracing::warn!("cannot write log file {}: {e}", path.display());
        return None;
    }
    log_file
}
