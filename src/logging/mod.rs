//! Console and file logging, plus the per-path record behind the run summary.

mod logger;
mod style;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use style::Palette;
pub use subscriber::init_subscriber;
pub use types::{Action, Log, Record, Subject};
pub use utils::log_file_path;
