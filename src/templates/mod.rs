//! File templates and the renderer that turns an [`EnvironmentConfig`] into
//! final file contents.
//!
//! Only the dotenv file depends on the configuration.  The compose manifest
//! keeps its `${VAR}` references verbatim; Docker Compose resolves them from
//! `.env` when the stack is started.
mod compose;
mod dotenv;
mod installer;
mod tuning;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::EnvironmentConfig;

pub use compose::COMPOSE_MANIFEST;
pub use dotenv::render_dotenv;
pub use installer::INSTALLER_SCRIPT;
pub use tuning::{TIMEOUTS_CONF, UPLOADS_INI};

/// Subdirectory holding the installer script and tuning files.
pub const CONFIG_DIR: &str = "config";
/// Empty directory mounted as the theme.
pub const SRC_DIR: &str = "src";

/// Relative path of the dotenv file.
pub const DOTENV_PATH: &str = ".env";
/// Relative path of the compose manifest.
pub const COMPOSE_PATH: &str = "docker-compose.yml";
/// Relative path of the plugin installer script.
pub const INSTALLER_PATH: &str = "config/init-plugins.sh";
/// Relative path of the PHP upload tuning file.
pub const UPLOADS_PATH: &str = "config/uploads.ini";
/// Relative path of the Apache timeout tuning file.
pub const TIMEOUTS_PATH: &str = "config/timeouts.conf";

/// A single rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Full file contents.
    pub content: String,
    /// Whether the file must be marked executable after writing.
    pub executable: bool,
}

impl RenderedFile {
    fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            executable: false,
        }
    }

    fn executable(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            executable: true,
        }
    }
}

/// Rendered files keyed by path relative to the project directory.
///
/// A `BTreeMap` keeps iteration order stable across runs.
pub type RenderedFiles = BTreeMap<PathBuf, RenderedFile>;

/// Directories that must exist before any file is written, relative to the
/// project directory.  The empty path is the project directory itself.
#[must_use]
pub fn directories() -> [&'static Path; 3] {
    [Path::new(""), Path::new(CONFIG_DIR), Path::new(SRC_DIR)]
}

/// Render every output file for `config`.
///
/// Pure: the same configuration always yields byte-identical output.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use wpdev_cli::config::EnvironmentConfig;
/// use wpdev_cli::templates::{self, DOTENV_PATH};
///
/// let cfg = EnvironmentConfig::new("demo", "6.4", "9090", "", PathBuf::from("/srv/demo")).unwrap();
/// let files = templates::render(&cfg);
/// assert_eq!(files.len(), 5);
/// assert!(files[Path::new(DOTENV_PATH)].content.starts_with("PROJECT_NAME=demo\n"));
/// ```
#[must_use]
pub fn render(config: &EnvironmentConfig) -> RenderedFiles {
    [
        (DOTENV_PATH, RenderedFile::plain(render_dotenv(config))),
        (COMPOSE_PATH, RenderedFile::plain(COMPOSE_MANIFEST)),
        (INSTALLER_PATH, RenderedFile::executable(INSTALLER_SCRIPT)),
        (UPLOADS_PATH, RenderedFile::plain(UPLOADS_INI)),
        (TIMEOUTS_PATH, RenderedFile::plain(TIMEOUTS_CONF)),
    ]
    .into_iter()
    .map(|(path, file)| (PathBuf::from(path), file))
    .collect()
}
