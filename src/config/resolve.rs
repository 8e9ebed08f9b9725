//! Layered configuration resolution.
//!
//! Each field is the first non-empty value of, in order: the explicit flag,
//! the interactive answer, the defaults file, the hard-coded default.  The
//! lower layers are coalesced first so the prompt can show what an empty
//! answer would produce.
use std::path::{Component, Path, PathBuf};

use super::prompt::Prompter;
use super::toml_loader::Defaults;
use super::{
    DEFAULT_WP_PORT, DEFAULT_WP_VERSION, EnvironmentConfig, FALLBACK_PROJECT_NAME, Field,
};
use crate::cli::Cli;
use crate::error::ConfigError;

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--name`
    pub name: Option<String>,
    /// `--version`
    pub version: Option<String>,
    /// `--port`
    pub port: Option<String>,
    /// `--plugins`
    pub plugins: Option<String>,
    /// Positional target directory.
    pub directory: Option<PathBuf>,
}

impl Overrides {
    /// Explicit value for a field, if one was given.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Version => self.version.as_deref(),
            Field::Port => self.port.as_deref(),
            Field::Plugins => self.plugins.as_deref(),
        }
    }
}

impl From<&Cli> for Overrides {
    fn from(cli: &Cli) -> Self {
        Self {
            name: cli.name.clone(),
            version: cli.wp_version.clone(),
            port: cli.port.clone(),
            plugins: cli.plugins.clone(),
            directory: cli.directory.clone(),
        }
    }
}

/// Return the first value that is non-empty after trimming.
///
/// # Examples
///
/// ```
/// use wpdev_cli::config::resolve::coalesce;
///
/// assert_eq!(coalesce([None, Some("  "), Some("8080")]), Some("8080"));
/// assert_eq!(coalesce([Some("9090"), Some("8080")]), Some("9090"));
/// assert_eq!(coalesce::<[Option<&str>; 0]>([]), None);
/// ```
#[must_use]
pub fn coalesce<'a, I>(layers: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    layers
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

/// Make `arg` absolute against `cwd` without requiring it to exist.
///
/// `.` components are dropped and `..` pops the previous component.  When
/// the result exists it is canonicalised (symlinks resolved, no `\\?\`
/// prefix on Windows).
#[must_use]
pub fn resolve_directory(arg: Option<&Path>, cwd: &Path) -> PathBuf {
    let joined = match arg {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };
    let normalized = normalize_lexically(&joined);
    dunce::canonicalize(&normalized).unwrap_or(normalized)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Project name derived from the directory's basename.
#[must_use]
pub fn directory_basename(dir: &Path) -> String {
    dir.file_name().map_or_else(
        || FALLBACK_PROJECT_NAME.to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Merge flags, prompts and defaults into an [`EnvironmentConfig`].
///
/// The project directory is resolved first since the default project name
/// depends on it.  Fields with an explicit flag are never prompted for.
///
/// # Errors
///
/// Returns an error if a prompt fails or a required field ends up empty.
pub fn resolve(
    overrides: &Overrides,
    defaults: &Defaults,
    prompter: &dyn Prompter,
    cwd: &Path,
) -> Result<EnvironmentConfig, ConfigError> {
    let directory = resolve_directory(overrides.directory.as_deref(), cwd);
    let basename = directory_basename(&directory);

    let resolve_field = |field: Field, hard_default: &str| -> Result<String, ConfigError> {
        if let Some(explicit) = coalesce([overrides.get(field)]) {
            return Ok(explicit.to_string());
        }
        let fallback = coalesce([defaults.get(field), Some(hard_default)]).unwrap_or_default();
        let answer = prompter.ask(field, fallback)?;
        Ok(coalesce([answer.as_deref(), Some(fallback)])
            .unwrap_or_default()
            .to_string())
    };

    let name = resolve_field(Field::Name, &basename)?;
    let version = resolve_field(Field::Version, DEFAULT_WP_VERSION)?;
    let port = resolve_field(Field::Port, DEFAULT_WP_PORT)?;
    let plugins = resolve_field(Field::Plugins, "")?;

    EnvironmentConfig::new(&name, &version, &port, &plugins, directory)
}
