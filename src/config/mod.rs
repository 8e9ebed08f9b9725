//! Environment configuration: the single record every later stage reads.
//!
//! Values are merged from three layers (explicit flags, interactive answers,
//! defaults) by [`resolve::resolve`]; the result is immutable.
pub mod prompt;
pub mod resolve;
pub mod toml_loader;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// WordPress image tag used when nothing else is given.
pub const DEFAULT_WP_VERSION: &str = "latest";
/// Host port used when nothing else is given.
pub const DEFAULT_WP_PORT: &str = "8080";
/// Project name used when the project directory has no basename.
pub const FALLBACK_PROJECT_NAME: &str = "wordpress";

/// A configurable field, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `PROJECT_NAME`
    Name,
    /// `WP_VERSION`
    Version,
    /// `WP_PORT`
    Port,
    /// `WP_PLUGINS`
    Plugins,
}

impl Field {
    /// All fields in the order they are resolved and prompted.
    pub const ALL: [Self; 4] = [Self::Name, Self::Version, Self::Port, Self::Plugins];

    /// Short machine name, used in error messages.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Version => "version",
            Self::Port => "port",
            Self::Plugins => "plugins",
        }
    }

    /// Prompt text shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Project name",
            Self::Version => "WordPress version",
            Self::Port => "Local port",
            Self::Plugins => "Plugins to install (space-separated slugs)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fully resolved configuration for one scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    project_name: String,
    wp_version: String,
    wp_port: String,
    wp_plugins: String,
    project_directory: PathBuf,
}

impl EnvironmentConfig {
    /// Build a configuration, normalising the plugin list to single-space
    /// separated slugs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] if the name, version or port is
    /// empty after trimming.
    pub fn new(
        project_name: &str,
        wp_version: &str,
        wp_port: &str,
        wp_plugins: &str,
        project_directory: PathBuf,
    ) -> Result<Self, ConfigError> {
        let required = |field: Field, value: &str| {
            let value = value.trim();
            if value.is_empty() {
                Err(ConfigError::EmptyField(field.key()))
            } else {
                Ok(value.to_string())
            }
        };

        Ok(Self {
            project_name: required(Field::Name, project_name)?,
            wp_version: required(Field::Version, wp_version)?,
            wp_port: required(Field::Port, wp_port)?,
            wp_plugins: normalize_plugins(wp_plugins),
            project_directory,
        })
    }

    /// Project name, used as the compose project and theme directory name.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// WordPress image tag.
    #[must_use]
    pub fn wp_version(&self) -> &str {
        &self.wp_version
    }

    /// Host port WordPress is published on.
    #[must_use]
    pub fn wp_port(&self) -> &str {
        &self.wp_port
    }

    /// Space-separated plugin slugs; may be empty.
    #[must_use]
    pub fn wp_plugins(&self) -> &str {
        &self.wp_plugins
    }

    /// Absolute target directory.
    #[must_use]
    pub fn project_directory(&self) -> &Path {
        &self.project_directory
    }
}

/// Collapse any run of whitespace in a plugin list to a single space.
#[must_use]
pub fn normalize_plugins(plugins: &str) -> String {
    plugins.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn build(name: &str, version: &str, port: &str) -> Result<EnvironmentConfig, ConfigError> {
        EnvironmentConfig::new(name, version, port, "", PathBuf::from("/srv/site"))
    }

    #[test]
    fn new_accepts_complete_values() {
        let cfg = EnvironmentConfig::new(
            "demo",
            "6.4",
            "9090",
            "query-monitor acf",
            PathBuf::from("/srv/demo"),
        )
        .unwrap();
        assert_eq!(cfg.project_name(), "demo");
        assert_eq!(cfg.wp_version(), "6.4");
        assert_eq!(cfg.wp_port(), "9090");
        assert_eq!(cfg.wp_plugins(), "query-monitor acf");
        assert_eq!(cfg.project_directory(), Path::new("/srv/demo"));
    }

    #[test]
    fn new_rejects_empty_required_fields() {
        assert!(matches!(
            build("", "6.4", "80"),
            Err(ConfigError::EmptyField("name"))
        ));
        assert!(matches!(
            build("demo", "  ", "80"),
            Err(ConfigError::EmptyField("version"))
        ));
        assert!(matches!(
            build("demo", "6.4", ""),
            Err(ConfigError::EmptyField("port"))
        ));
    }

    #[test]
    fn empty_plugins_are_allowed() {
        let cfg = build("demo", "latest", "8080").unwrap();
        assert_eq!(cfg.wp_plugins(), "");
    }

    #[test]
    fn plugins_whitespace_is_normalised() {
        let cfg = EnvironmentConfig::new(
            "demo",
            "latest",
            "8080",
            "  akismet \t  query-monitor\n",
            PathBuf::from("/srv/demo"),
        )
        .unwrap();
        assert_eq!(cfg.wp_plugins(), "akismet query-monitor");
    }

    #[test]
    fn port_is_not_range_checked() {
        let cfg = build("demo", "latest", "not-a-port").unwrap();
        assert_eq!(cfg.wp_port(), "not-a-port");
    }

    #[test]
    fn field_keys_are_stable() {
        assert_eq!(Field::Name.to_string(), "name");
        assert_eq!(Field::Plugins.key(), "plugins");
    }
}
