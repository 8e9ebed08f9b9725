//! Optional TOML defaults file (`--config`).
//!
//! Values from this file replace the hard-coded defaults and are shown as the
//! suggested answer in interactive prompts; explicit flags still win.
use serde::Deserialize;
use std::path::Path;

use super::Field;
use crate::error::ConfigError;

/// A scalar that may be written as a TOML string or integer (`port = 8000`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(i64),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDefaults {
    name: Option<Scalar>,
    version: Option<Scalar>,
    port: Option<Scalar>,
    #[serde(default)]
    plugins: Vec<String>,
}

/// Per-field defaults loaded from a TOML file.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use wpdev_cli::config::Field;
/// use wpdev_cli::config::toml_loader::Defaults;
///
/// let defaults = Defaults::parse("port = 8000\nplugins = [\"akismet\"]\n", Path::new("x.toml")).unwrap();
/// assert_eq!(defaults.get(Field::Port), Some("8000"));
/// assert_eq!(defaults.get(Field::Plugins), Some("akismet"));
/// assert_eq!(defaults.get(Field::Name), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    name: Option<String>,
    version: Option<String>,
    port: Option<String>,
    plugins: Option<String>,
}

impl Defaults {
    /// Read and parse a defaults file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DefaultsFile`] if the file cannot be read or is
    /// not valid TOML with only the known keys.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DefaultsFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Parse defaults from TOML text; `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DefaultsFile`] on invalid TOML, wrong value
    /// types, or unknown keys.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawDefaults = toml::from_str(content).map_err(|e| ConfigError::DefaultsFile {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;

        let plugins = raw.plugins.join(" ");
        Ok(Self {
            name: raw.name.map(Scalar::into_string),
            version: raw.version.map(Scalar::into_string),
            port: raw.port.map(Scalar::into_string),
            plugins: (!plugins.trim().is_empty()).then_some(plugins),
        })
    }

    /// Default for a single field, if the file set one.
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

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_has_no_defaults() {
        let defaults = Defaults::parse("", Path::new("empty.toml")).unwrap();
        assert_eq!(defaults, Defaults::default());
        for field in Field::ALL {
            assert_eq!(defaults.get(field), None);
        }
    }

    #[test]
    fn parses_all_keys() {
        let toml = r#"
name = "shop"
version = "6.5"
port = "8000"
plugins = ["query-monitor", "woocommerce"]
"#;
        let defaults = Defaults::parse(toml, Path::new("wpdev.toml")).unwrap();
        assert_eq!(defaults.get(Field::Name), Some("shop"));
        assert_eq!(defaults.get(Field::Version), Some("6.5"));
        assert_eq!(defaults.get(Field::Port), Some("8000"));
        assert_eq!(defaults.get(Field::Plugins), Some("query-monitor woocommerce"));
    }

    #[test]
    fn numeric_port_is_accepted() {
        let defaults = Defaults::parse("port = 9000", Path::new("wpdev.toml")).unwrap();
        assert_eq!(defaults.get(Field::Port), Some("9000"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Defaults::parse("colour = \"blue\"", Path::new("wpdev.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::DefaultsFile { .. }));
        assert!(err.to_string().contains("wpdev.toml"));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let err = Defaults::parse("name = ", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::DefaultsFile { .. }));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wpdev.toml");
        std::fs::write(&path, "version = \"6.3\"\n").unwrap();
        let defaults = Defaults::load(&path).unwrap();
        assert_eq!(defaults.get(Field::Version), Some("6.3"));
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = Defaults::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::DefaultsFile { .. }));
    }
}
