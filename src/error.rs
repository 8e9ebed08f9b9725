//! Domain-specific error types for the scaffolder.
//!
//! Internal modules return typed errors (e.g., [`ConfigError`], [`EmitError`])
//! while the command boundary converts them to [`anyhow::Error`] via the
//! standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! WpdevError
//! ├── Config(ConfigError)          flag/prompt/defaults resolution
//! ├── Emit(EmitError)              directory creation and file writes
//! └── Permission(PermissionError)  marking the installer executable
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the scaffolder.
#[derive(Error, Debug)]
pub enum WpdevError {
    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output files or directories could not be written.
    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),

    /// The installer script could not be marked executable.
    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

/// Errors that arise while collecting the environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A field that must be non-empty resolved to an empty string.
    #[error("'{0}' must not be empty")]
    EmptyField(&'static str),

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The defaults file could not be read or parsed.
    #[error("invalid defaults file {}: {message}", .path.display())]
    DefaultsFile {
        /// Path of the defaults file.
        path: PathBuf,
        /// Human-readable reason.
        message: String,
    },

    /// Reading an interactive answer failed.
    #[error("prompt for {field} failed: {message}")]
    Prompt {
        /// Field being prompted for.
        field: &'static str,
        /// Underlying terminal error.
        message: String,
    },
}

/// Errors that arise while writing the rendered files.
#[derive(Error, Debug)]
pub enum EmitError {
    /// A directory could not be created.
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    WriteFile {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Something already on disk rules out a planned change.
    #[error("cannot create {}: {reason}", .path.display())]
    Blocked {
        /// Path that cannot be created.
        path: PathBuf,
        /// What is in the way.
        reason: String,
    },

    /// One or more files in a write batch failed.
    #[error("{failed} of {total} file(s) could not be written")]
    Batch {
        /// Number of failed writes.
        failed: usize,
        /// Number of attempted writes.
        total: usize,
    },
}

/// Errors that arise while granting execute permission.
#[derive(Error, Debug)]
pub enum PermissionError {
    /// The external permission command is not on `PATH`.
    #[error("'{program}' is not available on PATH")]
    CommandUnavailable {
        /// Program that was looked up.
        program: String,
    },

    /// The external permission command exited unsuccessfully.
    #[error("chmod +x {} failed (exit {code}): {stderr}", .path.display())]
    CommandFailed {
        /// File whose mode could not be changed.
        path: PathBuf,
        /// Exit code, `-1` when terminated by a signal.
        code: i32,
        /// Captured standard error output.
        stderr: String,
    },

    /// The file to mark executable does not exist.
    #[error("{} does not exist", .0.display())]
    TargetMissing(PathBuf),
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn config_error_empty_field_display() {
        let e = ConfigError::EmptyField("port");
        assert_eq!(e.to_string(), "'port' must not be empty");
    }

    #[test]
    fn config_error_defaults_file_display() {
        let e = ConfigError::DefaultsFile {
            path: PathBuf::from("/tmp/wpdev.toml"),
            message: "unknown field `colour`".to_string(),
        };
        assert!(e.to_string().contains("/tmp/wpdev.toml"));
        assert!(e.to_string().contains("unknown field"));
    }

    #[test]
    fn config_error_current_dir_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::CurrentDir(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(e.source().is_some());
    }

    #[test]
    fn emit_error_write_file_names_path() {
        let e = EmitError::WriteFile {
            path: PathBuf::from("/site/.env"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(e.to_string(), "cannot write /site/.env: permission denied");
    }

    #[test]
    fn emit_error_write_file_has_source() {
        use std::error::Error as StdError;
        let e = EmitError::WriteFile {
            path: PathBuf::from("/site/.env"),
            source: io::Error::other("disk full"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn emit_error_blocked_names_path_and_reason() {
        let e = EmitError::Blocked {
            path: PathBuf::from("/site/config"),
            reason: "/site/config exists and is not a directory".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "cannot create /site/config: /site/config exists and is not a directory"
        );
    }

    #[test]
    fn emit_error_batch_display() {
        let e = EmitError::Batch {
            failed: 2,
            total: 5,
        };
        assert_eq!(e.to_string(), "2 of 5 file(s) could not be written");
    }

    #[test]
    fn permission_error_command_failed_display() {
        let e = PermissionError::CommandFailed {
            path: PathBuf::from("/site/config/init-plugins.sh"),
            code: 1,
            stderr: "Operation not permitted".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "chmod +x /site/config/init-plugins.sh failed (exit 1): Operation not permitted"
        );
    }

    #[test]
    fn permission_error_unavailable_display() {
        let e = PermissionError::CommandUnavailable {
            program: "chmod".to_string(),
        };
        assert_eq!(e.to_string(), "'chmod' is not available on PATH");
    }

    #[test]
    fn wpdev_error_from_sub_errors() {
        let e: WpdevError = ConfigError::EmptyField("name").into();
        assert!(e.to_string().contains("Configuration error"));
        let e: WpdevError = EmitError::Batch {
            failed: 1,
            total: 1,
        }
        .into();
        assert!(e.to_string().contains("Emit error"));
        let e: WpdevError = PermissionError::TargetMissing(PathBuf::from("x")).into();
        assert!(e.to_string().contains("Permission error"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<WpdevError>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<EmitError>();
        assert_send_sync::<PermissionError>();
    }

    #[test]
    fn errors_convert_to_anyhow() {
        let _a: anyhow::Error = ConfigError::EmptyField("name").into();
        let _b: anyhow::Error = PermissionError::TargetMissing(PathBuf::from("x")).into();
    }
}
