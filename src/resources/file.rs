//! Whole-file content resource.
use anyhow::Result;
use std::path::PathBuf;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::EmitError;

/// A file whose contents must match `content` exactly.
///
/// `apply` always writes, even when the file is already correct, so an
/// existing file is replaced rather than merged.
#[derive(Debug, Clone)]
pub struct FileResource {
    /// Absolute file path.
    pub path: PathBuf,
    /// Desired contents.
    pub content: String,
}

impl FileResource {
    /// Create a new file resource.
    #[must_use]
    pub const fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }
}

impl Resource for FileResource {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState> {
        if self.path.is_dir() {
            return Ok(ResourceState::Invalid {
                reason: format!("{} is a directory", self.path.display()),
            });
        }
        match std::fs::read(&self.path) {
            Ok(existing) if existing == self.content.as_bytes() => Ok(ResourceState::Correct),
            Ok(existing) => Ok(ResourceState::Incorrect {
                current: format!("{} bytes with different content", existing.len()),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ResourceState::Missing),
            // Unreadable files are reported by `apply`.
            Err(e) => Ok(ResourceState::Incorrect {
                current: format!("unreadable: {e}"),
            }),
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        std::fs::write(&self.path, &self.content).map_err(|source| EmitError::WriteFile {
            path: self.path.clone(),
            source,
        })?;
        Ok(ResourceChange::Applied)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn writes_new_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(".env");
        let resource = FileResource::new(path.clone(), "WP_PORT=8080\n".to_string());

        assert_eq!(resource.current_state().unwrap(), ResourceState::Missing);
        assert_eq!(resource.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "WP_PORT=8080\n");
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);
    }

    #[test]
    fn overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(".env");
        std::fs::write(&path, "WP_PORT=1\nEXTRA=kept?\n").unwrap();

        let resource = FileResource::new(path.clone(), "WP_PORT=8080\n".to_string());
        assert!(matches!(
            resource.current_state().unwrap(),
            ResourceState::Incorrect { .. }
        ));
        resource.apply().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "WP_PORT=8080\n");
    }

    #[test]
    fn correct_file_is_still_rewritten() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("uploads.ini");
        std::fs::write(&path, "same").unwrap();

        let resource = FileResource::new(path, "same".to_string());
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);
        assert_eq!(resource.apply().unwrap(), ResourceChange::Applied);
    }

    #[test]
    fn missing_parent_reports_offending_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent/init-plugins.sh");
        let resource = FileResource::new(path.clone(), "#!/bin/sh\n".to_string());

        let err = resource.apply().unwrap_err();
        let emit = err.downcast_ref::<EmitError>().expect("typed emit error");
        assert!(matches!(emit, EmitError::WriteFile { path: p, .. } if *p == path));
        assert!(err.to_string().contains("init-plugins.sh"));
    }

    #[test]
    fn directory_at_path_is_invalid() {
        let tmp = tempfile::tempdir().unwrap();
        let resource = FileResource::new(tmp.path().to_path_buf(), String::new());
        assert!(matches!(
            resource.current_state().unwrap(),
            ResourceState::Invalid { .. }
        ));
        assert!(resource.apply().is_err());
    }
}
