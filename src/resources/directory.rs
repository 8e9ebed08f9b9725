//! Directory existence resource.
use anyhow::Result;
use std::path::PathBuf;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::EmitError;

/// A directory that must exist.
#[derive(Debug, Clone)]
pub struct DirectoryResource {
    /// Absolute directory path.
    pub path: PathBuf,
}

impl DirectoryResource {
    /// Create a new directory resource.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Resource for DirectoryResource {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState> {
        if self.path.is_dir() {
            Ok(ResourceState::Correct)
        } else if self.path.exists() {
            Ok(ResourceState::Invalid {
                reason: format!("{} exists and is not a directory", self.path.display()),
            })
        } else {
            Ok(ResourceState::Missing)
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        if self.path.is_dir() {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        std::fs::create_dir_all(&self.path).map_err(|source| EmitError::CreateDirectory {
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
    fn missing_directory_is_created_recursively() {
        let tmp = tempfile::tempdir().unwrap();
        let resource = DirectoryResource::new(tmp.path().join("a/b/c"));
        assert_eq!(resource.current_state().unwrap(), ResourceState::Missing);

        assert_eq!(resource.apply().unwrap(), ResourceChange::Applied);
        assert!(tmp.path().join("a/b/c").is_dir());
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);
    }

    #[test]
    fn existing_directory_is_tolerated() {
        let tmp = tempfile::tempdir().unwrap();
        let resource = DirectoryResource::new(tmp.path().to_path_buf());
        assert_eq!(resource.apply().unwrap(), ResourceChange::AlreadyCorrect);
    }

    #[test]
    fn file_in_the_way_is_invalid_and_fails_to_apply() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("config");
        std::fs::write(&blocker, "not a dir").unwrap();

        let resource = DirectoryResource::new(blocker.clone());
        assert!(matches!(
            resource.current_state().unwrap(),
            ResourceState::Invalid { .. }
        ));

        let err = resource.apply().unwrap_err();
        let emit = err.downcast_ref::<EmitError>().expect("typed emit error");
        assert!(
            matches!(emit, EmitError::CreateDirectory { path, .. } if *path == blocker),
            "unexpected error: {emit}"
        );
    }
}
