//! Execute-permission resource backed by the external `chmod` command.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::PermissionError;
use crate::exec::Executor;

/// External program used to grant execute permission.
pub const CHMOD_PROGRAM: &str = "chmod";

/// A file that must carry execute permission, granted via `chmod +x`.
pub struct ExecutableResource<'a> {
    /// Absolute file path.
    pub path: PathBuf,
    executor: &'a dyn Executor,
}

impl std::fmt::Debug for ExecutableResource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutableResource")
            .field("path", &self.path)
            .field("executor", &"<dyn Executor>")
            .finish()
    }
}

impl<'a> ExecutableResource<'a> {
    /// Create a new executable resource.
    #[must_use]
    pub const fn new(path: PathBuf, executor: &'a dyn Executor) -> Self {
        Self { path, executor }
    }
}

impl Resource for ExecutableResource<'_> {
    fn description(&self) -> String {
        format!("+x {}", self.path.display())
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.path.exists() {
            return Ok(ResourceState::Missing);
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&self.path)
                .with_context(|| format!("reading metadata: {}", self.path.display()))?
                .permissions()
                .mode();
            if mode & 0o111 == 0o111 {
                Ok(ResourceState::Correct)
            } else {
                Ok(ResourceState::Incorrect {
                    current: format!("{:o}", mode & 0o777),
                })
            }
        }

        #[cfg(not(unix))]
        {
            Ok(ResourceState::Invalid {
                reason: "execute permission is not tracked on this platform".to_string(),
            })
        }
    }

    /// Run `chmod +x` on the target, even if it is already executable.
    fn apply(&self) -> Result<ResourceChange> {
        if !self.executor.which(CHMOD_PROGRAM) {
            return Err(PermissionError::CommandUnavailable {
                program: CHMOD_PROGRAM.to_string(),
            }
            .into());
        }
        if !self.path.exists() {
            return Err(PermissionError::TargetMissing(self.path.clone()).into());
        }

        let target = self.path.to_string_lossy().into_owned();
        let result = self
            .executor
            .run(CHMOD_PROGRAM, &["+x", target.as_str()])
            .with_context(|| format!("spawning {CHMOD_PROGRAM}"))?;
        if !result.success {
            return Err(PermissionError::CommandFailed {
                path: self.path.clone(),
                code: result.code.unwrap_or(-1),
                stderr: result.stderr.trim().to_string(),
            }
            .into());
        }
        Ok(ResourceChange::Applied)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::resources::test_helpers::MockExecutor;

    fn script(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("init-plugins.sh");
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        path
    }

    #[test]
    fn missing_chmod_fails_without_running_it() {
        let tmp = tempfile::tempdir().unwrap();
        let executor = MockExecutor::ok().with_which(false);

        let resource = ExecutableResource::new(script(tmp.path()), &executor);
        let err = resource.apply().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PermissionError>(),
            Some(PermissionError::CommandUnavailable { program }) if program == "chmod"
        ));
        assert_eq!(executor.call_count(), 0);
    }

    #[test]
    fn missing_target_is_never_chmodded() {
        let tmp = tempfile::tempdir().unwrap();
        let executor = MockExecutor::ok();

        let resource = ExecutableResource::new(tmp.path().join("absent.sh"), &executor);
        assert_eq!(resource.current_state().unwrap(), ResourceState::Missing);
        let err = resource.apply().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PermissionError>(),
            Some(PermissionError::TargetMissing(_))
        ));
        assert_eq!(executor.call_count(), 0);
    }

    #[test]
    fn runs_chmod_with_absolute_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = script(tmp.path());
        let expected = path.to_string_lossy().into_owned();
        let executor = MockExecutor::ok();

        let resource = ExecutableResource::new(path, &executor);
        assert_eq!(resource.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(
            executor.calls(),
            vec![vec!["chmod".to_string(), "+x".to_string(), expected]]
        );
    }

    #[test]
    fn spawn_failure_is_reported_with_context() {
        let tmp = tempfile::tempdir().unwrap();
        let executor = MockExecutor::new().with_which(true);

        let resource = ExecutableResource::new(script(tmp.path()), &executor);
        let err = resource.apply().unwrap_err();
        assert_eq!(err.to_string(), "spawning chmod");
    }

    #[test]
    fn non_zero_exit_carries_code_and_stderr() {
        let tmp = tempfile::tempdir().unwrap();
        let executor = MockExecutor::exits(1, "chmod: Operation not permitted\n");

        let resource = ExecutableResource::new(script(tmp.path()), &executor);
        let err = resource.apply().unwrap_err();
        match err.downcast_ref::<PermissionError>() {
            Some(PermissionError::CommandFailed { code, stderr, .. }) => {
                assert_eq!(*code, 1);
                assert_eq!(stderr, "chmod: Operation not permitted");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn detects_execute_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let path = script(tmp.path());
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let executor = MockExecutor::new();
        let resource = ExecutableResource::new(path.clone(), &executor);
        assert_eq!(
            resource.current_state().unwrap(),
            ResourceState::Incorrect {
                current: "644".to_string()
            }
        );

        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);
    }

    #[cfg(unix)]
    #[test]
    fn real_chmod_sets_execute_bits() {
        use crate::exec::SystemExecutor;

        let tmp = tempfile::tempdir().unwrap();
        let executor = SystemExecutor;
        let resource = ExecutableResource::new(script(tmp.path()), &executor);
        resource.apply().unwrap();
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);
    }
}
