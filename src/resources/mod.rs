//! Idempotent resource primitives (check + apply pattern).
pub mod directory;
pub mod executable;
pub mod file;

use anyhow::Result;

pub use directory::DirectoryResource;
pub use executable::ExecutableResource;
pub use file::FileResource;

/// State of a resource on disk.
///
/// # Examples
///
/// ```
/// use wpdev_cli::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let stale = ResourceState::Incorrect { current: "12 bytes differ".into() };
///
/// assert_ne!(missing, ResourceState::Correct);
/// assert!(matches!(stale, ResourceState::Incorrect { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
    /// Resource exists but does not match the desired state.
    Incorrect {
        /// Short description of what is there now.
        current: String,
    },
    /// Resource cannot be applied (e.g., a file sits where a directory should).
    Invalid {
        /// Reason why the resource cannot be applied.
        reason: String,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated.
    Applied,
    /// Resource was already correct (no change needed).
    AlreadyCorrect,
}

/// Unified interface for resources that can be checked and applied.
pub trait Resource {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined.
    fn current_state(&self) -> Result<ResourceState>;

    /// Bring the resource to its desired state.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be applied.  Implementations
    /// return the typed errors from [`crate::error`] wrapped in
    /// [`anyhow::Error`] so callers can downcast.
    fn apply(&self) -> Result<ResourceChange>;
}
