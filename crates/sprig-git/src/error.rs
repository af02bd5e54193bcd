//! Error types for sprig-git.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during branch operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller-supplied input was malformed or missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No repository at the given path or any parent.
    #[error("no git repository found at '{}' (or any parent)", .0.display())]
    RepositoryNotFound(PathBuf),

    /// A local branch with this name already exists.
    #[error("branch already exists: {0}")]
    BranchAlreadyExists(String),

    /// HEAD points directly at a commit, not a branch.
    #[error("HEAD is detached - not on any branch")]
    DetachedHead,

    /// Checkout could not reconcile uncommitted working tree changes.
    /// The branch was still created; only the switch failed.
    #[error("branch '{branch}' was created but not checked out: working tree changes conflict")]
    CheckoutConflict {
        /// The branch that remains created but not checked out.
        branch: String,
    },

    /// Underlying git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}
