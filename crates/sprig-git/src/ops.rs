//! Path-level operation facade.
//!
//! Each operation validates its arguments, opens its own repository
//! handle, runs against it, and releases it before returning. Handles
//! are never shared across invocations.

use std::path::Path;

use crate::branch::Branch;
use crate::branch_name::BranchName;
use crate::error::{Error, Result};
use crate::repository::Repository;

/// Run `op` against the repository discovered at `path`.
///
/// The handle lives for this call only and is dropped on every exit
/// path, whether `op` succeeds or fails. Failures from `op` propagate
/// unchanged.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] for an empty path (checked before
/// touching the filesystem) and [`Error::RepositoryNotFound`] if no
/// repository exists at or above `path`.
pub fn with_repository<T, F>(path: impl AsRef<Path>, op: F) -> Result<T>
where
    F: FnOnce(&Repository) -> Result<T>,
{
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument(
            "repository path cannot be empty".to_string(),
        ));
    }

    let repo = Repository::discover(path)?;
    op(&repo)
}

/// Snapshot the branch currently checked out in the repository at `path`.
///
/// # Errors
/// Returns [`Error::DetachedHead`] when HEAD points directly at a
/// commit; see [`Repository::current_branch`].
pub fn current_branch(path: impl AsRef<Path>) -> Result<Branch> {
    with_repository(path, Repository::current_branch)
}

/// Create a local branch named `name` at the current HEAD commit of the
/// repository at `path`, checking it out when `checkout` is true.
///
/// On [`Error::CheckoutConflict`] the branch remains created; only the
/// working tree switch failed.
///
/// # Errors
/// See [`Repository::create_branch`]; additionally returns
/// [`Error::InvalidArgument`] for an invalid branch name, before any
/// filesystem access.
pub fn create_branch(path: impl AsRef<Path>, name: &str, checkout: bool) -> Result<Branch> {
    let name = BranchName::new(name)?;
    with_repository(path, |repo| repo.create_branch(&name, checkout))
}

/// Snapshot all local and remote-tracking branches of the repository at
/// `path`.
pub fn branches(path: impl AsRef<Path>) -> Result<Vec<Branch>> {
    with_repository(path, Repository::branches)
}
