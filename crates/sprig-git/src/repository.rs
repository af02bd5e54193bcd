//! Repository handle wrapping git2.

use std::path::Path;

use git2::{BranchType, ErrorCode, build::CheckoutBuilder};

use crate::branch::Branch;
use crate::branch_name::BranchName;
use crate::error::{Error, Result};

/// An open repository handle.
///
/// Owns the underlying `git2::Repository` exclusively; libgit2 releases
/// the on-disk resources when the handle is dropped, so scoping a
/// `Repository` to one operation gives the release-on-every-exit-path
/// guarantee without explicit cleanup.
pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Open the repository at `path`, searching upward through parents.
    ///
    /// # Errors
    /// Returns [`Error::RepositoryNotFound`] if neither `path` nor any
    /// parent contains a repository.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let inner = git2::Repository::discover(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                Error::RepositoryNotFound(path.to_path_buf())
            } else {
                Error::Git2(e)
            }
        })?;

        Ok(Self { inner })
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Snapshot the branch HEAD currently points at.
    ///
    /// # Errors
    /// Returns [`Error::DetachedHead`] if HEAD points directly at a
    /// commit instead of a branch reference.
    pub fn current_branch(&self) -> Result<Branch> {
        let head = self.inner.head()?;
        if !head.is_branch() {
            return Err(Error::DetachedHead);
        }

        Branch::read(&head, true, false)
    }

    /// Check if a local branch exists.
    #[must_use]
    pub fn branch_exists(&self, name: &str) -> bool {
        self.inner.find_branch(name, BranchType::Local).is_ok()
    }

    /// Create a local branch at the current HEAD commit, optionally
    /// checking it out.
    ///
    /// # Errors
    /// Returns [`Error::BranchAlreadyExists`] on a name collision and
    /// [`Error::CheckoutConflict`] if the branch was created but the
    /// working tree could not be switched to it.
    pub fn create_branch(&self, name: &BranchName, checkout: bool) -> Result<Branch> {
        if self.branch_exists(name) {
            return Err(Error::BranchAlreadyExists(name.to_string()));
        }

        let head_commit = self.inner.head()?.peel_to_commit()?;
        let branch = self
            .inner
            .branch(name.as_str(), &head_commit, false)
            .map_err(|e| {
                // A concurrent creator may win between the exists check
                // and here; libgit2 reports that as Exists.
                if e.code() == ErrorCode::Exists {
                    Error::BranchAlreadyExists(name.to_string())
                } else {
                    Error::Git2(e)
                }
            })?;

        let mut snapshot = Branch::read(branch.get(), false, false)?;
        if checkout {
            self.checkout(name)?;
            snapshot.is_current = true;
        }

        Ok(snapshot)
    }

    /// Switch the working tree and HEAD to an existing local branch.
    fn checkout(&self, name: &BranchName) -> Result<()> {
        let reference_name = format!("refs/heads/{name}");
        let reference = self.inner.find_reference(&reference_name)?;
        let commit = reference.peel(git2::ObjectType::Commit)?;

        let mut options = CheckoutBuilder::new();
        options.safe();
        self.inner
            .checkout_tree(&commit, Some(&mut options))
            .map_err(|e| map_checkout_error(e, name.as_str()))?;
        self.inner.set_head(&reference_name)?;

        Ok(())
    }

    /// Snapshot all local and remote-tracking branches.
    ///
    /// Symbolic entries such as `origin/HEAD` have no direct target and
    /// are skipped.
    pub fn branches(&self) -> Result<Vec<Branch>> {
        let mut snapshots = Vec::new();
        for entry in self.inner.branches(None)? {
            let (branch, kind) = entry?;
            if branch.get().target().is_none() {
                continue;
            }

            let is_remote = kind == BranchType::Remote;
            let is_current = !is_remote && branch.is_head();
            snapshots.push(Branch::read(branch.get(), is_current, is_remote)?);
        }

        Ok(snapshots)
    }
}

/// Map a checkout failure, distinguishing working-tree conflicts from
/// other engine errors.
fn map_checkout_error(error: git2::Error, branch: &str) -> Error {
    if error.code() == ErrorCode::Conflict {
        Error::CheckoutConflict {
            branch: branch.to_string(),
        }
    } else {
        Error::Git2(error)
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.git_dir())
            .finish()
    }
}
