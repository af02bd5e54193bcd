//! Branch snapshot value type.

use git2::Oid;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A point-in-time snapshot of a branch.
///
/// All fields are copied out of the repository handle at read time;
/// the snapshot never observes later repository mutation and stays
/// valid after the handle is released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    /// Short name, e.g. `main` or `origin/main`.
    pub name: String,
    /// Full reference name, e.g. `refs/heads/main`.
    pub canonical_name: String,
    /// Id of the commit the branch points at.
    #[serde(serialize_with = "oid_as_hex")]
    pub target: Oid,
    /// Whether this branch is currently checked out.
    pub is_current: bool,
    /// Whether this is a remote-tracking branch.
    pub is_remote: bool,
}

impl Branch {
    /// Copy a snapshot out of a live reference.
    ///
    /// Fails on symbolic references (no direct target) and on reference
    /// names that aren't valid UTF-8.
    pub(crate) fn read(
        reference: &git2::Reference<'_>,
        is_current: bool,
        is_remote: bool,
    ) -> Result<Self> {
        let canonical_name = reference
            .name()
            .ok_or_else(non_utf8_name)?
            .to_string();
        let name = reference
            .shorthand()
            .ok_or_else(non_utf8_name)?
            .to_string();
        let target = reference.target().ok_or_else(|| {
            Error::Git2(git2::Error::from_str("reference has no direct target"))
        })?;

        Ok(Self {
            name,
            canonical_name,
            target,
            is_current,
            is_remote,
        })
    }
}

fn non_utf8_name() -> Error {
    Error::Git2(git2::Error::from_str("reference name is not valid UTF-8"))
}

fn oid_as_hex<S: Serializer>(oid: &Oid, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&oid.to_string())
}
