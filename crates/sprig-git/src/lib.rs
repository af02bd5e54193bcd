//! # sprig-git
//!
//! Branch inspection and creation facade over git2-rs, meant for build
//! automation scripts. Each operation validates its arguments, opens a
//! repository handle at a directory path, delegates to libgit2, and
//! copies the result out into a [`Branch`] snapshot before the handle
//! is released. The facade owns no repository state of its own.

mod branch;
mod branch_name;
mod error;
mod ops;
mod repository;

pub use branch::Branch;
pub use branch_name::BranchName;
pub use error::{Error, Result};
pub use git2::Oid;
pub use ops::{branches, create_branch, current_branch, with_repository};
pub use repository::Repository;
