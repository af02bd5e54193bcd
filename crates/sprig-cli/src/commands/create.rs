//! `sprig create` command - Create a branch at HEAD.

use std::path::Path;

use anyhow::Result;

use crate::output;

/// Run the create command.
pub fn run(name: &str, repo: &Path, checkout: bool, json: bool) -> Result<()> {
    let branch = sprig_git::create_branch(repo, name, checkout)?;

    if json {
        output::json(&branch)?;
        return Ok(());
    }

    let tip = &branch.target.to_string()[..8];
    if branch.is_current {
        output::success(&format!("Created and checked out '{}' at {tip}", branch.name));
    } else {
        output::success(&format!("Created branch '{}' at {tip}", branch.name));
    }

    Ok(())
}
