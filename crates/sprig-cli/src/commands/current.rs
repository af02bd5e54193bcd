//! `sprig current` command - Show the checked out branch.

use std::path::Path;

use anyhow::Result;

use crate::output;

/// Run the current command.
pub fn run(repo: &Path, json: bool) -> Result<()> {
    let branch = sprig_git::current_branch(repo)?;

    if json {
        output::json(&branch)?;
    } else {
        output::essential(&branch.name);
    }

    Ok(())
}
