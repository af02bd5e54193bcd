//! `sprig branches` command - List branches.

use std::path::Path;

use anyhow::Result;

use crate::output;

/// Run the branches command.
pub fn run(repo: &Path, json: bool) -> Result<()> {
    let branches = sprig_git::branches(repo)?;

    if json {
        output::json(&branches)?;
        return Ok(());
    }

    for branch in &branches {
        output::essential(&output::branch_line(branch));
    }

    Ok(())
}
