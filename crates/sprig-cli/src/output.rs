//! Terminal output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use sprig_git::Branch;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print machine-readable output meant for piping.
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Print a value as pretty JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a branch for listing, marking the current one.
#[must_use]
pub fn branch_line(branch: &Branch) -> String {
    if branch.is_current {
        format!("{} {}", "▶".cyan(), branch.name.cyan().bold())
    } else if branch.is_remote {
        format!("  {}", branch.name.dimmed())
    } else {
        format!("  {}", branch.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sprig_git::Oid;

    fn branch(name: &str, is_current: bool, is_remote: bool) -> Branch {
        Branch {
            name: name.to_string(),
            canonical_name: format!("refs/heads/{name}"),
            target: Oid::from_str("0123456789abcdef0123456789abcdef01234567").unwrap(),
            is_current,
            is_remote,
        }
    }

    #[test]
    fn test_branch_line_current() {
        let line = branch_line(&branch("feature", true, false));
        assert!(line.contains("feature"));
        assert!(line.contains('▶'));
    }

    #[test]
    fn test_branch_line_not_current() {
        let line = branch_line(&branch("feature", false, false));
        assert!(line.contains("feature"));
        assert!(!line.contains('▶'));
    }

    #[test]
    fn test_branch_line_remote() {
        let line = branch_line(&branch("origin/main", false, true));
        assert!(line.contains("origin/main"));
        assert!(!line.contains('▶'));
    }
}
