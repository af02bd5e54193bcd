//! Branch name validation and newtype.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A validated git branch name.
///
/// Enforces git's reference naming rules up front so a bad name is
/// rejected as [`Error::InvalidArgument`] before any repository is
/// opened, instead of surfacing as an opaque libgit2 failure later.
///
/// # Examples
///
/// ```
/// use sprig_git::BranchName;
///
/// assert!(BranchName::new("feature/auth").is_ok());
/// assert!(BranchName::new("release-2024-01").is_ok());
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("branch..name").is_err());
/// assert!(BranchName::new("branch.lock").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the name is empty, blank,
    /// or violates git's branch naming rules.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Get the branch name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the `BranchName` and return the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for BranchName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for BranchName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BranchName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for BranchName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BranchName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

fn bad_name(name: &str, reason: &str) -> Error {
    Error::InvalidArgument(format!("invalid branch name '{name}': {reason}"))
}

/// Validate a branch name against git's reference naming rules.
fn validate(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(bad_name(name, "name cannot be empty or blank"));
    }

    if name == "@" {
        return Err(bad_name(name, "name cannot be '@'"));
    }

    if name.starts_with('.') || name.ends_with('.') {
        return Err(bad_name(name, "name cannot start or end with '.'"));
    }

    if name.ends_with(".lock") {
        return Err(bad_name(name, "name cannot end with '.lock'"));
    }

    if name.starts_with('/') || name.ends_with('/') {
        return Err(bad_name(name, "name cannot start or end with '/'"));
    }

    // "/." covers components starting with a dot
    for pattern in ["..", "//", "@{", "/."] {
        if name.contains(pattern) {
            return Err(bad_name(name, &format!("name cannot contain '{pattern}'")));
        }
    }

    if name.chars().any(|c| c.is_ascii_control()) {
        return Err(bad_name(name, "name cannot contain control characters"));
    }

    if let Some(c) = name
        .chars()
        .find(|c| matches!(c, ' ' | '~' | '^' | ':' | '?' | '*' | '[' | '\\'))
    {
        return Err(bad_name(name, &format!("name cannot contain '{c}'")));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(BranchName::new("main").is_ok());
        assert!(BranchName::new("feature/auth").is_ok());
        assert!(BranchName::new("feature/user/login").is_ok());
        assert!(BranchName::new("fix-bug_123").is_ok());
        assert!(BranchName::new("v1.0.0").is_ok());
        assert!(BranchName::new("user@feature").is_ok());
    }

    #[test]
    fn test_empty_and_blank_names() {
        assert!(matches!(
            BranchName::new("").unwrap_err(),
            Error::InvalidArgument(_)
        ));
        assert!(matches!(
            BranchName::new("   ").unwrap_err(),
            Error::InvalidArgument(_)
        ));
        assert!(matches!(
            BranchName::new("\t\n").unwrap_err(),
            Error::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_dot_rules() {
        assert!(BranchName::new(".hidden").is_err());
        assert!(BranchName::new("branch.").is_err());
        assert!(BranchName::new("branch.lock").is_err());
        assert!(BranchName::new("branch..name").is_err());
        assert!(BranchName::new("feature/.hidden").is_err());
    }

    #[test]
    fn test_slash_rules() {
        assert!(BranchName::new("/branch").is_err());
        assert!(BranchName::new("branch/").is_err());
        assert!(BranchName::new("feature//auth").is_err());
    }

    #[test]
    fn test_forbidden_characters() {
        for c in [' ', '~', '^', ':', '?', '*', '[', '\\'] {
            assert!(BranchName::new(format!("branch{c}name")).is_err(), "char: {c}");
        }
    }

    #[test]
    fn test_at_rules() {
        assert!(BranchName::new("@").is_err());
        assert!(BranchName::new("branch@{1}").is_err());
        assert!(BranchName::new("user@feature").is_ok());
    }

    #[test]
    fn test_control_characters() {
        assert!(BranchName::new("branch\x00name").is_err());
        assert!(BranchName::new("branch\nname").is_err());
    }

    #[test]
    fn test_display_and_deref() {
        let name = BranchName::new("feature/auth").unwrap();
        assert_eq!(format!("{name}"), "feature/auth");
        assert_eq!(name.as_str(), "feature/auth");
        assert_eq!(&*name, "feature/auth");
        assert_eq!(name.clone().into_inner(), "feature/auth");
    }

    #[test]
    fn test_serialize_deserialize() {
        let name = BranchName::new("feature/auth").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"feature/auth\"");

        let parsed: BranchName = serde_json::from_str("\"feature/test\"").unwrap();
        assert_eq!(parsed, "feature/test");

        let invalid: std::result::Result<BranchName, _> = serde_json::from_str("\"bad..name\"");
        assert!(invalid.is_err());
    }
}
