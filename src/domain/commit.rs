use regex::Regex;

/// A commit as reported by the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Content-addressed hash
    pub id: String,
    /// Free-text message, possibly multi-line
    pub message: String,
}

impl Commit {
    /// Create a new commit record
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Commit {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Classify this commit by its change tag
    pub fn category(&self) -> ChangeCategory {
        ChangeCategory::from_message(&self.message)
    }
}

/// Change category carried by a commit message
///
/// Every commit lands in exactly one category. Precedence is
/// Major > Feature > Patch, first match wins; untagged commits are Other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCategory {
    Major,
    Feature,
    Patch,
    Other,
}

impl ChangeCategory {
    /// Classify a commit message by its bracketed change tag
    ///
    /// The substring test is case-insensitive, so "[MAJOR]" and "[Major]"
    /// count the same as "[major]".
    pub fn from_message(message: &str) -> Self {
        let message = message.to_lowercase();
        if message.contains("[major]") {
            ChangeCategory::Major
        } else if message.contains("[feature]") {
            ChangeCategory::Feature
        } else if message.contains("[patch]") {
            ChangeCategory::Patch
        } else {
            ChangeCategory::Other
        }
    }
}

/// Remove every literal change tag from a commit message
///
/// Only the lowercase forms `[major]`, `[patch]` and `[feature]` are
/// stripped; classification is case-insensitive but stripping is not.
pub fn strip_change_tags(message: &str) -> String {
    match Regex::new(r"\[(?:major|patch|feature)\]") {
        Ok(re) => re.replace_all(message, "").into_owned(),
        Err(_) => message.to_string(),
    }
}
