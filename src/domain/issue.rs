use regex::Regex;

/// An issue fetched from the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub labels: Vec<String>,
}

impl Issue {
    /// Create a new issue record
    pub fn new(number: u64, title: impl Into<String>, labels: Vec<String>) -> Self {
        Issue {
            number,
            title: title.into(),
            labels,
        }
    }

    /// Classify this issue by its labels
    pub fn category(&self) -> IssueCategory {
        IssueCategory::from_labels(&self.labels)
    }
}

/// Issue category derived from labels
///
/// Precedence is Bugfix > Feature > Other, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCategory {
    Bugfix,
    Feature,
    Other,
}

impl IssueCategory {
    /// Classify an issue from its label set
    ///
    /// A "bug" label always wins; "enhancement", "suggestion" and "feature"
    /// labels mark feature work; anything else is Other.
    pub fn from_labels(labels: &[String]) -> Self {
        if labels.iter().any(|label| label == "bug") {
            IssueCategory::Bugfix
        } else if labels
            .iter()
            .any(|label| matches!(label.as_str(), "enhancement" | "suggestion" | "feature"))
        {
            IssueCategory::Feature
        } else {
            IssueCategory::Other
        }
    }
}

/// Extract the first issue reference from a commit message
///
/// Matches a closing verb stem (clos/fix/resolv) with an e/es/ed inflection
/// followed by " #" and digits, e.g. "fixes #42" or "closed #7". Matching is
/// case-sensitive. Only the first reference in a message is honored;
/// additional references are ignored.
pub fn extract_issue_ref(message: &str) -> Option<u64> {
    Regex::new(r"(clos|fix|resolv)(e|es|ed) #(\d+)")
        .ok()
        .and_then(|re| re.captures(message))
        .and_then(|captures| captures.get(3))
        .and_then(|m| m.as_str().parse::<u64>().ok())
}
