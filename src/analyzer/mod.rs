//! Analysis engine - version bump decisions and change classification

pub mod commit_classifier;
pub mod issue_classifier;
pub mod version_analyzer;

pub use commit_classifier::{classify_commits, CommitBuckets};
pub use issue_classifier::{classify_issues, IssueBuckets};
pub use version_analyzer::{determine_version_bump, next_tag};
