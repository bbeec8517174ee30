use crate::domain::{ChangeCategory, Commit};

/// Commits partitioned by change category
///
/// Each bucket preserves the relative order of the input; a commit appears
/// in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitBuckets {
    pub major: Vec<Commit>,
    pub feature: Vec<Commit>,
    pub patch: Vec<Commit>,
    pub other: Vec<Commit>,
}

impl CommitBuckets {
    /// Place a commit in its bucket
    pub fn push(&mut self, commit: Commit) {
        match commit.category() {
            ChangeCategory::Major => self.major.push(commit),
            ChangeCategory::Feature => self.feature.push(commit),
            ChangeCategory::Patch => self.patch.push(commit),
            ChangeCategory::Other => self.other.push(commit),
        }
    }

    /// Total number of commits across all buckets
    pub fn len(&self) -> usize {
        self.major.len() + self.feature.len() + self.patch.len() + self.other.len()
    }

    /// True when no bucket holds a commit
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition commits into change-category buckets, preserving input order
pub fn classify_commits(commits: &[Commit]) -> CommitBuckets {
    let mut buckets = CommitBuckets::default();
    for commit in commits {
        buckets.push(commit.clone());
    }
    buckets
}
