use crate::domain::{Issue, IssueCategory};

/// Issues partitioned by category
///
/// Bucket order mirrors the order issues were pushed, which the
/// orchestrator keeps aligned with commit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueBuckets {
    pub bugfix: Vec<Issue>,
    pub feature: Vec<Issue>,
    pub other: Vec<Issue>,
}

impl IssueBuckets {
    /// Place an issue in its bucket
    pub fn push(&mut self, issue: Issue) {
        match issue.category() {
            IssueCategory::Bugfix => self.bugfix.push(issue),
            IssueCategory::Feature => self.feature.push(issue),
            IssueCategory::Other => self.other.push(issue),
        }
    }

    /// Total number of issues across all buckets
    pub fn len(&self) -> usize {
        self.bugfix.len() + self.feature.len() + self.other.len()
    }

    /// True when no bucket holds an issue
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition issues into category buckets, preserving input order
pub fn classify_issues(issues: &[Issue]) -> IssueBuckets {
    let mut buckets = IssueBuckets::default();
    for issue in issues {
        buckets.push(issue.clone());
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(number: u64, labels: &[&str]) -> Issue {
        Issue::new(
            number,
            format!("Issue {}", number),
            labels.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_classify_each_category() {
        let issues = vec![
            issue(1, &["bug"]),
            issue(2, &["enhancement"]),
            issue(3, &["question"]),
        ];

        let buckets = classify_issues(&issues);
        assert_eq!(buckets.bugfix.len(), 1);
        assert_eq!(buckets.feature.len(), 1);
        assert_eq!(buckets.other.len(), 1);
    }

    #[test]
    fn test_classify_bug_precedence() {
        let issues = vec![issue(1, &["bug", "enhancement"])];
        let buckets = classify_issues(&issues);
        assert_eq!(buckets.bugfix.len(), 1);
        assert!(buckets.feature.is_empty());
    }

    #[test]
    fn test_classify_preserves_order() {
        let issues = vec![issue(9, &["bug"]), issue(2, &["bug"]), issue(5, &["bug"])];
        let buckets = classify_issues(&issues);
        let numbers: Vec<u64> = buckets.bugfix.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![9, 2, 5]);
    }

    #[test]
    fn test_classify_unlabeled_is_other() {
        let issues = vec![issue(4, &[])];
        let buckets = classify_issues(&issues);
        assert_eq!(buckets.other.len(), 1);
    }

    #[test]
    fn test_classify_empty_input() {
        let buckets = classify_issues(&[]);
        assert!(buckets.is_empty());
    }
}
