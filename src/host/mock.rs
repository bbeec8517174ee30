use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{Commit, Issue};
use crate::error::{ReleaseError, Result};
use crate::host::{PublishedRelease, ReleaseHost};

/// Mock host for testing without network access
///
/// Setup happens through `&mut self` methods before the host is handed to
/// the orchestrator; published releases and issue lookups are recorded so
/// tests can assert on them afterwards.
pub struct MockHost {
    latest: Option<PublishedRelease>,
    commits: Vec<Commit>,
    issues: HashMap<u64, Issue>,
    fail_publish: bool,
    published: Mutex<Vec<(String, String)>>,
    issue_lookups: Mutex<Vec<u64>>,
}

impl MockHost {
    /// Create a new empty mock host
    pub fn new() -> Self {
        MockHost {
            latest: None,
            commits: Vec::new(),
            issues: HashMap::new(),
            fail_publish: false,
            published: Mutex::new(Vec::new()),
            issue_lookups: Mutex::new(Vec::new()),
        }
    }

    /// Set the latest release, with or without a publish timestamp
    pub fn set_latest_release(
        &mut self,
        tag: impl Into<String>,
        published_at: Option<DateTime<Utc>>,
    ) {
        self.latest = Some(PublishedRelease {
            tag_name: tag.into(),
            published_at,
        });
    }

    /// Add a commit to the window returned by `commits_since`
    pub fn add_commit(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.commits.push(Commit::new(id, message));
    }

    /// Add an issue that lookups can find
    pub fn add_issue(&mut self, number: u64, title: impl Into<String>, labels: &[&str]) {
        self.issues.insert(
            number,
            Issue::new(
                number,
                title,
                labels.iter().map(|s| s.to_string()).collect(),
            ),
        );
    }

    /// Make `publish_release` fail
    pub fn fail_publish(&mut self) {
        self.fail_publish = true;
    }

    /// Releases published so far, as (tag, body) pairs
    pub fn published(&self) -> Vec<(String, String)> {
        self.published.lock().expect("mock lock poisoned").clone()
    }

    /// Issue numbers looked up, in call order
    pub fn issue_lookups(&self) -> Vec<u64> {
        self.issue_lookups
            .lock()
            .expect("mock lock poisoned")
            .clone()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReleaseHost for MockHost {
    async fn latest_release(&self) -> Result<Option<PublishedRelease>> {
        Ok(self.latest.clone())
    }

    async fn commits_since(&self, _since: DateTime<Utc>) -> Result<Vec<Commit>> {
        Ok(self.commits.clone())
    }

    async fn issue(&self, number: u64) -> Result<Option<Issue>> {
        self.issue_lookups
            .lock()
            .expect("mock lock poisoned")
            .push(number);
        Ok(self.issues.get(&number).cloned())
    }

    async fn publish_release(&self, tag: &str, body: &str) -> Result<String> {
        if self.fail_publish {
            return Err(ReleaseError::host("Validation Failed: tag_name already exists"));
        }
        self.published
            .lock()
            .expect("mock lock poisoned")
            .push((tag.to_string(), body.to_string()));
        Ok(format!("https://example.com/releases/tag/{}", tag))
    }
}
