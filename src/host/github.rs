use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use tracing::{debug, info};

use crate::domain::{Commit, Issue};
use crate::error::{ReleaseError, Result};
use crate::host::{PublishedRelease, ReleaseHost};

/// GitHub implementation of [ReleaseHost] backed by `octocrab`
///
/// All requests are scoped to a single repository and authenticated with a
/// personal or workflow token.
pub struct GitHubHost {
    client: Octocrab,
    owner: String,
    repo: String,
    draft: bool,
    prerelease: bool,
}

impl GitHubHost {
    /// Create a host for the given repository, authenticated with `token`
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.into())
            .build()
            .map_err(|e| ReleaseError::host(format!("Failed to build GitHub client: {}", e)))?;

        Ok(GitHubHost {
            client,
            owner: owner.into(),
            repo: repo.into(),
            draft: false,
            prerelease: false,
        })
    }

    /// Create releases as drafts
    #[must_use]
    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    /// Mark created releases as prereleases
    #[must_use]
    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }
}

#[async_trait]
impl ReleaseHost for GitHubHost {
    async fn latest_release(&self) -> Result<Option<PublishedRelease>> {
        let repos = self.client.repos(&self.owner, &self.repo);
        let releases = repos.releases();

        match releases.get_latest().await {
            Ok(release) => {
                debug!(tag = %release.tag_name, "Found latest release");
                Ok(Some(PublishedRelease {
                    tag_name: release.tag_name,
                    published_at: release.published_at,
                }))
            }
            Err(octocrab::Error::GitHub { source, .. }) if source.message.contains("Not Found") => {
                Ok(None)
            }
            Err(e) => Err(ReleaseError::host(format!(
                "Failed to fetch latest release: {}",
                e
            ))),
        }
    }

    async fn commits_since(&self, since: DateTime<Utc>) -> Result<Vec<Commit>> {
        let mut page = self
            .client
            .repos(&self.owner, &self.repo)
            .list_commits()
            .since(since)
            .per_page(100)
            .send()
            .await
            .map_err(|e| ReleaseError::host(format!("Failed to list commits: {}", e)))?;

        let mut commits = Vec::new();
        loop {
            for item in page.take_items() {
                commits.push(Commit::new(item.sha, item.commit.message));
            }
            let next = self
                .client
                .get_page(&page.next)
                .await
                .map_err(|e| ReleaseError::host(format!("Failed to page commits: {}", e)))?;
            match next {
                Some(next_page) => page = next_page,
                None => break,
            }
        }

        debug!(count = commits.len(), since = %since, "Fetched commits since last release");
        Ok(commits)
    }

    async fn issue(&self, number: u64) -> Result<Option<Issue>> {
        match self.client.issues(&self.owner, &self.repo).get(number).await {
            Ok(issue) => Ok(Some(Issue {
                number: issue.number,
                title: issue.title,
                labels: issue.labels.into_iter().map(|label| label.name).collect(),
            })),
            Err(octocrab::Error::GitHub { source, .. }) if source.message.contains("Not Found") => {
                Ok(None)
            }
            Err(e) => Err(ReleaseError::host(format!(
                "Failed to fetch issue #{}: {}",
                number, e
            ))),
        }
    }

    async fn publish_release(&self, tag: &str, body: &str) -> Result<String> {
        let release = self
            .client
            .repos(&self.owner, &self.repo)
            .releases()
            .create(tag)
            .body(body)
            .draft(self.draft)
            .prerelease(self.prerelease)
            .send()
            .await
            .map_err(|e| ReleaseError::host(format!("Failed to publish release {}: {}", tag, e)))?;

        info!(tag = %tag, url = %release.html_url, "Published release");
        Ok(release.html_url.to_string())
    }
}
