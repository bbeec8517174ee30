//! Hosting platform abstraction layer
//!
//! This module provides a trait-based abstraction over the source-code
//! hosting platform, allowing for multiple implementations including the
//! real GitHub API and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [ReleaseHost] trait, which defines the
//! operations a release run needs. The concrete implementations include:
//!
//! - [github::GitHubHost]: A real implementation backed by the `octocrab` crate
//! - [mock::MockHost]: A mock implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [ReleaseHost] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```no_run
//! # use auto_release::host::ReleaseHost;
//! # async fn example<H: ReleaseHost>(host: &H) -> Result<(), Box<dyn std::error::Error>> {
//! if let Some(release) = host.latest_release().await? {
//!     println!("latest release: {}", release.tag_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod github;
pub mod mock;

pub use github::GitHubHost;
pub use mock::MockHost;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Commit, Issue};
use crate::error::Result;

/// Latest-release information returned by the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedRelease {
    /// The tag the release was published under
    pub tag_name: String,
    /// Publish timestamp, the lower bound of the next commit window
    pub published_at: Option<DateTime<Utc>>,
}

/// Common hosting platform trait for abstraction
///
/// This trait abstracts the hosting API so a release run can be driven
/// against the real platform or a mock.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across tasks.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Lookups whose subject may
/// legitimately be missing ([ReleaseHost::latest_release] and
/// [ReleaseHost::issue]) express not-found as `Ok(None)` rather than an
/// error; every `Err` is an unrecoverable fault.
#[async_trait]
pub trait ReleaseHost: Send + Sync {
    /// Fetch the latest published release
    ///
    /// # Returns
    /// * `Ok(Some(PublishedRelease))` - The most recent release
    /// * `Ok(None)` - The repository has no releases yet
    /// * `Err` - If the platform request fails
    async fn latest_release(&self) -> Result<Option<PublishedRelease>>;

    /// Fetch all commits pushed since the given timestamp
    ///
    /// Commits are returned in the platform's listing order, newest first.
    ///
    /// # Arguments
    /// * `since` - Lower bound, normally the latest release's publish time
    ///
    /// # Returns
    /// * `Ok(Vec<Commit>)` - Commit ids and messages in listing order
    /// * `Err` - If the platform request fails
    async fn commits_since(&self, since: DateTime<Utc>) -> Result<Vec<Commit>>;

    /// Fetch a single issue by number
    ///
    /// # Arguments
    /// * `number` - Issue number parsed out of a commit message
    ///
    /// # Returns
    /// * `Ok(Some(Issue))` - The issue with its title and label names
    /// * `Ok(None)` - No such issue exists
    /// * `Err` - If the platform request fails
    async fn issue(&self, number: u64) -> Result<Option<Issue>>;

    /// Publish a release under the given tag with the rendered notes body
    ///
    /// # Arguments
    /// * `tag` - The computed release tag (e.g., "v1.2.0")
    /// * `body` - Rendered Markdown release notes
    ///
    /// # Returns
    /// * `Ok(String)` - URL of the created release
    /// * `Err` - If publishing fails
    async fn publish_release(&self, tag: &str, body: &str) -> Result<String>;
}
