//! Release workflow driver.
//!
//! Fetches the commit window from the hosting platform, runs the pure
//! analysis pipeline over it, and publishes the result. This is the only
//! module that touches the network.

use tracing::{debug, info, warn};

use crate::analyzer::{classify_commits, next_tag, IssueBuckets};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{extract_issue_ref, Commit};
use crate::error::Result;
use crate::event::PushEvent;
use crate::host::{PublishedRelease, ReleaseHost};
use crate::notes::render_notes;
use crate::ui;

/// Tag used when the repository has no releases yet
pub const BOOTSTRAP_TAG: &str = "v1.0.0";

/// Outcome of a release run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// The computed tag
    pub tag: String,
    /// The rendered release notes
    pub notes: String,
    /// URL of the created release, unless the run was a dry run
    pub release_url: Option<String>,
    /// False in dry-run mode
    pub published: bool,
    /// True when the run used the bootstrap path
    pub bootstrapped: bool,
}

/// Drives a release run end to end against a hosting platform.
///
/// Two paths exist. The normal path fetches the latest release and the
/// commits pushed since its publish time. The bootstrap path kicks in when
/// no release exists yet: the tag is fixed to [BOOTSTRAP_TAG] and the
/// commit window comes from the triggering event payload instead of the
/// platform. Both paths run the same classification and rendering pipeline.
pub struct ReleaseOrchestrator<'a, H: ReleaseHost> {
    host: &'a H,
    config: Config,
    dry_run: bool,
}

impl<'a, H: ReleaseHost> ReleaseOrchestrator<'a, H> {
    /// Create an orchestrator for the given host and configuration
    pub fn new(host: &'a H, config: Config) -> Self {
        ReleaseOrchestrator {
            host,
            config,
            dry_run: false,
        }
    }

    /// Preview the tag and notes without publishing
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the release workflow
    ///
    /// Establishes the commit window, computes the next tag, classifies
    /// commits and referenced issues, renders the notes, and publishes the
    /// release. Issue lookups that miss are skipped; any platform fault is
    /// fatal and aborts the run.
    pub async fn run(&self) -> Result<ReleaseOutcome> {
        let (previous_tag, commits) = self.collect_window().await?;
        let bootstrapped = previous_tag.is_none();

        let tag = match previous_tag.as_deref() {
            Some(previous) => next_tag(previous, &commits)?,
            None => BOOTSTRAP_TAG.to_string(),
        };

        if commits.is_empty() {
            if let Some(previous) = previous_tag.as_deref() {
                ui::display_boundary_warning(&BoundaryWarning::NoNewCommits {
                    since_tag: previous.to_string(),
                });
            }
        }
        ui::display_commit_window(&commits, previous_tag.as_deref());

        let commit_buckets = classify_commits(&commits);
        let issue_buckets = self.collect_issues(&commits).await?;
        let notes = render_notes(&commit_buckets, &issue_buckets);

        if self.dry_run {
            ui::display_release_preview(previous_tag.as_deref(), &tag, &notes);
            info!(tag = %tag, "Dry run, skipping publish");
            return Ok(ReleaseOutcome {
                tag,
                notes,
                release_url: None,
                published: false,
                bootstrapped,
            });
        }

        let release_url = self.host.publish_release(&tag, &notes).await?;
        info!(tag = %tag, "Release published");

        Ok(ReleaseOutcome {
            tag,
            notes,
            release_url: Some(release_url),
            published: true,
            bootstrapped,
        })
    }

    /// Establish the release window
    ///
    /// Returns the previous tag and the commits since it, or `(None, payload
    /// commits)` on the bootstrap path.
    async fn collect_window(&self) -> Result<(Option<String>, Vec<Commit>)> {
        match self.host.latest_release().await? {
            Some(PublishedRelease {
                tag_name,
                published_at: Some(since),
            }) => {
                debug!(tag = %tag_name, since = %since, "Found latest release");
                let commits = self.host.commits_since(since).await?;
                Ok((Some(tag_name), commits))
            }
            Some(release) => {
                warn!(
                    tag = %release.tag_name,
                    "Latest release has no publish timestamp, bootstrapping"
                );
                ui::display_boundary_warning(&BoundaryWarning::NoPriorRelease {
                    fallback_tag: BOOTSTRAP_TAG.to_string(),
                });
                Ok((None, self.payload_commits()))
            }
            None => {
                info!("No prior release found, bootstrapping");
                ui::display_boundary_warning(&BoundaryWarning::NoPriorRelease {
                    fallback_tag: BOOTSTRAP_TAG.to_string(),
                });
                Ok((None, self.payload_commits()))
            }
        }
    }

    /// Commits carried by the triggering push event
    ///
    /// A missing or unreadable payload degrades to an empty window with a
    /// warning; the bootstrap release is still created.
    fn payload_commits(&self) -> Vec<Commit> {
        let path = match self.config.event_path.as_deref() {
            Some(path) => path,
            None => {
                ui::display_boundary_warning(&BoundaryWarning::MissingEventPayload {
                    reason: "no event path configured".to_string(),
                });
                return Vec::new();
            }
        };

        match PushEvent::load(path) {
            Ok(event) => event.into_commits(),
            Err(e) => {
                ui::display_boundary_warning(&BoundaryWarning::MissingEventPayload {
                    reason: e.to_string(),
                });
                Vec::new()
            }
        }
    }

    /// Fetch and classify issues referenced by the commit messages
    ///
    /// Lookups run strictly sequentially in commit order, so bucket order
    /// mirrors commit order rather than issue-number order. Referenced
    /// issues that do not exist are skipped.
    async fn collect_issues(&self, commits: &[Commit]) -> Result<IssueBuckets> {
        let mut buckets = IssueBuckets::default();

        if !self.config.behavior.issue_notes {
            debug!("Issue notes disabled, skipping issue lookups");
            return Ok(buckets);
        }

        for commit in commits {
            let number = match extract_issue_ref(&commit.message) {
                Some(number) => number,
                None => continue,
            };
            match self.host.issue(number).await? {
                Some(issue) => buckets.push(issue),
                None => debug!(number, "Referenced issue not found, skipping"),
            }
        }

        Ok(buckets)
    }
}
