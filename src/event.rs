use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::Commit;
use crate::error::{ReleaseError, Result};

/// Commit record carried in a push event payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayloadCommit {
    pub id: String,
    pub message: String,
}

/// Relevant subset of the push event that triggered the run
///
/// Only the bootstrap path reads this; a payload without a `commits` array
/// (e.g., a non-push trigger) deserializes to an empty set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushEvent {
    #[serde(default)]
    pub commits: Vec<PayloadCommit>,
}

impl PushEvent {
    /// Load the event payload from the file the workflow runner points at
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let event: PushEvent = serde_json::from_str(&raw)
            .map_err(|e| ReleaseError::event(format!("Invalid event payload: {}", e)))?;
        Ok(event)
    }

    /// Convert the payload records into domain commits
    pub fn into_commits(self) -> Vec<Commit> {
        self.commits
            .into_iter()
            .map(|c| Commit::new(c.id, c.message))
            .collect()
    }
}
