use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseError, Result};

/// Repository coordinates on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parse an "owner/name" slug as passed via `--repo` or `GITHUB_REPOSITORY`
    pub fn parse(slug: &str) -> Result<Self> {
        match slug.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(RepoRef {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(ReleaseError::config(format!(
                "Invalid repository '{}' - expected owner/name",
                slug
            ))),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Behavior options loaded from the optional TOML file.
///
/// Controls how notes are generated and how the release is created without
/// affecting the versioning rules.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Look up referenced issues and render issue sections (default true)
    #[serde(default = "default_issue_notes")]
    pub issue_notes: bool,

    /// Create the release as a draft
    #[serde(default)]
    pub draft: bool,

    /// Mark the release as a prerelease
    #[serde(default)]
    pub prerelease: bool,
}

fn default_issue_notes() -> bool {
    true
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            issue_notes: true,
            draft: false,
            prerelease: false,
        }
    }
}

/// On-disk layout of the configuration file
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    behavior: BehaviorConfig,
}

/// Complete resolved configuration for a release run.
///
/// Assembled once at startup and passed into the orchestrator; nothing in
/// the core reads ambient process state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository the release is created in
    pub repo: RepoRef,
    /// Authentication token for the hosting platform
    pub token: String,
    /// Path to the triggering event payload, when available
    pub event_path: Option<PathBuf>,
    /// Behavior options from the TOML file
    pub behavior: BehaviorConfig,
}

/// Loads behavior configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autorelease.toml` in current directory
/// 3. `autorelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(BehaviorConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_behavior(config_path: Option<&str>) -> Result<BehaviorConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./autorelease.toml").exists() {
        fs::read_to_string("./autorelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("autorelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(BehaviorConfig::default());
        }
    } else {
        return Ok(BehaviorConfig::default());
    };

    let file: ConfigFile = toml::from_str(&config_str)
        .map_err(|e| ReleaseError::config(format!("Invalid config file: {}", e)))?;
    Ok(file.behavior)
}

/// Resolve the complete runtime configuration.
///
/// Explicit arguments take precedence over the environment variables the
/// workflow runner provides (`GITHUB_TOKEN`, `GITHUB_REPOSITORY`,
/// `GITHUB_EVENT_PATH`). The token and repository are preconditions;
/// resolution fails before any network call when either is missing.
pub fn resolve_config(
    config_path: Option<&str>,
    repo: Option<&str>,
    token: Option<&str>,
    event_path: Option<&str>,
) -> Result<Config> {
    let token = match token {
        Some(t) => t.to_string(),
        None => env::var("GITHUB_TOKEN").map_err(|_| {
            ReleaseError::config("Missing authentication token - pass --token or set GITHUB_TOKEN")
        })?,
    };

    let slug = match repo {
        Some(r) => r.to_string(),
        None => env::var("GITHUB_REPOSITORY").map_err(|_| {
            ReleaseError::config("Missing repository - pass --repo or set GITHUB_REPOSITORY")
        })?,
    };
    let repo = RepoRef::parse(&slug)?;

    let event_path = match event_path {
        Some(p) => Some(PathBuf::from(p)),
        None => env::var("GITHUB_EVENT_PATH").ok().map(PathBuf::from),
    };

    let behavior = load_behavior(config_path)?;

    Ok(Config {
        repo,
        token,
        event_path,
        behavior,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_ref_parse() {
        let repo = RepoRef::parse("octocat/hello-world").unwrap();
        assert_eq!(repo.owner, "octocat");
        assert_eq!(repo.name, "hello-world");
    }

    #[test]
    fn test_repo_ref_parse_invalid() {
        assert!(RepoRef::parse("no-slash").is_err());
        assert!(RepoRef::parse("/name").is_err());
        assert!(RepoRef::parse("owner/").is_err());
        assert!(RepoRef::parse("").is_err());
    }

    #[test]
    fn test_repo_ref_keeps_extra_segments() {
        // split_once keeps everything after the first slash as the name
        let repo = RepoRef::parse("owner/name/extra").unwrap();
        assert_eq!(repo.name, "name/extra");
    }

    #[test]
    fn test_repo_ref_display() {
        let repo = RepoRef::parse("octocat/hello-world").unwrap();
        assert_eq!(repo.to_string(), "octocat/hello-world");
    }

    #[test]
    fn test_behavior_defaults() {
        let behavior = BehaviorConfig::default();
        assert!(behavior.issue_notes);
        assert!(!behavior.draft);
        assert!(!behavior.prerelease);
    }

    #[test]
    fn test_behavior_from_toml() {
        let file: ConfigFile = toml::from_str(
            r#"
[behavior]
issue_notes = false
draft = true
"#,
        )
        .unwrap();
        assert!(!file.behavior.issue_notes);
        assert!(file.behavior.draft);
        assert!(!file.behavior.prerelease);
    }

    #[test]
    fn test_behavior_from_empty_toml() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file.behavior, BehaviorConfig::default());
    }
}
