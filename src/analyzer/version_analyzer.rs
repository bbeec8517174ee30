use crate::domain::{Commit, Version, VersionBump};
use crate::error::Result;

/// Decide the version bump from a set of commits
///
/// Scans every message for bracketed change tags, case-insensitively, in
/// priority order: any `[major]` forces a major bump, otherwise any
/// `[feature]` gives a minor bump, otherwise the release is a patch even
/// when no commit carries a `[patch]` tag.
pub fn determine_version_bump(commits: &[Commit]) -> VersionBump {
    let mut has_feature = false;

    for commit in commits {
        let message = commit.message.to_lowercase();
        if message.contains("[major]") {
            return VersionBump::Major;
        }
        if message.contains("[feature]") {
            has_feature = true;
        }
    }

    if has_feature {
        VersionBump::Minor
    } else {
        VersionBump::Patch
    }
}

/// Compute the next release tag from the previous tag and the commit window
///
/// Parses the previous tag (padding short tags to three segments), applies
/// the bump decided by [determine_version_bump], and renders the result as
/// "v{major}.{minor}.{patch}".
pub fn next_tag(previous_tag: &str, commits: &[Commit]) -> Result<String> {
    let previous = Version::parse(previous_tag)?;
    let bump = determine_version_bump(commits);
    Ok(previous.bump(&bump).tag())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(message: &str) -> Commit {
        Commit::new("deadbeef", message)
    }

    #[test]
    fn test_bump_major() {
        let commits = vec![commit("[major] drop v1 API")];
        assert_eq!(determine_version_bump(&commits), VersionBump::Major);
    }

    #[test]
    fn test_bump_feature() {
        let commits = vec![commit("[feature] add export")];
        assert_eq!(determine_version_bump(&commits), VersionBump::Minor);
    }

    #[test]
    fn test_bump_patch_with_tag() {
        let commits = vec![commit("[patch] fix overflow")];
        assert_eq!(determine_version_bump(&commits), VersionBump::Patch);
    }

    #[test]
    fn test_bump_defaults_to_patch() {
        let commits = vec![commit("misc"), commit("update docs")];
        assert_eq!(determine_version_bump(&commits), VersionBump::Patch);
    }

    #[test]
    fn test_bump_empty_window() {
        assert_eq!(determine_version_bump(&[]), VersionBump::Patch);
    }

    #[test]
    fn test_bump_major_beats_feature() {
        let commits = vec![
            commit("[feature] add export"),
            commit("[major] drop v1 API"),
        ];
        assert_eq!(determine_version_bump(&commits), VersionBump::Major);
    }

    #[test]
    fn test_bump_case_insensitive() {
        let commits = vec![commit("[MAJOR] rewrite everything")];
        assert_eq!(determine_version_bump(&commits), VersionBump::Major);

        let commits = vec![commit("[Feature] polished UI")];
        assert_eq!(determine_version_bump(&commits), VersionBump::Minor);
    }

    #[test]
    fn test_bump_tag_in_commit_body() {
        let commits = vec![commit("redesign storage\n\n[major] on-disk format change")];
        assert_eq!(determine_version_bump(&commits), VersionBump::Major);
    }

    #[test]
    fn test_next_tag_major() {
        let commits = vec![commit("[major] drop v1 API")];
        assert_eq!(next_tag("v1.2.3", &commits).unwrap(), "v2.0.0");
    }

    #[test]
    fn test_next_tag_feature() {
        let commits = vec![commit("[feature] add export")];
        assert_eq!(next_tag("v1.2.3", &commits).unwrap(), "v1.3.0");
    }

    #[test]
    fn test_next_tag_default_patch() {
        let commits = vec![commit("misc")];
        assert_eq!(next_tag("v1.2.3", &commits).unwrap(), "v1.2.4");
    }

    #[test]
    fn test_next_tag_pads_short_tags() {
        assert_eq!(next_tag("v2", &[]).unwrap(), "v2.0.1");
        assert_eq!(next_tag("v2.1", &[]).unwrap(), "v2.1.1");
    }

    #[test]
    fn test_next_tag_priority_over_mixed_commits() {
        let commits = vec![commit("[feature] x"), commit("[MAJOR] y")];
        assert_eq!(next_tag("v1.2.3", &commits).unwrap(), "v2.0.0");
    }

    #[test]
    fn test_next_tag_major_zeroes_lower_segments() {
        let commits = vec![commit("[major] breaking")];
        assert_eq!(next_tag("v2", &commits).unwrap(), "v3.0.0");
    }

    #[test]
    fn test_next_tag_feature_zeroes_patch() {
        let commits = vec![commit("[feature] shiny")];
        assert_eq!(next_tag("v2.1", &commits).unwrap(), "v2.2.0");
    }

    #[test]
    fn test_next_tag_rejects_malformed_previous() {
        assert!(next_tag("vticket", &[]).is_err());
        assert!(next_tag("v1.x.0", &[]).is_err());
        assert!(next_tag("v1.2.3.4", &[]).is_err());
    }

    #[test]
    fn test_next_tag_is_deterministic() {
        let commits = vec![commit("[feature] add export")];
        let first = next_tag("v1.2.3", &commits).unwrap();
        let second = next_tag("v1.2.3", &commits).unwrap();
        assert_eq!(first, second);
    }
}
