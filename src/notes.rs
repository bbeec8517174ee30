//! Release notes rendering.
//!
//! Turns classified commit and issue buckets into a deterministic Markdown
//! document. Issue sections come first (Bugfixes, Features Implemented,
//! Issues Closed), then a blank separator line, then commit sections
//! (Major Changes, Features, Patches, Other Changes). Empty sections are
//! omitted entirely.

use crate::analyzer::{CommitBuckets, IssueBuckets};
use crate::domain::{strip_change_tags, Commit, Issue};

/// Render release notes from classified buckets
///
/// Pure and deterministic: the same buckets always produce the same
/// Markdown. Commit lines carry the id and the message with its literal
/// change tags stripped; issue lines carry the number and title.
pub fn render_notes(commits: &CommitBuckets, issues: &IssueBuckets) -> String {
    let mut notes = String::new();

    issue_section(&mut notes, "Bugfixes", &issues.bugfix);
    issue_section(&mut notes, "Features Implemented", &issues.feature);
    issue_section(&mut notes, "Issues Closed", &issues.other);

    // Separator between the issue half and the commit half
    notes.push('\n');

    commit_section(&mut notes, "Major Changes", &commits.major);
    commit_section(&mut notes, "Features", &commits.feature);
    commit_section(&mut notes, "Patches", &commits.patch);
    commit_section(&mut notes, "Other Changes", &commits.other);

    notes
}

fn commit_section(notes: &mut String, title: &str, commits: &[Commit]) {
    if commits.is_empty() {
        return;
    }
    let lines: Vec<String> = commits
        .iter()
        .map(|commit| format!("- {} {}", commit.id, strip_change_tags(&commit.message)))
        .collect();
    notes.push_str(&format!("## {}\n{}\n", title, lines.join("\n")));
}

fn issue_section(notes: &mut String, title: &str, issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }
    let lines: Vec<String> = issues
        .iter()
        .map(|issue| format!("- {} - {}", issue.number, issue.title))
        .collect();
    notes.push_str(&format!("## {}\n{}\n", title, lines.join("\n")));
}
