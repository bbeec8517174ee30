//! Terminal output for release runs.
//!
//! All user-facing formatting lives here, kept apart from the tracing
//! diagnostics the library emits on stderr.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::Commit;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a boundary warning with a yellow warning icon.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the commit window being analyzed.
///
/// Shows where the window starts and up to 10 commit summaries; longer
/// windows are truncated with a count of the remainder.
pub fn display_commit_window(commits: &[Commit], since_tag: Option<&str>) {
    match since_tag {
        Some(tag) => println!(
            "\n{}",
            style(format!("Analyzing {} commits since {}", commits.len(), tag)).bold()
        ),
        None => println!(
            "\n{}",
            style(format!(
                "Analyzing {} commits from the push payload",
                commits.len()
            ))
            .bold()
        ),
    }

    for (i, commit) in commits.iter().take(10).enumerate() {
        let summary = commit.message.lines().next().unwrap_or("");
        let short_msg: String = summary.chars().take(60).collect();
        println!("  {}. {}", i + 1, short_msg);
    }

    if commits.len() > 10 {
        println!("  ... and {} more commits", commits.len() - 10);
    }
}

/// Display the release about to be created (or previewed in dry-run mode).
///
/// Shows either:
/// - If a prior release exists: "From: old_tag -> To: new_tag"
/// - If bootstrapping: "Initial Release: new_tag"
///
/// followed by the rendered notes.
pub fn display_release_preview(previous_tag: Option<&str>, next_tag: &str, notes: &str) {
    match previous_tag {
        Some(previous) => {
            println!("\n{}", style("Proposed Release:").bold());
            println!("  From: {}", style(previous).red());
            println!("  To:   {}", style(next_tag).green());
        }
        None => {
            println!("\n{}", style("Initial Release:").bold());
            println!("  Tag: {}", style(next_tag).green());
        }
    }

    println!("\n{}", style("Release notes:").underlined());
    println!("{}", notes);
}
