//! Formatting functions for UI output.
//!
//! Each `display_*` function prints one message; the matching `format_*`
//! helper builds the text so it can be checked without capturing stdout.

use crate::boundary::BoundaryWarning;
use crate::domain::{BumpLevel, ParsedCommit};
use console::style;

/// Commits listed individually before the summary collapses to a count
const MAX_LISTED_COMMITS: usize = 10;
const MAX_SUBJECT_CHARS: usize = 60;

/// Render an error line as `error: <message>` with a red label.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("error:").red(), message)
}

/// Print an error line to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the commit summary shown before a release decision.
///
/// Lists up to 10 commits by subject line; longer lists end with a count of
/// the remainder.
pub fn format_commit_analysis(commits: &[ParsedCommit]) -> Vec<String> {
    let mut lines = vec![format!("Found {} commit(s) since last tag", commits.len())];

    for (i, commit) in commits.iter().take(MAX_LISTED_COMMITS).enumerate() {
        let marker = if commit.breaking { " [breaking]" } else { "" };
        lines.push(format!(
            "  {}. {}{}",
            i + 1,
            truncate(commit.subject_line(), MAX_SUBJECT_CHARS),
            marker
        ));
    }

    if commits.len() > MAX_LISTED_COMMITS {
        lines.push(format!(
            "  ... and {} more commits",
            commits.len() - MAX_LISTED_COMMITS
        ));
    }
    lines
}

pub fn display_commit_analysis(commits: &[ParsedCommit]) {
    let mut lines = format_commit_analysis(commits).into_iter();
    if let Some(title) = lines.next() {
        println!("\n{}", style(title).bold());
    }
    for line in lines {
        println!("{}", line);
    }
}

/// Build the "from -> to" release summary.
pub fn format_release_plan(previous: Option<&str>, new_version: &str, bump: BumpLevel) -> String {
    match previous {
        Some(old) => format!("{} -> {} ({} bump)", old, new_version, bump),
        None => format!("initial release {}", new_version),
    }
}

/// Display the proposed version change (or initial version).
pub fn display_release_plan(previous: Option<&str>, new_version: &str, bump: BumpLevel) {
    println!(
        "\n{} {}",
        style("Release:").bold(),
        style(format_release_plan(previous, new_version, bump)).green()
    );
}
