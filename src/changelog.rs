//! Markdown release notes grouped by change kind.

use crate::domain::ParsedCommit;

const HEADING: &str = "## What's Changed";

/// Sections in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Breaking,
    Features,
    Fixes,
    Performance,
    Other,
}

impl Section {
    const ORDER: [Section; 5] = [
        Section::Breaking,
        Section::Features,
        Section::Fixes,
        Section::Performance,
        Section::Other,
    ];

    fn title(self) -> &'static str {
        match self {
            Section::Breaking => "Breaking Changes",
            Section::Features => "Features",
            Section::Fixes => "Bug Fixes",
            Section::Performance => "Performance",
            Section::Other => "Other Changes",
        }
    }

    fn of(commit: &ParsedCommit) -> Self {
        if commit.breaking {
            return Section::Breaking;
        }
        match commit.r#type.as_str() {
            "feat" => Section::Features,
            "fix" => Section::Fixes,
            "perf" => Section::Performance,
            _ => Section::Other,
        }
    }
}

fn short_id(id: &str) -> &str {
    match id.char_indices().nth(7) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

fn bullet(commit: &ParsedCommit) -> String {
    let id = short_id(&commit.commit_id);
    if !commit.is_conventional() {
        return format!("- {} ({})", commit.subject_line(), id);
    }
    match commit.scope.as_deref().filter(|s| !s.is_empty()) {
        Some(scope) => format!("- **{}**: {} ({})", scope, commit.description, id),
        None => format!("- {} ({})", commit.description, id),
    }
}

/// Render the changelog for `commits` (kept in input order within each section).
///
/// Empty sections are omitted. The trailing `**Full Changelog**` line is only
/// written when both labels are non-empty.
pub fn generate(commits: &[ParsedCommit], previous_label: &str, new_label: &str) -> String {
    let mut out = String::from(HEADING);
    out.push('\n');

    for section in Section::ORDER {
        let mut entries = commits
            .iter()
            .filter(|c| Section::of(c) == section)
            .peekable();
        if entries.peek().is_none() {
            continue;
        }

        out.push_str(&format!("\n### {}\n", section.title()));
        for commit in entries {
            out.push_str(&bullet(commit));
            out.push('\n');
        }
    }

    if !previous_label.is_empty() && !new_label.is_empty() {
        out.push_str(&format!(
            "\n**Full Changelog**: {}...{}\n",
            previous_label, new_label
        ));
    }

    out
}
