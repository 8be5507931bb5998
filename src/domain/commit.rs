use rayon::prelude::*;
use regex::Regex;
use std::sync::OnceLock;

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_]+)(?:\(([^)]*)\))?(!)?:\s*(.+)$").expect("header pattern is valid")
    })
}

fn footer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_-]+|BREAKING CHANGE)\s*:\s*(.+)$").expect("footer pattern is valid")
    })
}

/// A raw commit as listed by source control: identifier plus full message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawCommit {
    pub id: String,
    pub message: String,
}

impl RawCommit {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        RawCommit {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// A `token: value` trailer line from the end of a commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub token: String,
    pub value: String,
}

impl Footer {
    /// True for `BREAKING CHANGE` / `BREAKING-CHANGE`, compared case-insensitively
    pub fn is_breaking_change(&self) -> bool {
        let token = self.token.to_ascii_uppercase();
        token == "BREAKING CHANGE" || token == "BREAKING-CHANGE"
    }
}

/// Parsed representation of a conventional commit message.
///
/// A message whose first line is not a conventional header is still represented:
/// `type` is empty and only `commit_id`/`raw_message` carry information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommit {
    pub commit_id: String,
    pub raw_message: String,
    pub r#type: String,
    pub scope: Option<String>,
    pub description: String,
    pub body: Option<String>,
    pub footers: Vec<Footer>,
    pub breaking: bool,
}

impl ParsedCommit {
    /// Parse a commit message according to the conventional commits header and
    /// trailer grammar.
    ///
    /// Supported headers:
    /// - `type(scope)!: description`
    /// - `type(scope): description`
    /// - `type!: description`
    /// - `type: description`
    ///
    /// Anything else yields an empty `type` and never fails.
    pub fn parse(commit_id: &str, raw_message: &str) -> Self {
        let mut commit = ParsedCommit {
            commit_id: commit_id.to_string(),
            raw_message: raw_message.to_string(),
            ..ParsedCommit::default()
        };

        let mut lines = raw_message.split('\n');
        let header = lines.next().unwrap_or_default().trim();
        let Some(captures) = header_regex().captures(header) else {
            return commit;
        };

        commit.r#type = captures[1].to_lowercase();
        commit.scope = captures
            .get(2)
            .map(|m| m.as_str().to_string())
            .filter(|s| !s.is_empty());
        commit.breaking = captures.get(3).is_some();
        commit.description = captures[4].to_string();

        let rest: Vec<&str> = lines.collect();
        if !rest.is_empty() {
            let (body, footers) = split_body_and_footers(&rest);
            commit.body = body;
            commit.footers = footers;
        }

        if commit.footers.iter().any(Footer::is_breaking_change) {
            commit.breaking = true;
        }

        commit
    }

    /// First line of the raw message, used when no structured description exists
    pub fn subject_line(&self) -> &str {
        self.raw_message.split('\n').next().unwrap_or_default()
    }

    /// True when the header matched the conventional grammar
    pub fn is_conventional(&self) -> bool {
        !self.r#type.is_empty()
    }
}

/// Split the lines after the header into body text and trailing footers.
///
/// Footers are the contiguous run of footer-shaped lines at the very end; the
/// backward scan stops at the first blank or non-footer line.
fn split_body_and_footers(lines: &[&str]) -> (Option<String>, Vec<Footer>) {
    let footer_start = lines
        .iter()
        .rposition(|line| {
            let trimmed = line.trim();
            trimmed.is_empty() || !footer_regex().is_match(trimmed)
        })
        .map_or(0, |idx| idx + 1);

    let footers = lines[footer_start..]
        .iter()
        .filter_map(|line| {
            footer_regex().captures(line.trim()).map(|c| Footer {
                token: c[1].to_string(),
                value: c[2].to_string(),
            })
        })
        .collect();

    let body = lines[..footer_start].join("\n").trim().to_string();
    let body = if body.is_empty() { None } else { Some(body) };

    (body, footers)
}

/// Parse a batch of raw commits on the rayon pool, preserving input order.
pub fn parse_commits(raw: &[RawCommit]) -> Vec<ParsedCommit> {
    raw.par_iter()
        .map(|c| ParsedCommit::parse(&c.id, &c.message))
        .collect()
}
