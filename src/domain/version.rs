use crate::domain::bump::BumpLevel;
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Matches `[prefix]MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`; the prefix is
/// every non-digit character before the first digit run.
fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^([^0-9]*)([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([A-Za-z0-9][A-Za-z0-9.]*))?(?:\+([A-Za-z0-9][A-Za-z0-9.]*))?$",
        )
        .expect("version pattern is valid")
    })
}

/// Semantic version with an optional literal prefix, pre-release and build metadata.
///
/// Values are only produced by [`Version::parse`], [`Version::new`] or one of the
/// bump operations, so every `Version` formats back to a string the parser accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<String>,
    build_metadata: Option<String>,
    prefix: String,
}

impl Version {
    /// Create a bare release version (no prefix, pre-release or build metadata)
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build_metadata: None,
            prefix: String::new(),
        }
    }

    /// Parse a version string such as `v1.2.3`, `1.0.0-rc.1` or `v2.0.0+build.5`.
    ///
    /// Leading zeros in numeric components are accepted but not preserved, so
    /// `v01.2.3` formats back as `v1.2.3`. Formatting round-trips exactly for
    /// every input without leading zeros.
    ///
    /// # Errors
    /// Returns [`ReleaseError::InvalidVersionFormat`] when the whole string does
    /// not match the version grammar or a numeric component overflows `u64`.
    pub fn parse(text: &str) -> Result<Self> {
        let captures = version_regex()
            .captures(text)
            .ok_or_else(|| ReleaseError::invalid_version(format!("{:?}", text)))?;

        let number = |idx: usize| -> Result<u64> {
            let digits = captures.get(idx).map(|m| m.as_str()).unwrap_or_default();
            digits.parse::<u64>().map_err(|_| {
                ReleaseError::invalid_version(format!(
                    "{:?}: component '{}' is out of range",
                    text, digits
                ))
            })
        };
        let optional = |idx: usize| captures.get(idx).map(|m| m.as_str().to_string());

        Ok(Version {
            major: number(2)?,
            minor: number(3)?,
            patch: number(4)?,
            prerelease: optional(5),
            build_metadata: optional(6),
            prefix: optional(1).unwrap_or_default(),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// The literal text captured before the major component (e.g. `"v"`)
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn released(&self, major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build_metadata: None,
            prefix: self.prefix.clone(),
        }
    }

    pub fn bump_major(&self) -> Self {
        self.released(self.major.saturating_add(1), 0, 0)
    }

    pub fn bump_minor(&self) -> Self {
        self.released(self.major, self.minor.saturating_add(1), 0)
    }

    pub fn bump_patch(&self) -> Self {
        self.released(self.major, self.minor, self.patch.saturating_add(1))
    }

    /// Apply a bump decision. [`BumpLevel::None`] returns an unchanged copy.
    pub fn bump(&self, level: BumpLevel) -> Self {
        match level {
            BumpLevel::Major => self.bump_major(),
            BumpLevel::Minor => self.bump_minor(),
            BumpLevel::Patch => self.bump_patch(),
            BumpLevel::None => self.clone(),
        }
    }

    /// Release precedence between two versions.
    ///
    /// Numeric components compare as integers; a release outranks any pre-release
    /// of the same core version; two pre-releases compare as plain strings.
    /// Prefix and build metadata never participate.
    pub fn precedence(&self, other: &Version) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }

    /// [`Version::precedence`] as `-1`, `0` or `1`.
    pub fn compare(&self, other: &Version) -> i32 {
        match self.precedence(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{}.{}",
            self.prefix, self.major, self.minor, self.patch
        )?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Pick the highest version among `tags` that start with `prefix` and parse.
///
/// Returns the original tag text alongside the parsed value. Tags that do not
/// parse are skipped.
pub fn latest_version<'a, I>(tags: I, prefix: &str) -> Option<(String, Version)>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && tag.starts_with(prefix))
        .filter_map(|tag| Version::parse(tag).ok().map(|v| (tag.to_string(), v)))
        .fold(None, |best: Option<(String, Version)>, candidate| match best {
            Some(current) if candidate.1.precedence(&current.1) != Ordering::Greater => {
                Some(current)
            }
            _ => Some(candidate),
        })
}
