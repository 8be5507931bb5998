use crate::domain::commit::ParsedCommit;
use std::fmt;

/// Magnitude of a version change, ordered `None < Patch < Minor < Major`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BumpLevel {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpLevel::None => "none",
            BumpLevel::Patch => "patch",
            BumpLevel::Minor => "minor",
            BumpLevel::Major => "major",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduce an ordered batch of parsed commits to a single bump decision.
///
/// The first breaking commit short-circuits to [`BumpLevel::Major`]. Otherwise
/// `feat` raises to minor, `fix`/`perf` to patch, and every other type (including
/// unparsed messages) to patch only when `bump_unknown_to_patch` is set.
pub fn determine_bump(commits: &[ParsedCommit], bump_unknown_to_patch: bool) -> BumpLevel {
    let mut bump = BumpLevel::None;

    for commit in commits {
        if commit.breaking {
            return BumpLevel::Major;
        }

        let implied = match commit.r#type.as_str() {
            "feat" => BumpLevel::Minor,
            "fix" | "perf" => BumpLevel::Patch,
            _ if bump_unknown_to_patch => BumpLevel::Patch,
            _ => BumpLevel::None,
        };
        bump = bump.max(implied);
    }

    bump
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(ty: &str) -> ParsedCommit {
        ParsedCommit {
            r#type: ty.to_string(),
            ..ParsedCommit::default()
        }
    }

    fn breaking(ty: &str) -> ParsedCommit {
        ParsedCommit {
            breaking: true,
            ..commit(ty)
        }
    }

    #[test]
    fn test_bump_level_ordering() {
        assert!(BumpLevel::None < BumpLevel::Patch);
        assert!(BumpLevel::Patch < BumpLevel::Minor);
        assert!(BumpLevel::Minor < BumpLevel::Major);
    }

    #[test]
    fn test_bump_level_display() {
        assert_eq!(BumpLevel::None.to_string(), "none");
        assert_eq!(BumpLevel::Patch.to_string(), "patch");
        assert_eq!(BumpLevel::Minor.to_string(), "minor");
        assert_eq!(BumpLevel::Major.to_string(), "major");
    }

    #[test]
    fn test_determine_bump() {
        let cases: Vec<(&str, Vec<ParsedCommit>, bool, BumpLevel)> = vec![
            ("empty", vec![], false, BumpLevel::None),
            ("fix only", vec![commit("fix")], false, BumpLevel::Patch),
            ("perf only", vec![commit("perf")], false, BumpLevel::Patch),
            ("feat only", vec![commit("feat")], false, BumpLevel::Minor),
            ("breaking", vec![breaking("feat")], false, BumpLevel::Major),
            (
                "mixed fix and feat",
                vec![commit("fix"), commit("feat"), commit("docs")],
                false,
                BumpLevel::Minor,
            ),
            ("docs only", vec![commit("docs")], false, BumpLevel::None),
            ("docs with unknown bump", vec![commit("docs")], true, BumpLevel::Patch),
            ("unparsed with unknown bump", vec![commit("")], true, BumpLevel::Patch),
            ("unparsed without unknown bump", vec![commit("")], false, BumpLevel::None),
        ];

        for (name, commits, unknown, want) in cases {
            assert_eq!(determine_bump(&commits, unknown), want, "{}", name);
        }
    }

    #[test]
    fn test_breaking_short_circuits_anywhere() {
        let commits = vec![commit("docs"), commit("fix"), breaking("chore"), commit("feat")];
        assert_eq!(determine_bump(&commits, false), BumpLevel::Major);

        let commits = vec![commit("feat"), breaking("")];
        assert_eq!(determine_bump(&commits, false), BumpLevel::Major);
    }

    #[test]
    fn test_non_breaking_order_does_not_matter() {
        let mut commits = vec![commit("docs"), commit("fix"), commit("feat"), commit("style")];
        let forward = determine_bump(&commits, true);
        commits.reverse();
        assert_eq!(determine_bump(&commits, true), forward);
        assert_eq!(forward, BumpLevel::Minor);
    }

    #[test]
    fn test_feat_not_lowered_by_later_fix() {
        let commits = vec![commit("feat"), commit("fix"), commit("perf")];
        assert_eq!(determine_bump(&commits, false), BumpLevel::Minor);
    }
}
