//! Main release workflow orchestration logic
//!
//! Ties the pure domain pieces to the repository, release and output
//! collaborators. Nothing in here parses or decides anything itself; it only
//! sequences the calls and reports progress.

use crate::boundary::BoundaryWarning;
use crate::changelog;
use crate::config::ActionInputs;
use crate::domain::{determine_bump, latest_version, parse_commits, BumpLevel, Version};
use crate::error::{ReleaseError, Result};
use crate::git::SourceControl;
use crate::outputs::OutputSink;
use crate::release::{ReleasePublisher, ReleaseRequest};
use crate::ui;

/// Result of one workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Latest version tag before this run, if any
    pub previous_version: Option<String>,

    /// Tag chosen for this release; `None` when skipped
    pub new_version: Option<String>,

    pub bump: BumpLevel,

    /// Rendered release notes; empty when skipped
    pub changelog: String,

    /// True when no release was warranted
    pub skipped: bool,

    /// Whether a tag was created and pushed
    pub tagged: bool,

    /// Whether a release request was published
    pub released: bool,
}

impl WorkflowResult {
    fn skipped(previous_version: Option<String>) -> Self {
        WorkflowResult {
            previous_version,
            new_version: None,
            bump: BumpLevel::None,
            changelog: String::new(),
            skipped: true,
            tagged: false,
            released: false,
        }
    }

    /// Write the standard output set for this result
    pub fn write_outputs<O: OutputSink + ?Sized>(&self, outputs: &mut O) -> Result<()> {
        let pairs = [
            (
                "previous-version",
                self.previous_version.as_deref().unwrap_or_default(),
            ),
            ("new-version", self.new_version.as_deref().unwrap_or_default()),
            ("bump-type", self.bump.as_str()),
            ("changelog", self.changelog.as_str()),
            ("skipped", if self.skipped { "true" } else { "false" }),
        ];
        for (name, value) in pairs {
            outputs.set_output(name, value).map_err(|e| {
                ReleaseError::output(format!("setting output {}: {}", name, e))
            })?;
        }
        Ok(())
    }
}

/// Find the latest version tag, reporting prefixed tags that fail to parse
fn find_previous_version<S: SourceControl + ?Sized>(
    scm: &S,
    prefix: &str,
) -> Result<Option<(String, Version)>> {
    let tags = scm.list_tags()?;

    let unparsable: Vec<String> = tags
        .iter()
        .filter(|tag| tag.starts_with(prefix) && Version::parse(tag).is_err())
        .cloned()
        .collect();
    if !unparsable.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::UnparsableTags {
            tags: unparsable,
            prefix: prefix.to_string(),
        });
    }

    Ok(latest_version(tags.iter().map(String::as_str), prefix))
}

/// Run the release workflow
///
/// 1. Validate inputs and refuse shallow clones
/// 2. Find the latest version tag and list commits since it
/// 3. Parse commits and determine the bump
/// 4. Compute the new version and render the changelog
/// 5. Unless dry-running: create and push the tag, then publish the release
/// 6. Write outputs
///
/// # Returns
///
/// The decision taken; skipped runs still write outputs.
pub fn run_release_workflow<S, P, O>(
    inputs: &ActionInputs,
    scm: &S,
    publisher: &mut P,
    outputs: &mut O,
) -> Result<WorkflowResult>
where
    S: SourceControl + ?Sized,
    P: ReleasePublisher + ?Sized,
    O: OutputSink + ?Sized,
{
    inputs.validate()?;

    if scm.is_shallow()? {
        return Err(ReleaseError::config(
            "shallow clone detected; fetch the full history (e.g. 'fetch-depth: 0') before running",
        ));
    }

    let previous = find_previous_version(scm, &inputs.tag_prefix)?;
    let previous_tag = previous.as_ref().map(|(tag, _)| tag.clone());
    match &previous_tag {
        Some(tag) => ui::display_status(&format!("Latest version tag: {}", tag)),
        None => ui::display_status(&format!(
            "No existing version tags found. Will use default version: {}",
            inputs.default_version
        )),
    }

    let raw_commits = scm.commits_since(previous_tag.as_deref())?;
    if raw_commits.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::NoNewCommits {
            latest_tag: previous_tag.clone(),
        });
        let result = WorkflowResult::skipped(previous_tag);
        result.write_outputs(outputs)?;
        return Ok(result);
    }

    let commits = parse_commits(&raw_commits);
    ui::display_commit_analysis(&commits);

    let bump = determine_bump(&commits, inputs.bump_patch_on_unknown);
    tracing::info!(%bump, commits = commits.len(), "determined bump");
    if bump == BumpLevel::None {
        ui::display_boundary_warning(&BoundaryWarning::NoBumpingCommits {
            commit_count: commits.len(),
        });
        let result = WorkflowResult::skipped(previous_tag);
        result.write_outputs(outputs)?;
        return Ok(result);
    }

    let new_version = match &previous {
        Some((_, current)) => current.bump(bump),
        None => Version::parse(&inputs.default_version)?,
    };
    let new_tag = new_version.to_string();
    let changelog = changelog::generate(
        &commits,
        previous_tag.as_deref().unwrap_or_default(),
        &new_tag,
    );
    ui::display_release_plan(previous_tag.as_deref(), &new_tag, bump);

    let mut result = WorkflowResult {
        previous_version: previous_tag,
        new_version: Some(new_tag.clone()),
        bump,
        changelog,
        skipped: false,
        tagged: false,
        released: false,
    };

    if inputs.dry_run {
        ui::display_status("Dry run: no tag or release created");
    } else {
        ui::display_status(&format!("Creating tag {}", new_tag));
        scm.create_tag(&new_tag)?;

        ui::display_status(&format!("Pushing tag {} to {}", new_tag, inputs.remote));
        scm.push_tag(&inputs.remote, &new_tag)?;
        result.tagged = true;
        ui::display_success(&format!("Pushed tag {}", new_tag));

        if inputs.create_release {
            let request = ReleaseRequest {
                tag_name: new_tag.clone(),
                name: new_tag.clone(),
                body: result.changelog.clone(),
                draft: inputs.release_draft,
                prerelease: inputs.release_prerelease,
            };
            publisher.publish(&request)?;
            result.released = true;
            ui::display_success(&format!("Release prepared for {}", new_tag));
        }
    }

    result.write_outputs(outputs)?;
    Ok(result)
}
