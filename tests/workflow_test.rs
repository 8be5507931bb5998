// tests/workflow_test.rs
use semver_action::cli::{run_release_workflow, WorkflowResult};
use semver_action::config::ActionInputs;
use semver_action::domain::BumpLevel;
use semver_action::git::MockRepository;
use semver_action::outputs::MemoryOutputs;
use semver_action::release::RecordingPublisher;
use semver_action::Result;

struct Run {
    result: Result<WorkflowResult>,
    outputs: MemoryOutputs,
    publisher: RecordingPublisher,
}

fn run(inputs: &ActionInputs, repo: &MockRepository) -> Run {
    let mut outputs = MemoryOutputs::new();
    let mut publisher = RecordingPublisher::default();
    let result = run_release_workflow(inputs, repo, &mut publisher, &mut outputs);
    Run {
        result,
        outputs,
        publisher,
    }
}

fn tagged_repo() -> MockRepository {
    let mut repo = MockRepository::new();
    repo.add_commit("0000000000", "chore: initial import");
    repo.add_tag("v1.2.3");
    repo
}

#[test]
fn test_minor_release_from_feature() {
    let mut repo = tagged_repo();
    repo.add_commit("abc1234567", "fix: correct rounding");
    repo.add_commit("def5678901", "feat(api): add search endpoint");

    let run = run(&ActionInputs::default(), &repo);
    let result = run.result.unwrap();

    assert_eq!(result.previous_version.as_deref(), Some("v1.2.3"));
    assert_eq!(result.new_version.as_deref(), Some("v1.3.0"));
    assert_eq!(result.bump, BumpLevel::Minor);
    assert!(!result.skipped);
    assert!(result.tagged);
    assert!(!result.released);

    assert_eq!(repo.created_tags(), vec!["v1.3.0".to_string()]);
    assert_eq!(
        repo.pushed_tags(),
        vec![("origin".to_string(), "v1.3.0".to_string())]
    );

    // newest commit first, as listed by source control
    let expected_changelog = "## What's Changed\n\
                              \n### Features\n\
                              - **api**: add search endpoint (def5678)\n\
                              \n### Bug Fixes\n\
                              - correct rounding (abc1234)\n\
                              \n**Full Changelog**: v1.2.3...v1.3.0\n";
    assert_eq!(result.changelog, expected_changelog);

    assert_eq!(run.outputs.get("previous-version"), Some("v1.2.3"));
    assert_eq!(run.outputs.get("new-version"), Some("v1.3.0"));
    assert_eq!(run.outputs.get("bump-type"), Some("minor"));
    assert_eq!(run.outputs.get("changelog"), Some(expected_changelog));
    assert_eq!(run.outputs.get("skipped"), Some("false"));
}

#[test]
fn test_breaking_footer_forces_major() {
    let mut repo = tagged_repo();
    repo.add_commit("1111111111", "refactor: new config loader\n\nBREAKING-CHANGE: old keys removed");
    repo.add_commit("2222222222", "fix: typo");

    let result = run(&ActionInputs::default(), &repo).result.unwrap();
    assert_eq!(result.bump, BumpLevel::Major);
    assert_eq!(result.new_version.as_deref(), Some("v2.0.0"));
    assert!(result.changelog.contains("### Breaking Changes\n- new config loader (1111111)\n"));
}

#[test]
fn test_initial_release_uses_default_version() {
    let mut repo = MockRepository::new();
    repo.add_commit("abc1234567", "feat: first feature");

    let run = run(&ActionInputs::default(), &repo);
    let result = run.result.unwrap();

    assert_eq!(result.previous_version, None);
    assert_eq!(result.new_version.as_deref(), Some("v0.1.0"));
    assert!(!result.changelog.contains("Full Changelog"));
    assert_eq!(run.outputs.get("previous-version"), Some(""));
}

#[test]
fn test_no_new_commits_skips() {
    let repo = tagged_repo();
    let run = run(&ActionInputs::default(), &repo);
    let result = run.result.unwrap();

    assert!(result.skipped);
    assert_eq!(result.bump, BumpLevel::None);
    assert!(repo.created_tags().is_empty());
    assert_eq!(run.outputs.get("skipped"), Some("true"));
    assert_eq!(run.outputs.get("previous-version"), Some("v1.2.3"));
    assert_eq!(run.outputs.get("changelog"), Some(""));
}

#[test]
fn test_only_non_bumping_commits_skip() {
    let mut repo = tagged_repo();
    repo.add_commit("abc", "docs: update readme");
    repo.add_commit("def", "Merge branch 'main'");

    let result = run(&ActionInputs::default(), &repo).result.unwrap();
    assert!(result.skipped);
    assert!(repo.created_tags().is_empty());
}

#[test]
fn test_bump_patch_on_unknown() {
    let mut repo = tagged_repo();
    repo.add_commit("abc1234567", "Update README");

    let inputs = ActionInputs {
        bump_patch_on_unknown: true,
        ..ActionInputs::default()
    };
    let result = run(&inputs, &repo).result.unwrap();
    assert_eq!(result.new_version.as_deref(), Some("v1.2.4"));
    assert!(result.changelog.contains("### Other Changes\n- Update README (abc1234)\n"));
}

#[test]
fn test_dry_run_does_not_tag_or_release() {
    let mut repo = tagged_repo();
    repo.add_commit("abc", "fix: bug");

    let inputs = ActionInputs {
        dry_run: true,
        create_release: true,
        token: "t".to_string(),
        ..ActionInputs::default()
    };
    let run = run(&inputs, &repo);
    let result = run.result.unwrap();

    assert_eq!(result.new_version.as_deref(), Some("v1.2.4"));
    assert!(!result.tagged);
    assert!(!result.released);
    assert!(repo.created_tags().is_empty());
    assert!(run.publisher.requests.is_empty());
    assert_eq!(run.outputs.get("new-version"), Some("v1.2.4"));
}

#[test]
fn test_release_request_published() {
    let mut repo = tagged_repo();
    repo.add_commit("abc", "perf: faster");

    let inputs = ActionInputs {
        create_release: true,
        release_prerelease: true,
        token: "t".to_string(),
        remote: "upstream".to_string(),
        ..ActionInputs::default()
    };
    let run = run(&inputs, &repo);
    let result = run.result.unwrap();

    assert!(result.released);
    assert_eq!(run.publisher.requests.len(), 1);
    let request = &run.publisher.requests[0];
    assert_eq!(request.tag_name, "v1.2.4");
    assert_eq!(request.name, "v1.2.4");
    assert_eq!(request.body, result.changelog);
    assert!(!request.draft);
    assert!(request.prerelease);
    assert_eq!(
        repo.pushed_tags(),
        vec![("upstream".to_string(), "v1.2.4".to_string())]
    );
}

#[test]
fn test_push_failure_is_an_error_and_writes_no_outputs() {
    let mut repo = tagged_repo();
    repo.add_commit("abc", "fix: bug");
    repo.set_fail_push(true);

    let run = run(&ActionInputs::default(), &repo);
    assert!(run.result.is_err());
    assert!(run.outputs.entries.is_empty());
}

#[test]
fn test_highest_tag_wins_over_latest_added() {
    let mut repo = MockRepository::new();
    repo.add_commit("a", "chore: initial");
    repo.add_tag("v2.0.0");
    repo.add_commit("b", "fix: backport");
    repo.add_tag("v1.9.0");
    repo.add_commit("c", "fix: another");

    let result = run(&ActionInputs::default(), &repo).result.unwrap();
    assert_eq!(result.previous_version.as_deref(), Some("v2.0.0"));
    assert_eq!(result.new_version.as_deref(), Some("v2.0.1"));
}

#[test]
fn test_dash_terminated_tag_prefix_finds_previous_release() {
    let mut repo = MockRepository::new();
    repo.add_commit("0000000000", "chore: initial import");
    repo.add_tag("release-1.4.0");
    repo.add_commit("3333333333", "fix: handle empty input");

    let inputs = ActionInputs {
        tag_prefix: "release-".to_string(),
        ..ActionInputs::default()
    };
    let result = run(&inputs, &repo).result.unwrap();
    assert_eq!(result.previous_version.as_deref(), Some("release-1.4.0"));
    assert_eq!(result.new_version.as_deref(), Some("release-1.4.1"));
    assert_eq!(repo.created_tags(), vec!["release-1.4.1".to_string()]);
}
