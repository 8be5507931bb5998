use anyhow::{Context, Result};
use clap::Parser;

use semver_action::cli::run_release_workflow;
use semver_action::config;
use semver_action::git::Git2Repository;
use semver_action::logging;
use semver_action::outputs::GithubOutputFile;
use semver_action::release::OutputReleasePublisher;
use semver_action::ui;

#[derive(clap::Parser)]
#[command(
    name = "semver-action",
    about = "Tag and release the next semantic version from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview the release without creating tags")]
    dry_run: bool,

    #[arg(long, default_value = ".", help = "Path inside the repository to release")]
    repo: String,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn run(args: Args) -> Result<()> {
    let mut inputs = config::load_inputs(args.config.as_deref())?;
    if args.dry_run {
        inputs.dry_run = true;
    }

    let repo = Git2Repository::open(&args.repo)
        .with_context(|| format!("opening git repository at '{}'", args.repo))?;
    let mut publisher = OutputReleasePublisher::new(GithubOutputFile::from_env());
    let mut outputs = GithubOutputFile::from_env();

    let result = run_release_workflow(&inputs, &repo, &mut publisher, &mut outputs)?;

    match &result.new_version {
        Some(tag) if !result.skipped => {
            ui::display_success(&format!("New version: {} ({} bump)", tag, result.bump))
        }
        _ => ui::display_status("No release created"),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("semver-action {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    logging::init();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
