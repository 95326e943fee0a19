use anyhow::{Context, Result};
use clap::Parser;

use reltag::classifier::CommitClassifier;
use reltag::config;
use reltag::git::Git2TagStore;
use reltag::release::{self, ReleaseOptions};
use reltag::ui;

#[derive(clap::Parser)]
#[command(
    name = "reltag",
    about = "Compute and create the next semantic release tag from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        default_value = ".",
        help = "Path to the repository to operate on"
    )]
    repo: String,

    #[arg(long, help = "Compute and report the next version without creating a tag")]
    dry_run: bool,

    #[arg(
        long,
        env = "GITHUB_OUTPUT",
        help = "Append version=<tag> to this file in GitHub Actions step-output format"
    )]
    github_output: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("reltag {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Open the repository
    let store = match Git2TagStore::open(&args.repo) {
        Ok(store) => store,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let classifier = CommitClassifier::new(&config.conventional_commits);
    let options = ReleaseOptions {
        dry_run: args.dry_run,
    };

    let report = match release::next_release(&store, &classifier, &options) {
        Ok(report) => report,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &report.warnings {
        ui::display_boundary_warning(warning);
    }

    ui::display_outcome(&report.outcome);

    // The value channel: the resulting version alone on stdout
    let tag = report.outcome.tag();
    println!("{}", tag);

    if let Some(path) = args.github_output.as_deref() {
        append_github_output(path, tag)
            .with_context(|| format!("Cannot write GitHub output file '{}'", path))?;
    }

    Ok(())
}

/// Append `version=<tag>` to the GitHub Actions step-output file
fn append_github_output(path: &str, tag: &str) -> reltag::Result<()> {
    use std::io::Write;

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    writeln!(file, "version={}", tag)?;
    Ok(())
}
