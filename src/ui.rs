//! Terminal reporting for the release run.
//!
//! Everything here writes to stderr: stdout is reserved for the computed
//! version value so that CI pipelines can capture it directly.

use crate::boundary::BoundaryWarning;
use crate::release::ReleaseOutcome;
use console::style;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print a boundary warning with yellow warning icon.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One-line human description of a release outcome.
pub fn outcome_summary(outcome: &ReleaseOutcome) -> String {
    match outcome {
        ReleaseOutcome::NoNewCommits { tag } => {
            format!("Nothing to release; latest tag {} is current", tag)
        }
        ReleaseOutcome::AlreadyTagged { tag } => {
            format!(
                "Tag {} already exists at the current revision; nothing to do",
                tag
            )
        }
        ReleaseOutcome::Tagged {
            previous: Some(previous),
            tag,
            bump,
        } => {
            format!(
                "Created {} release tag {} (previous: {})",
                bump, tag, previous
            )
        }
        ReleaseOutcome::Tagged {
            previous: None,
            tag,
            bump,
        } => {
            format!("Created {} release tag {} (first release)", bump, tag)
        }
        ReleaseOutcome::DryRun {
            previous: Some(previous),
            tag,
            bump,
        } => {
            format!(
                "Dry run: would create {} release tag {} (previous: {})",
                bump, tag, previous
            )
        }
        ReleaseOutcome::DryRun {
            previous: None,
            tag,
            bump,
        } => {
            format!(
                "Dry run: would create {} release tag {} (first release)",
                bump, tag
            )
        }
    }
}

/// Report a release outcome on stderr, styled by what happened.
pub fn display_outcome(outcome: &ReleaseOutcome) {
    match outcome {
        ReleaseOutcome::Tagged { .. } => display_success(&outcome_summary(outcome)),
        _ => display_status(&outcome_summary(outcome)),
    }
}
