//! The release engine: one classify-compute-check-act cycle per invocation.

use crate::boundary::BoundaryWarning;
use crate::classifier::CommitClassifier;
use crate::domain::{Version, VersionBump};
use crate::error::{ReltagError, Result};
use crate::git::TagStore;

/// Options controlling a release run
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseOptions {
    /// Compute and report without creating the tag
    pub dry_run: bool,
}

/// What a release run did (or would do)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Nothing to release; the latest tag is still current
    NoNewCommits { tag: String },
    /// The computed tag already exists at the current revision
    AlreadyTagged { tag: String },
    /// A new annotated tag was created
    Tagged {
        previous: Option<String>,
        tag: String,
        bump: VersionBump,
    },
    /// Dry run: the tag that would have been created
    DryRun {
        previous: Option<String>,
        tag: String,
        bump: VersionBump,
    },
}

impl ReleaseOutcome {
    /// The version tag this run resolved to
    pub fn tag(&self) -> &str {
        match self {
            ReleaseOutcome::NoNewCommits { tag } => tag,
            ReleaseOutcome::AlreadyTagged { tag } => tag,
            ReleaseOutcome::Tagged { tag, .. } => tag,
            ReleaseOutcome::DryRun { tag, .. } => tag,
        }
    }
}

/// Result of one release run: the outcome plus any non-fatal warnings
/// collected along the way
#[derive(Debug)]
pub struct ReleaseReport {
    pub outcome: ReleaseOutcome,
    pub warnings: Vec<BoundaryWarning>,
}

/// Run one release cycle against a tag store.
///
/// Reads the latest tag and the commits since it, classifies the batch into
/// a version bump, computes the next version, and creates an annotated tag
/// at HEAD unless the run resolves to a no-op. All checks happen before the
/// single mutation at the end, so a failed run never leaves partial state.
pub fn next_release<S: TagStore>(
    store: &S,
    classifier: &CommitClassifier,
    options: &ReleaseOptions,
) -> Result<ReleaseReport> {
    let mut warnings = Vec::new();

    let latest_tag = store.latest_tag()?;
    let messages = store.commit_messages_since(latest_tag.as_deref())?;

    if messages.is_empty() {
        return match latest_tag {
            Some(tag) => {
                warnings.push(BoundaryWarning::NoNewCommits {
                    latest_tag: tag.clone(),
                    current_commit_hash: store.head_oid()?.to_string(),
                });
                Ok(ReleaseReport {
                    outcome: ReleaseOutcome::NoNewCommits { tag },
                    warnings,
                })
            }
            None => Err(ReltagError::tag("Repository has no commits to release")),
        };
    }

    let current = match latest_tag.as_deref() {
        Some(tag) => match Version::parse(tag) {
            Ok(version) => version,
            Err(_) => {
                warnings.push(BoundaryWarning::UnparsableTag {
                    tag: tag.to_string(),
                    reason: "Version number format not recognized".to_string(),
                });
                Version::new(0, 1, 0)
            }
        },
        None => Version::new(0, 0, 0),
    };

    let bump = classifier.classify(&messages);

    // A never-released repository starts at 0.1.0 whatever the batch holds
    let next = if current.is_zero() {
        Version::new(0, 1, 0)
    } else {
        current.bump(&bump)
    };
    let tag_name = next.to_string();

    let head = store.head_oid()?;

    if let Some(existing) = store.tag_oid(&tag_name)? {
        if existing == head {
            return Ok(ReleaseReport {
                outcome: ReleaseOutcome::AlreadyTagged { tag: tag_name },
                warnings,
            });
        }
        return Err(ReltagError::TagCollision {
            tag: tag_name,
            expected: head.to_string(),
            actual: existing.to_string(),
        });
    }

    if options.dry_run {
        return Ok(ReleaseReport {
            outcome: ReleaseOutcome::DryRun {
                previous: latest_tag,
                tag: tag_name,
                bump,
            },
            warnings,
        });
    }

    let message = annotation_message(&bump, &tag_name, &messages);
    store.create_annotated_tag(&tag_name, head, &message)?;

    Ok(ReleaseReport {
        outcome: ReleaseOutcome::Tagged {
            previous: latest_tag,
            tag: tag_name,
            bump,
        },
        warnings,
    })
}

/// Annotation for the created tag: the increment type and version on the
/// first line, then the subject lines of the released commits, oldest first
fn annotation_message(bump: &VersionBump, version: &str, messages: &[String]) -> String {
    let mut message = format!("{} release {}", bump, version);

    let subjects: Vec<&str> = messages
        .iter()
        .filter_map(|full| full.lines().next())
        .collect();

    if !subjects.is_empty() {
        message.push_str("\n\n");
        for subject in &subjects {
            message.push_str(&format!("- {}\n", subject));
        }
    }

    message
}
