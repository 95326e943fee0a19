use crate::config::ConventionalCommitsConfig;
use crate::domain::{ParsedCommit, VersionBump};

type CommitPredicate = Box<dyn Fn(&ParsedCommit) -> bool + Send + Sync>;

/// One classification rule: fires when any commit in the batch matches
struct BumpRule {
    decision: VersionBump,
    matches: CommitPredicate,
}

/// Determines the version bump type for a batch of commit messages
///
/// Rules are an explicit priority-ordered list evaluated until the first
/// one matches; a rule matches when any commit in the batch satisfies its
/// predicate, so the order of commits within the batch never changes the
/// outcome. When no rule matches the batch the result is a patch bump.
pub struct CommitClassifier {
    rules: Vec<BumpRule>,
    breaking_indicators: Vec<String>,
}

impl CommitClassifier {
    /// Create a classifier from the conventional commits configuration
    pub fn new(config: &ConventionalCommitsConfig) -> Self {
        let minor_types = config.minor_types.clone();

        let rules = vec![
            BumpRule {
                decision: VersionBump::Major,
                matches: Box::new(|commit| commit.is_breaking_change),
            },
            BumpRule {
                decision: VersionBump::Minor,
                matches: Box::new(move |commit| minor_types.iter().any(|t| t == &commit.r#type)),
            },
        ];

        CommitClassifier {
            rules,
            breaking_indicators: config.breaking_indicators.clone(),
        }
    }

    /// Classify a batch of raw commit messages into a version bump
    pub fn classify(&self, messages: &[String]) -> VersionBump {
        let commits: Vec<ParsedCommit> = messages
            .iter()
            .map(|message| ParsedCommit::parse(message, &self.breaking_indicators))
            .collect();

        for rule in &self.rules {
            if commits.iter().any(|commit| (rule.matches)(commit)) {
                return rule.decision;
            }
        }

        VersionBump::Patch
    }
}
