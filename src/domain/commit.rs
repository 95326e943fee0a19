use regex::Regex;

/// Parsed representation of a conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub r#type: String,
    pub scope: Option<String>,
    pub description: String,
    pub is_breaking_change: bool,
}

impl ParsedCommit {
    /// Parse a commit message according to conventional commits spec
    ///
    /// The subject line is matched against `type[(scope)][!]: description`
    /// with a lowercase type. A `!` before the colon marks a breaking
    /// change, as does any of `breaking_indicators` appearing anywhere in
    /// the message body. Non-conventional messages degrade to type
    /// `chore` instead of failing.
    pub fn parse(message: &str, breaking_indicators: &[String]) -> Self {
        let subject = message.lines().next().unwrap_or("");

        // Indicators apply to the whole message whether or not the subject
        // follows the convention
        let has_indicator = breaking_indicators
            .iter()
            .any(|indicator| message.contains(indicator.as_str()));

        if let Some(captures) = Regex::new(r"^([a-z]+)(?:\(([^)]+)\))?(!)?:\s*(.*)")
            .ok()
            .and_then(|re| re.captures(subject))
        {
            let r#type = captures
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let scope = captures.get(2).map(|m| m.as_str().to_string());
            let has_exclamation = captures.get(3).is_some();
            let description = captures
                .get(4)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            return ParsedCommit {
                r#type,
                scope,
                description,
                is_breaking_change: has_exclamation || has_indicator,
            };
        }

        // Non-conventional commit
        ParsedCommit {
            r#type: "chore".to_string(),
            scope: None,
            description: subject.to_string(),
            is_breaking_change: has_indicator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_indicators() -> Vec<String> {
        vec!["BREAKING CHANGE:".to_string()]
    }

    #[test]
    fn test_parse_with_scope() {
        let commit = ParsedCommit::parse("feat(auth): add login", &default_indicators());
        assert_eq!(commit.r#type, "feat");
        assert_eq!(commit.scope, Some("auth".to_string()));
        assert_eq!(commit.description, "add login");
        assert!(!commit.is_breaking_change);
    }

    #[test]
    fn test_parse_without_scope() {
        let commit = ParsedCommit::parse("fix: handle empty input", &default_indicators());
        assert_eq!(commit.r#type, "fix");
        assert_eq!(commit.scope, None);
        assert_eq!(commit.description, "handle empty input");
        assert!(!commit.is_breaking_change);
    }

    #[test]
    fn test_parse_with_breaking_marker() {
        let commit = ParsedCommit::parse("feat(auth)!: redesign login", &default_indicators());
        assert_eq!(commit.r#type, "feat");
        assert_eq!(commit.scope, Some("auth".to_string()));
        assert!(commit.is_breaking_change);
    }

    #[test]
    fn test_parse_breaking_without_scope() {
        let commit = ParsedCommit::parse("refactor!: drop v1 endpoints", &default_indicators());
        assert_eq!(commit.r#type, "refactor");
        assert_eq!(commit.scope, None);
        assert!(commit.is_breaking_change);
    }

    #[test]
    fn test_parse_breaking_change_footer() {
        let commit = ParsedCommit::parse(
            "fix: tighten validation\n\nBREAKING CHANGE: rejects empty names",
            &default_indicators(),
        );
        assert_eq!(commit.r#type, "fix");
        assert!(commit.is_breaking_change);
    }

    #[test]
    fn test_parse_custom_indicator() {
        let indicators = vec!["BREAKING-CHANGE:".to_string()];
        let commit = ParsedCommit::parse(
            "fix: tighten validation\n\nBREAKING-CHANGE: rejects empty names",
            &indicators,
        );
        assert!(commit.is_breaking_change);
    }

    #[test]
    fn test_parse_indicator_not_configured() {
        let indicators = vec!["BREAKING-CHANGE:".to_string()];
        let commit = ParsedCommit::parse(
            "fix: tighten validation\n\nBREAKING CHANGE: rejects empty names",
            &indicators,
        );
        assert!(!commit.is_breaking_change);
    }

    #[test]
    fn test_parse_breaking_footer_on_non_conventional_subject() {
        let commit = ParsedCommit::parse(
            "Rework public interface\n\nBREAKING CHANGE: removed the v1 endpoints",
            &default_indicators(),
        );
        assert_eq!(commit.r#type, "chore");
        assert!(commit.is_breaking_change);
    }

    #[test]
    fn test_parse_non_conventional() {
        let commit = ParsedCommit::parse("Random commit message", &default_indicators());
        assert_eq!(commit.r#type, "chore");
        assert_eq!(commit.description, "Random commit message");
        assert!(!commit.is_breaking_change);
    }

    #[test]
    fn test_parse_uppercase_type_is_not_conventional() {
        let commit = ParsedCommit::parse("Fix: something", &default_indicators());
        assert_eq!(commit.r#type, "chore");
    }

    #[test]
    fn test_parse_uses_subject_line_only() {
        let commit = ParsedCommit::parse(
            "feat: add export\n\nLonger explanation of the export flow.",
            &default_indicators(),
        );
        assert_eq!(commit.description, "add export");
    }

    #[test]
    fn test_parse_empty_message() {
        let commit = ParsedCommit::parse("", &default_indicators());
        assert_eq!(commit.r#type, "chore");
        assert_eq!(commit.description, "");
    }
}
