use thiserror::Error;

/// Unified error type for reltag operations
#[derive(Error, Debug)]
pub enum ReltagError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag '{tag}' already exists at {actual}, but the current revision is {expected}")]
    TagCollision {
        tag: String,
        expected: String,
        actual: String,
    },

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in reltag
pub type Result<T> = std::result::Result<T, ReltagError>;

impl ReltagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReltagError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReltagError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReltagError::Tag(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReltagError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReltagError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ReltagError::version("test").to_string().contains("Version"));
        assert!(ReltagError::tag("test").to_string().contains("Tag"));
    }

    #[test]
    fn test_collision_names_both_revisions() {
        let err = ReltagError::TagCollision {
            tag: "1.4.0".to_string(),
            expected: "aaaa111".to_string(),
            actual: "bbbb222".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1.4.0"));
        assert!(msg.contains("aaaa111"));
        assert!(msg.contains("bbbb222"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReltagError::config("x"), "Configuration error"),
            (ReltagError::version("x"), "Version parsing error"),
            (ReltagError::tag("x"), "Tag error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
