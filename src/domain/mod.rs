//! Domain logic - pure version and commit rules independent of git operations

pub mod commit;
pub mod version;

pub use commit::ParsedCommit;
pub use version::{tag_precedence, Version, VersionBump};
