//! Git tag store abstraction layer
//!
//! This module provides a trait-based abstraction over the local git
//! operations reltag needs, allowing for multiple implementations including
//! real Git repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [TagStore] trait, which covers the read
//! and append operations of one release run: resolve the current revision,
//! find the latest release tag, walk the commit messages since it, and
//! create one annotated tag. The concrete implementations include:
//!
//! - [repository::Git2TagStore]: A real implementation using the `git2` crate
//! - [mock::MockTagStore]: An in-memory implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [TagStore] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! # use reltag::git::TagStore;
//! # fn example<S: TagStore>(store: &S) -> Result<(), Box<dyn std::error::Error>> {
//! let head = store.head_oid()?;
//! let messages = store.commit_messages_since(Some("1.2.0"))?;
//! println!("{} commits since 1.2.0 (HEAD: {})", messages.len(), head);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagStore;
pub use repository::Git2TagStore;

use crate::error::Result;
use git2::Oid;

/// Read/append access to a repository's tag history
///
/// This trait abstracts the git operations of one release run to allow for
/// multiple implementations including real Git repositories and mock
/// implementations for testing.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>] which handles Git-specific and
/// application errors uniformly. Implementations should map underlying errors
/// (like `git2::Error`) to the appropriate [crate::error::ReltagError] variants.
///
/// ## Implementations
///
/// - [Git2TagStore](repository::Git2TagStore): Real Git implementation using the `git2` crate
/// - [MockTagStore](mock::MockTagStore): Test implementation backed by in-memory maps
pub trait TagStore: Send + Sync {
    /// Get the OID of the current revision (HEAD)
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the commit HEAD points to
    /// * `Err` - If HEAD is unborn or there's a Git error
    ///
    /// # Example
    /// ```rust
    /// # use reltag::git::TagStore;
    /// # fn example<S: TagStore>(store: &S) -> Result<(), Box<dyn std::error::Error>> {
    /// let oid = store.head_oid()?;
    /// println!("Current revision: {}", oid);
    /// # Ok(())
    /// # }
    /// ```
    fn head_oid(&self) -> Result<Oid>;

    /// Get the latest release tag, if any tags exist
    ///
    /// "Latest" is defined by semantic precedence: tag names that parse as
    /// versions (an optional `v` prefix is accepted) rank above names that
    /// do not and order among themselves by semver precedence. Returns
    /// `None` for a repository with no tags at all.
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The highest-precedence tag name
    /// * `Ok(None)` - If the repository has no tags
    /// * `Err` - If there's a Git error
    ///
    /// # Example
    /// ```rust
    /// # use reltag::git::TagStore;
    /// # fn example<S: TagStore>(store: &S) -> Result<(), Box<dyn std::error::Error>> {
    /// match store.latest_tag()? {
    ///     Some(tag) => println!("Latest release: {}", tag),
    ///     None => println!("Never released"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Find a tag by name and get the OID of the commit it points to
    ///
    /// Handles both lightweight and annotated tags; annotated tag objects
    /// are peeled to their target.
    ///
    /// # Arguments
    /// * `name` - Name of the tag (e.g., "1.2.0", "v1.0.0")
    ///
    /// # Returns
    /// * `Ok(Some(Oid))` - Target object ID of the tag if it exists
    /// * `Ok(None)` - If the tag doesn't exist
    /// * `Err` - If there's a Git error
    ///
    /// # Example
    /// ```rust
    /// # use reltag::git::TagStore;
    /// # fn example<S: TagStore>(store: &S) -> Result<(), Box<dyn std::error::Error>> {
    /// match store.tag_oid("1.2.0")? {
    ///     Some(oid) => println!("Tag 1.2.0 exists at: {}", oid),
    ///     None => println!("Tag 1.2.0 does not exist"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn tag_oid(&self, name: &str) -> Result<Option<Oid>>;

    /// Get the full messages of all commits after a tag, up to HEAD
    ///
    /// Returns messages in chronological order (oldest first). With
    /// `Some(tag)`, the walk runs from HEAD back to the tag's commit
    /// (exclusive); if the tag's commit is not reachable from HEAD the walk
    /// yields everything reachable. With `None`, all commits reachable from
    /// HEAD are returned.
    ///
    /// # Arguments
    /// * `tag` - Tag marking the exclusive lower bound, or `None` for the
    ///   full history
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Commit messages, oldest first; empty when the
    ///   tag points at HEAD
    /// * `Err` - If there's a Git error
    fn commit_messages_since(&self, tag: Option<&str>) -> Result<Vec<String>>;

    /// Create an annotated tag at the given OID
    ///
    /// The created tag is a true annotated tag object carrying a tagger
    /// signature and the given message, never a lightweight ref.
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `target` - Object ID of the commit to tag
    /// * `message` - Annotation message for the tag object
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, the target doesn't exist, or a
    ///   Git error occurs
    fn create_annotated_tag(&self, name: &str, target: Oid, message: &str) -> Result<()>;
}
