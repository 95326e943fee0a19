use crate::domain::tag_precedence;
use crate::error::{ReltagError, Result};
use crate::git::TagStore;
use git2::Oid;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory tag store for testing without actual git operations
///
/// Tags live behind a `Mutex` so tags created through the trait are visible
/// to subsequent queries on the same store, which lets tests drive a full
/// release cycle end to end.
pub struct MockTagStore {
    commits: Vec<(Oid, String)>,
    head: Option<Oid>,
    tags: Mutex<HashMap<String, Oid>>,
    annotations: Mutex<HashMap<String, String>>,
}

impl MockTagStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        MockTagStore {
            commits: Vec::new(),
            head: None,
            tags: Mutex::new(HashMap::new()),
            annotations: Mutex::new(HashMap::new()),
        }
    }

    /// Append a commit; the newest commit becomes HEAD
    pub fn add_commit(&mut self, oid: Oid, message: impl Into<String>) {
        self.commits.push((oid, message.into()));
        self.head = Some(oid);
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        if let Ok(mut tags) = self.tags.lock() {
            tags.insert(name.into(), oid);
        }
    }

    /// All tag names currently in the store
    pub fn tag_names(&self) -> Vec<String> {
        self.tags
            .lock()
            .map(|tags| tags.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// The annotation message recorded for a tag created through the trait
    pub fn annotation(&self, name: &str) -> Option<String> {
        self.annotations
            .lock()
            .ok()
            .and_then(|annotations| annotations.get(name).cloned())
    }
}

impl Default for MockTagStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TagStore for MockTagStore {
    fn head_oid(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| ReltagError::tag("Mock store has no commits"))
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        let tags = self
            .tags
            .lock()
            .map_err(|_| ReltagError::tag("Mock tag store lock poisoned"))?;

        let mut names: Vec<String> = tags.keys().cloned().collect();
        names.sort_by(|a, b| tag_precedence(b, a));

        Ok(names.into_iter().next())
    }

    fn tag_oid(&self, name: &str) -> Result<Option<Oid>> {
        let tags = self
            .tags
            .lock()
            .map_err(|_| ReltagError::tag("Mock tag store lock poisoned"))?;

        Ok(tags.get(name).copied())
    }

    fn commit_messages_since(&self, tag: Option<&str>) -> Result<Vec<String>> {
        let stop_oid = match tag {
            Some(name) => self.tag_oid(name)?,
            None => None,
        };

        let start = match stop_oid
            .and_then(|stop| self.commits.iter().position(|(oid, _)| *oid == stop))
        {
            Some(position) => position + 1,
            None => 0,
        };

        Ok(self.commits[start..]
            .iter()
            .map(|(_, message)| message.clone())
            .collect())
    }

    fn create_annotated_tag(&self, name: &str, target: Oid, message: &str) -> Result<()> {
        let mut tags = self
            .tags
            .lock()
            .map_err(|_| ReltagError::tag("Mock tag store lock poisoned"))?;

        if tags.contains_key(name) {
            return Err(ReltagError::tag(format!("Tag '{}' already exists", name)));
        }

        tags.insert(name.to_string(), target);

        let mut annotations = self
            .annotations
            .lock()
            .map_err(|_| ReltagError::tag("Mock tag store lock poisoned"))?;

        annotations.insert(name.to_string(), message.to_string());

        Ok(())
    }
}
