use crate::domain::tag_precedence;
use crate::error::{ReltagError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2TagStore {
    repo: Git2Repo,
}

impl Git2TagStore {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2TagStore { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2TagStore { repo }
    }

    /// Resolve a tag ref to the OID it points to, peeling annotated tags
    fn resolve_tag(&self, name: &str) -> Result<Option<Oid>> {
        let reference_name = format!("refs/tags/{}", name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => {
                let oid = reference
                    .peel(git2::ObjectType::Any)
                    .map_err(|e| ReltagError::tag(format!("Cannot peel tag '{}': {}", name, e)))?
                    .id();

                Ok(Some(oid))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(ReltagError::tag(format!(
                "Cannot find tag '{}': {}",
                name, e
            ))),
        }
    }
}

impl super::TagStore for Git2TagStore {
    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;

        head.target()
            .ok_or_else(|| ReltagError::tag("HEAD does not point to a commit"))
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        let tags = self.repo.tag_names(None)?;

        let mut names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| tag_precedence(b, a));

        Ok(names.into_iter().next())
    }

    fn tag_oid(&self, name: &str) -> Result<Option<Oid>> {
        self.resolve_tag(name)
    }

    fn commit_messages_since(&self, tag: Option<&str>) -> Result<Vec<String>> {
        let stop_oid = match tag {
            Some(name) => self.resolve_tag(name)?,
            None => None,
        };

        let mut revwalk = self.repo.revwalk()?;

        revwalk.push_head()?;

        let mut messages = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;

            if Some(oid) == stop_oid {
                break;
            }

            let commit = self.repo.find_commit(oid)?;

            messages.push(commit.message().unwrap_or("(empty message)").to_string());
        }

        messages.reverse();
        Ok(messages)
    }

    fn create_annotated_tag(&self, name: &str, target: Oid, message: &str) -> Result<()> {
        let object = self
            .repo
            .find_object(target, None)
            .map_err(|e| ReltagError::tag(format!("Cannot find object {}: {}", target, e)))?;

        let tagger = self.repo.signature()?;

        self.repo
            .tag(name, &object, &tagger, message, false)
            .map_err(|e| ReltagError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }
}

// SAFETY: the trait requires Sync, but the binary never shares the store
// across threads; all uses are single-threaded read/append calls.
unsafe impl Sync for Git2TagStore {}
