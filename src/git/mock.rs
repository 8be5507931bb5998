use crate::error::{ReleaseError, Result};
use crate::git::{RawCommit, SourceControl};
use std::cell::RefCell;

/// In-memory repository for testing without actual git operations.
///
/// History is linear; `commits` are stored oldest first and a tag records the
/// number of commits that existed when it was added.
#[derive(Debug, Default)]
pub struct MockRepository {
    commits: Vec<RawCommit>,
    tags: Vec<(String, usize)>,
    shallow: bool,
    created_tags: RefCell<Vec<String>>,
    pushed_tags: RefCell<Vec<(String, String)>>,
    fail_push: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit on top of the current history
    pub fn add_commit(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.commits.push(RawCommit::new(id, message));
    }

    /// Tag the current tip of history
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push((name.into(), self.commits.len()));
    }

    pub fn set_shallow(&mut self, shallow: bool) {
        self.shallow = shallow;
    }

    /// Make every subsequent push fail with a remote error
    pub fn set_fail_push(&mut self, fail: bool) {
        self.fail_push = fail;
    }

    /// Tags created through [SourceControl::create_tag], in call order
    pub fn created_tags(&self) -> Vec<String> {
        self.created_tags.borrow().clone()
    }

    /// `(remote, tag)` pairs pushed through [SourceControl::push_tag]
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed_tags.borrow().clone()
    }
}

impl SourceControl for MockRepository {
    fn is_shallow(&self) -> Result<bool> {
        Ok(self.shallow)
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self.tags.iter().map(|(name, _)| name.clone()).collect();
        tags.extend(self.created_tags.borrow().iter().cloned());
        Ok(tags)
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<RawCommit>> {
        let start = match tag {
            None => 0,
            Some(name) => self
                .tags
                .iter()
                .find(|(tag_name, _)| tag_name == name)
                .map(|(_, position)| *position)
                .ok_or_else(|| ReleaseError::tag(format!("Tag not found: {}", name)))?,
        };
        Ok(self.commits[start..].iter().rev().cloned().collect())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let exists = self.tags.iter().any(|(tag, _)| tag == name)
            || self.created_tags.borrow().iter().any(|tag| tag == name);
        if exists {
            return Err(ReleaseError::tag(format!("Tag already exists: {}", name)));
        }
        self.created_tags.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if self.fail_push {
            return Err(ReleaseError::remote(format!("Push to {} rejected", remote)));
        }
        self.pushed_tags
            .borrow_mut()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
