//! Recording fakes for the gateway traits.
//!
//! The workflow is single-threaded and synchronous, so the mocks use interior
//! mutability (`RefCell`) to record every side effect through `&self` methods.
//! Tests assert on the recorded sequences to verify ordering and the
//! no-side-effects-before-first-mutation guarantee.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{UpdateKind, Version};
use crate::error::Result;
use crate::gateway::{ManifestRegistry, ModuleProxy, VersionControl};

/// Mock version control recording all mutations
pub struct MockVersionControl {
    tags: RefCell<Vec<String>>,
    status_output: RefCell<String>,
    staged: RefCell<Vec<PathBuf>>,
    commits: RefCell<Vec<String>>,
    created_tags: RefCell<Vec<String>>,
    pushed_remotes: RefCell<Vec<String>>,
}

impl MockVersionControl {
    /// Create a clean repository with no tags
    pub fn new() -> Self {
        MockVersionControl {
            tags: RefCell::new(Vec::new()),
            status_output: RefCell::new(String::new()),
            staged: RefCell::new(Vec::new()),
            commits: RefCell::new(Vec::new()),
            created_tags: RefCell::new(Vec::new()),
            pushed_remotes: RefCell::new(Vec::new()),
        }
    }

    /// Seed an existing tag; listing order follows insertion order
    pub fn add_existing_tag(&self, name: impl Into<String>) {
        self.tags.borrow_mut().push(name.into());
    }

    /// Make the repository report dirty with the given status output
    pub fn set_status(&self, output: impl Into<String>) {
        *self.status_output.borrow_mut() = output.into();
    }

    /// Messages of commits created, in order
    pub fn commits(&self) -> Vec<String> {
        self.commits.borrow().clone()
    }

    /// Paths staged, in order
    pub fn staged_paths(&self) -> Vec<PathBuf> {
        self.staged.borrow().clone()
    }

    /// Tags created during the run, in order
    pub fn created_tags(&self) -> Vec<String> {
        self.created_tags.borrow().clone()
    }

    /// Remotes that received a tag push, in order
    pub fn pushed_remotes(&self) -> Vec<String> {
        self.pushed_remotes.borrow().clone()
    }
}

impl Default for MockVersionControl {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for MockVersionControl {
    fn list_tags(&self, prefix: &str) -> Result<Vec<String>> {
        // Insertion order is preserved so tests can model any sort order,
        // including a malformed first entry.
        Ok(self
            .tags
            .borrow()
            .iter()
            .filter(|t| t.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn status(&self) -> Result<String> {
        Ok(self.status_output.borrow().clone())
    }

    fn add(&self, path: &Path) -> Result<()> {
        self.staged.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.commits.borrow_mut().push(message.to_string());
        Ok(())
    }

    fn has_tag(&self, name: &str) -> Result<bool> {
        Ok(self.tags.borrow().iter().any(|t| t == name))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.tags.borrow_mut().push(name.to_string());
        self.created_tags.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        self.pushed_remotes.borrow_mut().push(remote.to_string());
        Ok(())
    }
}

/// Mock manifest registry with real version-bump arithmetic
pub struct MockManifestRegistry {
    version: RefCell<Version>,
    bumps: RefCell<Vec<UpdateKind>>,
    publishes: RefCell<usize>,
}

impl MockManifestRegistry {
    /// Create a registry whose manifest currently declares the given version
    pub fn new(version: Version) -> Self {
        MockManifestRegistry {
            version: RefCell::new(version),
            bumps: RefCell::new(Vec::new()),
            publishes: RefCell::new(0),
        }
    }

    /// Bumps applied, in order
    pub fn bumps(&self) -> Vec<UpdateKind> {
        self.bumps.borrow().clone()
    }

    /// Number of publish invocations
    pub fn publish_count(&self) -> usize {
        *self.publishes.borrow()
    }
}

impl ManifestRegistry for MockManifestRegistry {
    fn bump_version(&self, kind: UpdateKind) -> Result<()> {
        let next = self.version.borrow().bump(kind);
        *self.version.borrow_mut() = next;
        self.bumps.borrow_mut().push(kind);
        Ok(())
    }

    fn read_version(&self) -> Result<String> {
        Ok(self.version.borrow().to_string())
    }

    fn publish(&self) -> Result<()> {
        *self.publishes.borrow_mut() += 1;
        Ok(())
    }
}

/// Mock module proxy recording resolved versions
pub struct MockModuleProxy {
    resolved: RefCell<Vec<Version>>,
}

impl MockModuleProxy {
    pub fn new() -> Self {
        MockModuleProxy {
            resolved: RefCell::new(Vec::new()),
        }
    }

    /// Versions resolved through the proxy, in order
    pub fn resolved(&self) -> Vec<Version> {
        self.resolved.borrow().clone()
    }
}

impl Default for MockModuleProxy {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleProxy for MockModuleProxy {
    fn resolve(&self, version: &Version) -> Result<()> {
        self.resolved.borrow_mut().push(*version);
        Ok(())
    }
}
