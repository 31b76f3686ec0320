use std::path::{Path, PathBuf};

use crate::config::Config;

/// Explicit location of the repository a workflow run operates on.
///
/// Passed into every operation instead of relying on the process working
/// directory, so workflows can run against any checkout and tests can point
/// at temporary repositories.
#[derive(Debug, Clone)]
pub struct RepositoryContext {
    root: PathBuf,
}

impl RepositoryContext {
    /// Create a context rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        RepositoryContext { root: root.into() }
    }

    /// Repository root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the changelog file
    pub fn changelog_path(&self, config: &Config) -> PathBuf {
        self.root.join(&config.changelog)
    }

    /// Repository-relative changelog path, as staged in version control
    pub fn changelog_rel_path<'a>(&self, config: &'a Config) -> &'a Path {
        Path::new(&config.changelog)
    }

    /// Absolute path of the manifest package directory
    pub fn manifest_dir(&self, config: &Config) -> PathBuf {
        self.root.join(&config.manifest.dir)
    }
}
