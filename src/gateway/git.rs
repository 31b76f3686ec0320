use std::cmp::Ordering;
use std::path::Path;

use git2::{Repository, Status, StatusOptions};

use crate::domain::TagPattern;
use crate::error::Result;
use crate::gateway::VersionControl;

/// Version-control gateway backed by the `git2` crate
pub struct GitGateway {
    repo: Repository,
}

impl std::fmt::Debug for GitGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitGateway")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl GitGateway {
    /// Open or discover a git repository at or above the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitGateway { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        GitGateway { repo }
    }

    /// Two-letter porcelain-style code for a file status
    fn status_code(status: Status) -> &'static str {
        if status.contains(Status::WT_NEW) {
            "??"
        } else if status.contains(Status::INDEX_NEW) {
            "A "
        } else if status.contains(Status::INDEX_MODIFIED) {
            "M "
        } else if status.contains(Status::WT_MODIFIED) {
            " M"
        } else if status.contains(Status::INDEX_DELETED) {
            "D "
        } else if status.contains(Status::WT_DELETED) {
            " D"
        } else if status.contains(Status::INDEX_RENAMED) || status.contains(Status::WT_RENAMED) {
            "R "
        } else if status.contains(Status::INDEX_TYPECHANGE) || status.contains(Status::WT_TYPECHANGE)
        {
            "T "
        } else {
            "??"
        }
    }

    /// SSH credential callback shared by remote operations
    ///
    /// Tries keys from ~/.ssh in order of preference, then the SSH agent,
    /// then default credentials.
    fn credentials_callback(
        _url: &str,
        username_from_url: Option<&str>,
        allowed_types: git2::CredentialType,
    ) -> std::result::Result<git2::Cred, git2::Error> {
        if allowed_types.contains(git2::CredentialType::SSH_KEY) {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            let key_paths = vec![
                format!("{}/.ssh/id_ed25519", home),
                format!("{}/.ssh/id_rsa", home),
                format!("{}/.ssh/id_ecdsa", home),
            ];

            for key_path in key_paths {
                let path = std::path::Path::new(&key_path);
                if path.exists() {
                    if let Ok(cred) =
                        git2::Cred::ssh_key(username_from_url.unwrap_or("git"), None, path, None)
                    {
                        return Ok(cred);
                    }
                }
            }

            if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git")) {
                return Ok(cred);
            }
        }

        git2::Cred::default()
    }
}

impl VersionControl for GitGateway {
    fn list_tags(&self, prefix: &str) -> Result<Vec<String>> {
        let glob = format!("{}*", prefix);
        let names = self.repo.tag_names(Some(&glob))?;
        let mut tags: Vec<String> = names.iter().flatten().map(|s| s.to_string()).collect();

        // Newest first, matching `git tag --sort=-v:refname`: semantic order
        // for well-formed release tags, lexicographic for the rest.
        let pattern = TagPattern::new(prefix)?;
        tags.sort_by(|a, b| match (pattern.parse(a).ok(), pattern.parse(b).ok()) {
            (Some(va), Some(vb)) => vb.cmp(&va),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b.cmp(a),
        });

        Ok(tags)
    }

    fn status(&self) -> Result<String> {
        let mut options = StatusOptions::new();
        options.include_untracked(true).include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;
        let mut lines = Vec::new();

        for entry in statuses.iter() {
            let path = entry.path().unwrap_or("(invalid utf-8 path)");
            lines.push(format!("{} {}", Self::status_code(entry.status()), path));
        }

        Ok(lines.join("\n"))
    }

    fn add(&self, path: &Path) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_path(path)?;
        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let signature = self.repo.signature()?;
        let head = self.repo.head()?.peel_to_commit()?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&head],
        )?;

        Ok(())
    }

    fn has_tag(&self, name: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", name);
        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo.tag_lightweight(name, head.as_object(), false)?;
        Ok(())
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote)?;

        let tags = self.repo.tag_names(None)?;
        let refspecs: Vec<String> = tags
            .iter()
            .flatten()
            .map(|tag| format!("refs/tags/{}:refs/tags/{}", tag, tag))
            .collect();

        if refspecs.is_empty() {
            return Ok(());
        }

        let refspec_strs: Vec<&str> = refspecs.iter().map(|s| s.as_str()).collect();

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(Self::credentials_callback);
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                Err(git2::Error::from_str(&format!(
                    "push rejected for {}: {}",
                    refname, status
                )))
            } else {
                Ok(())
            }
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        remote.push(&refspec_strs, Some(&mut push_options))?;
        Ok(())
    }
}
