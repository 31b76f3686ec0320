//! Gateways to the external tools the release workflow sequences.
//!
//! The workflow itself never touches git, the package manager, or the module
//! proxy directly; it goes through the three traits defined here. Concrete
//! implementations wrap the real tools, and [mock] provides recording fakes
//! so workflow logic can be tested hermetically.
//!
//! All gateway calls are synchronous and awaited to completion before the
//! next step runs. There are no timeouts; a hanging tool hangs the workflow.

pub mod git;
pub mod goproxy;
pub mod mock;
pub mod npm;

pub use git::GitGateway;
pub use goproxy::GoProxy;
pub use mock::{MockManifestRegistry, MockModuleProxy, MockVersionControl};
pub use npm::NpmRegistry;

use std::path::Path;
use std::process::Command;

use crate::domain::{UpdateKind, Version};
use crate::error::{ReleaseError, Result};
use crate::ui;

/// Version-control operations the workflow depends on
///
/// Tag listing, cleanliness checks, staging, committing, tagging, and pushing.
/// Implementations are single-writer; the workflow assumes one operator runs
/// one release at a time.
pub trait VersionControl {
    /// Tags matching the prefix, newest first by semantic version order
    fn list_tags(&self, prefix: &str) -> Result<Vec<String>>;

    /// Raw status output; an empty string means the working tree is clean
    fn status(&self) -> Result<String>;

    /// Stage a single file (path relative to the repository root)
    fn add(&self, path: &Path) -> Result<()>;

    /// Commit the staged changes
    fn commit(&self, message: &str) -> Result<()>;

    /// Whether a tag with this exact name exists
    fn has_tag(&self, name: &str) -> Result<bool>;

    /// Create a lightweight tag at HEAD
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push all tags to the given remote
    fn push_tags(&self, remote: &str) -> Result<()>;
}

/// The manifest-versioned package's own registry tooling
///
/// The package manager owns the manifest file: `bump_version` rewrites it in
/// place and `read_version` reads back whatever it now declares. `publish`
/// pushes the manifest's current version to the registry, with no explicit
/// version argument.
pub trait ManifestRegistry {
    /// Bump the manifest version by the given kind
    fn bump_version(&self, kind: UpdateKind) -> Result<()>;

    /// Version string currently declared by the manifest
    fn read_version(&self) -> Result<String>;

    /// Publish the package at the manifest's current version
    fn publish(&self) -> Result<()>;
}

/// Module proxy for the tag-versioned package
///
/// Resolving a version forces the proxy to index the freshly pushed tag and
/// confirms the release is actually fetchable.
pub trait ModuleProxy {
    /// Resolve the module listing at the given released version
    fn resolve(&self, version: &Version) -> Result<()>;
}

/// Run an external command to completion, echoing it first.
///
/// # Arguments
/// * `program` - Executable name
/// * `args` - Arguments passed verbatim
/// * `cwd` - Working directory for the invocation
/// * `envs` - Extra environment variables
///
/// # Returns
/// * `Ok(String)` - Captured stdout on exit code 0
/// * `Err(ExternalTool)` - If the program cannot be spawned or exits non-zero;
///   the error carries the captured stderr
pub fn run_command(
    program: &str,
    args: &[&str],
    cwd: &Path,
    envs: &[(&str, &str)],
) -> Result<String> {
    let rendered = format!("{} {}", program, args.join(" "));
    ui::display_command(&rendered);

    let mut cmd = Command::new(program);
    cmd.args(args).current_dir(cwd);
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let output = cmd
        .output()
        .map_err(|e| ReleaseError::external_tool(format!("failed to run '{}': {}", rendered, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReleaseError::external_tool(format!(
            "'{}' exited with code {}\n{}",
            rendered,
            output.status.code().unwrap_or(-1),
            stderr
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
