use std::path::PathBuf;

use crate::domain::Version;
use crate::error::Result;
use crate::gateway::{run_command, ModuleProxy};

/// Module proxy gateway for the tag-versioned Go package
///
/// `go list -m <module>@v<version>` with GOPROXY pinned to the public proxy
/// both forces the proxy to index the new tag and verifies it resolves.
pub struct GoProxy {
    root: PathBuf,
    module: String,
    proxy: String,
}

impl GoProxy {
    /// Create a gateway for the given module path
    ///
    /// # Arguments
    /// * `root` - Directory the listing command runs in
    /// * `module` - Full module path (e.g., "github.com/example/repo/server-go")
    /// * `proxy` - Proxy host set as GOPROXY for the query
    pub fn new(root: impl Into<PathBuf>, module: impl Into<String>, proxy: impl Into<String>) -> Self {
        GoProxy {
            root: root.into(),
            module: module.into(),
            proxy: proxy.into(),
        }
    }
}

impl ModuleProxy for GoProxy {
    fn resolve(&self, version: &Version) -> Result<()> {
        let target = format!("{}@v{}", self.module, version);
        run_command(
            "go",
            &["list", "-m", target.as_str()],
            &self.root,
            &[("GOPROXY", self.proxy.as_str())],
        )?;
        Ok(())
    }
}
