use std::path::PathBuf;

use crate::domain::UpdateKind;
use crate::error::{ReleaseError, Result};
use crate::gateway::{run_command, ManifestRegistry};

/// Registry gateway for the npm-managed package
///
/// Wraps the `npm` CLI in the package directory. `npm version` rewrites
/// package.json in place; the new version is read back from the manifest
/// rather than parsed from command output.
pub struct NpmRegistry {
    dir: PathBuf,
}

impl NpmRegistry {
    /// Create a gateway for the package at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        NpmRegistry { dir: dir.into() }
    }

    fn manifest_path(&self) -> PathBuf {
        self.dir.join("package.json")
    }
}

impl ManifestRegistry for NpmRegistry {
    fn bump_version(&self, kind: UpdateKind) -> Result<()> {
        run_command("npm", &["version", kind.as_str()], &self.dir, &[])?;
        Ok(())
    }

    fn read_version(&self) -> Result<String> {
        let path = self.manifest_path();
        let raw = std::fs::read_to_string(&path)?;

        let manifest: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            ReleaseError::manifest(format!("cannot parse {}: {}", path.display(), e))
        })?;

        manifest
            .get("version")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .ok_or_else(|| {
                ReleaseError::manifest(format!("{} has no 'version' field", path.display()))
            })
    }

    fn publish(&self) -> Result<()> {
        run_command("npm", &["publish"], &self.dir, &[])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &std::path::Path, content: &str) {
        std::fs::write(dir.join("package.json"), content).unwrap();
    }

    #[test]
    fn test_read_version() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), r#"{"name": "client-js", "version": "0.2.0"}"#);

        let registry = NpmRegistry::new(dir.path());
        assert_eq!(registry.read_version().unwrap(), "0.2.0");
    }

    #[test]
    fn test_read_version_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), r#"{"name": "client-js"}"#);

        let registry = NpmRegistry::new(dir.path());
        let err = registry.read_version().unwrap_err();
        assert!(matches!(err, ReleaseError::Manifest(_)));
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_read_version_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "not json");

        let registry = NpmRegistry::new(dir.path());
        assert!(matches!(
            registry.read_version().unwrap_err(),
            ReleaseError::Manifest(_)
        ));
    }

    #[test]
    fn test_read_version_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let registry = NpmRegistry::new(dir.path());
        assert!(matches!(
            registry.read_version().unwrap_err(),
            ReleaseError::Io(_)
        ));
    }
}
