use crate::config::Config;
use crate::domain::{TagPattern, Version};
use crate::error::Result;
use crate::gateway::{ManifestRegistry, ModuleProxy, VersionControl};
use crate::ui;
use crate::workflow::{current_version, ensure_clean};

/// Summary of a completed publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedRelease {
    /// Release tag of the tagged ecosystem
    pub tag: String,

    /// Version the tag encodes
    pub tagged_version: Version,

    /// Whether the proxy-resolution step ran
    pub resolved: bool,
}

/// Publishes the manifest package and tags the release in version control
pub struct Publisher<'a, V: VersionControl, M: ManifestRegistry, P: ModuleProxy> {
    config: &'a Config,
    vcs: &'a V,
    registry: &'a M,
    proxy: &'a P,
}

impl<'a, V: VersionControl, M: ManifestRegistry, P: ModuleProxy> Publisher<'a, V, M, P> {
    pub fn new(config: &'a Config, vcs: &'a V, registry: &'a M, proxy: &'a P) -> Self {
        Publisher {
            config,
            vcs,
            registry,
            proxy,
        }
    }

    /// Publish both ecosystems
    ///
    /// Precondition: the working tree is clean (`DirtyRepository`).
    ///
    /// Effects, in order:
    /// 1. Publish the manifest package at whatever version its manifest
    ///    currently declares.
    /// 2. Re-derive the tagged ecosystem's version from the newest matching
    ///    tag. This trusts tag history, not the version `prepare` computed;
    ///    the release tag for a freshly prepared version is expected to be
    ///    created between the two commands.
    /// 3. Ensure the release tag exists, creating it at HEAD when missing.
    /// 4. Push all tags to the configured remote.
    /// 5. Resolve the module through the proxy at the released version,
    ///    unless no module path is configured.
    ///
    /// Any failure stops the sequence immediately; an already-created or
    /// already-pushed tag is not rolled back.
    pub fn publish(&self) -> Result<PublishedRelease> {
        ensure_clean(self.vcs)?;

        self.registry.publish()?;

        let pattern = TagPattern::new(&self.config.tagged.prefix)?;
        let version = current_version(self.vcs, &pattern)?;
        let tag = pattern.format(&version);

        if self.vcs.has_tag(&tag)? {
            ui::display_status(&format!("Tag {} already exists, not re-creating", tag));
        } else {
            self.vcs.create_tag(&tag)?;
        }

        self.vcs.push_tags(&self.config.remote)?;

        let resolved = if self.config.tagged.module.is_empty() {
            ui::display_status("No module path configured, skipping proxy resolution");
            false
        } else {
            self.proxy.resolve(&version)?;
            true
        };

        Ok(PublishedRelease {
            tag,
            tagged_version: version,
            resolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;
    use crate::gateway::{MockManifestRegistry, MockModuleProxy, MockVersionControl};

    fn config_with_module() -> Config {
        let mut config = Config::default();
        config.tagged.module = "github.com/example/repo/server-go".to_string();
        config
    }

    #[test]
    fn test_publish_existing_tag() {
        let config = config_with_module();
        let vcs = MockVersionControl::new();
        vcs.add_existing_tag("server-go/v1.3.0");
        vcs.add_existing_tag("server-go/v1.2.3");
        let registry = MockManifestRegistry::new(Version::new(0, 2, 0));
        let proxy = MockModuleProxy::new();

        let publisher = Publisher::new(&config, &vcs, &registry, &proxy);
        let published = publisher.publish().unwrap();

        assert_eq!(published.tag, "server-go/v1.3.0");
        assert_eq!(published.tagged_version, Version::new(1, 3, 0));
        assert!(published.resolved);

        assert_eq!(registry.publish_count(), 1);
        // The newest tag already exists, so nothing is re-created
        assert!(vcs.created_tags().is_empty());
        assert_eq!(vcs.pushed_remotes(), vec!["origin"]);
        assert_eq!(proxy.resolved(), vec![Version::new(1, 3, 0)]);
    }

    #[test]
    fn test_publish_dirty_repository_aborts_without_side_effects() {
        let config = config_with_module();
        let vcs = MockVersionControl::new();
        vcs.add_existing_tag("server-go/v1.2.3");
        vcs.set_status("?? scratch.txt");
        let registry = MockManifestRegistry::new(Version::new(0, 2, 0));
        let proxy = MockModuleProxy::new();

        let publisher = Publisher::new(&config, &vcs, &registry, &proxy);
        let err = publisher.publish().unwrap_err();

        assert!(matches!(err, ReleaseError::DirtyRepository(_)));
        assert_eq!(registry.publish_count(), 0);
        assert!(vcs.pushed_remotes().is_empty());
        assert!(proxy.resolved().is_empty());
    }

    #[test]
    fn test_publish_no_tags_fails_after_registry_publish() {
        // The registry publish happens before tag derivation, so a missing
        // tag surfaces as a partial failure with the publish already done.
        let config = config_with_module();
        let vcs = MockVersionControl::new();
        let registry = MockManifestRegistry::new(Version::new(0, 2, 0));
        let proxy = MockModuleProxy::new();

        let publisher = Publisher::new(&config, &vcs, &registry, &proxy);
        let err = publisher.publish().unwrap_err();

        assert!(matches!(err, ReleaseError::TagParse(_)));
        assert_eq!(registry.publish_count(), 1);
        assert!(vcs.pushed_remotes().is_empty());
    }

    #[test]
    fn test_publish_skips_proxy_without_module_path() {
        let config = Config::default();
        assert!(config.tagged.module.is_empty());

        let vcs = MockVersionControl::new();
        vcs.add_existing_tag("server-go/v1.3.0");
        let registry = MockManifestRegistry::new(Version::new(0, 2, 0));
        let proxy = MockModuleProxy::new();

        let publisher = Publisher::new(&config, &vcs, &registry, &proxy);
        let published = publisher.publish().unwrap();

        assert!(!published.resolved);
        assert!(proxy.resolved().is_empty());
        assert_eq!(vcs.pushed_remotes(), vec!["origin"]);
    }

    #[test]
    fn test_publish_uses_configured_remote() {
        let mut config = config_with_module();
        config.remote = "upstream".to_string();

        let vcs = MockVersionControl::new();
        vcs.add_existing_tag("server-go/v1.3.0");
        let registry = MockManifestRegistry::new(Version::new(0, 2, 0));
        let proxy = MockModuleProxy::new();

        let publisher = Publisher::new(&config, &vcs, &registry, &proxy);
        publisher.publish().unwrap();

        assert_eq!(vcs.pushed_remotes(), vec!["upstream"]);
    }

    #[test]
    fn test_publish_malformed_newest_tag_fails() {
        let config = config_with_module();
        let vcs = MockVersionControl::new();
        vcs.add_existing_tag("server-go/nightly");
        vcs.add_existing_tag("server-go/v1.3.0");
        let registry = MockManifestRegistry::new(Version::new(0, 2, 0));
        let proxy = MockModuleProxy::new();

        let publisher = Publisher::new(&config, &vcs, &registry, &proxy);
        assert!(matches!(
            publisher.publish().unwrap_err(),
            ReleaseError::TagParse(_)
        ));
    }
}
