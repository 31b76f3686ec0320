use crate::changelog::Changelog;
use crate::config::Config;
use crate::context::RepositoryContext;
use crate::domain::{TagPattern, UpdateKind, Version};
use crate::error::Result;
use crate::gateway::{ManifestRegistry, VersionControl};
use crate::workflow::{current_version, ensure_clean};

/// Summary of a completed version preparation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRelease {
    /// Next version of the tagged ecosystem (tag not yet created)
    pub tagged_version: Version,

    /// Version the manifest now declares
    pub manifest_version: String,

    /// Section header written to the changelog, naming both versions
    pub version_header: String,
}

/// Bumps both ecosystem versions in lockstep and records the change
pub struct VersionUpdater<'a, V: VersionControl, M: ManifestRegistry> {
    ctx: &'a RepositoryContext,
    config: &'a Config,
    vcs: &'a V,
    registry: &'a M,
}

impl<'a, V: VersionControl, M: ManifestRegistry> VersionUpdater<'a, V, M> {
    pub fn new(
        ctx: &'a RepositoryContext,
        config: &'a Config,
        vcs: &'a V,
        registry: &'a M,
    ) -> Self {
        VersionUpdater {
            ctx,
            config,
            vcs,
            registry,
        }
    }

    /// Prepare a release of the given kind
    ///
    /// Preconditions, checked in order with no side effects on failure:
    /// 1. The changelog's Unreleased section has real items (`EmptyChangelog`)
    /// 2. The working tree is clean (`DirtyRepository`)
    ///
    /// Effects, in order:
    /// 1. Compute the next tagged version from the newest matching tag.
    ///    The tag itself is not created here; `publish` derives it later.
    /// 2. Run the manifest ecosystem's version bump and read back the result.
    /// 3. Rewrite the changelog: fresh placeholder block, then a section
    ///    header naming both new versions.
    /// 4. Stage only the changelog and commit.
    ///
    /// A failure after step 1 leaves earlier effects in place; the manifest
    /// bump in particular is not rolled back.
    pub fn prepare(&self, kind: UpdateKind) -> Result<PreparedRelease> {
        let changelog = Changelog::load(&self.ctx.changelog_path(self.config))?;
        changelog.check_unreleased_has_items()?;
        ensure_clean(self.vcs)?;

        let pattern = TagPattern::new(&self.config.tagged.prefix)?;
        let next_tagged = current_version(self.vcs, &pattern)?.bump(kind);

        self.registry.bump_version(kind)?;
        let manifest_version = self.registry.read_version()?;

        let version_header = format!(
            "{}/v{}, {}",
            self.config.manifest.name,
            manifest_version,
            pattern.format(&next_tagged)
        );

        let promoted = changelog.promote(&version_header)?;
        std::fs::write(self.ctx.changelog_path(self.config), promoted.content())?;

        self.vcs.add(self.ctx.changelog_rel_path(self.config))?;
        self.vcs
            .commit(&format!("Update changelog for {}", version_header))?;

        Ok(PreparedRelease {
            tagged_version: next_tagged,
            manifest_version,
            version_header,
        })
    }
}
