//! The release workflow: version preparation and publishing.
//!
//! Both components share the same shape: check preconditions (aborting with
//! no side effects on failure), then execute a fixed sequence of gateway
//! calls. A failure mid-sequence stops immediately; already-performed side
//! effects are not rolled back and must be cleaned up by the operator.

pub mod publisher;
pub mod updater;

pub use publisher::{PublishedRelease, Publisher};
pub use updater::{PreparedRelease, VersionUpdater};

use crate::domain::{TagPattern, Version};
use crate::error::{ReleaseError, Result};
use crate::gateway::VersionControl;

/// Refuse to proceed unless the working tree is clean
///
/// # Returns
/// * `Ok(())` - Status output is empty
/// * `Err(DirtyRepository)` - Carrying the raw status output
pub fn ensure_clean<V: VersionControl + ?Sized>(vcs: &V) -> Result<()> {
    let status = vcs.status()?;
    if !status.trim().is_empty() {
        return Err(ReleaseError::dirty_repository(status));
    }
    Ok(())
}

/// Current released version of the tagged ecosystem
///
/// Parses only the first (newest) tag matching the pattern's prefix. A
/// malformed first tag is a parse failure even when older tags are valid;
/// the newest tag is the single source of truth.
pub fn current_version<V: VersionControl + ?Sized>(
    vcs: &V,
    pattern: &TagPattern,
) -> Result<Version> {
    let tags = vcs.list_tags(pattern.prefix())?;
    let newest = tags.first().ok_or_else(|| {
        ReleaseError::tag_parse(format!(
            "no tags matching '{}/vX.Y.Z' found",
            pattern.prefix()
        ))
    })?;
    pattern.parse(newest)
}
