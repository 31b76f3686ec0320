//! Markdown changelog with a conventional "Unreleased" staging section.
//!
//! The grammar is small: `## `-prefixed lines open sections,
//! `-`-prefixed lines are bullet items, everything else is prose. The
//! "Unreleased" header and the sentinel placeholder are matched as literal
//! text, so the document is never interpreted as full Markdown.

use std::path::Path;

use crate::error::{ReleaseError, Result};

/// Exact header line of the staging section
pub const UNRELEASED_HEADER: &str = "## Unreleased";

/// Placeholder text meaning no changes are queued for release
pub const SENTINEL: &str = "No unreleased changes";

/// A parsed `## `-section of the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Header text without the `## ` prefix
    pub title: String,
    /// Bullet items (`-`-prefixed lines) in document order
    pub items: Vec<String>,
}

/// A changelog document held in memory
///
/// Read once at the start of a workflow run, checked and rewritten in memory,
/// and written back at most once.
#[derive(Debug, Clone)]
pub struct Changelog {
    content: String,
}

impl Changelog {
    /// Wrap raw changelog text
    pub fn new(content: impl Into<String>) -> Self {
        Changelog {
            content: content.into(),
        }
    }

    /// Read a changelog from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Changelog::new(content))
    }

    /// The raw document text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Parse the document into its section structure
    ///
    /// Lines before the first header are ignored; a header opens a section
    /// that runs until the next header or end of document.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut current: Option<Section> = None;

        for line in self.content.lines() {
            if let Some(title) = line.strip_prefix("## ") {
                if let Some(section) = current.take() {
                    sections.push(section);
                }
                current = Some(Section {
                    title: title.to_string(),
                    items: Vec::new(),
                });
            } else if line.starts_with('-') {
                if let Some(section) = current.as_mut() {
                    section.items.push(line.to_string());
                }
            }
        }

        if let Some(section) = current.take() {
            sections.push(section);
        }

        sections
    }

    /// Bullet items under every "Unreleased" header
    pub fn unreleased_items(&self) -> Vec<String> {
        self.sections()
            .into_iter()
            .filter(|s| s.title == "Unreleased")
            .flat_map(|s| s.items)
            .collect()
    }

    /// Verify the Unreleased section is ready for release
    ///
    /// # Returns
    /// * `Ok(())` - At least one bullet item exists and none is the sentinel
    /// * `Err(EmptyChangelog)` - Section absent, empty, or placeholder-only
    pub fn check_unreleased_has_items(&self) -> Result<()> {
        let items = self.unreleased_items();

        for item in &items {
            if item.contains(SENTINEL) {
                return Err(ReleaseError::empty_changelog(format!(
                    "replace the '{}' placeholder with changelog items",
                    SENTINEL
                )));
            }
        }

        if items.is_empty() {
            return Err(ReleaseError::empty_changelog(
                "add changelog items under the 'Unreleased' header",
            ));
        }

        Ok(())
    }

    /// Rewrite the document for a release
    ///
    /// Replaces the first `## Unreleased` line with a fresh placeholder block
    /// followed by a section header naming the released versions:
    ///
    /// ```text
    /// ## Unreleased
    ///
    /// No unreleased changes.
    ///
    /// ## <version_header>
    /// ```
    ///
    /// The previously staged items end up under the new version header.
    ///
    /// # Arguments
    /// * `version_header` - Section title naming both released versions
    pub fn promote(&self, version_header: &str) -> Result<Changelog> {
        let mut lines: Vec<String> = Vec::new();
        let mut replaced = false;

        for line in self.content.lines() {
            if !replaced && line == UNRELEASED_HEADER {
                lines.push(UNRELEASED_HEADER.to_string());
                lines.push(String::new());
                lines.push(format!("{}.", SENTINEL));
                lines.push(String::new());
                lines.push(format!("## {}", version_header));
                replaced = true;
            } else {
                lines.push(line.to_string());
            }
        }

        if !replaced {
            return Err(ReleaseError::empty_changelog(format!(
                "changelog has no '{}' header",
                UNRELEASED_HEADER
            )));
        }

        let mut content = lines.join("\n");
        if self.content.ends_with('\n') {
            content.push('\n');
        }

        Ok(Changelog::new(content))
    }
}
