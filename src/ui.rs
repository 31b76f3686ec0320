//! Terminal output helpers.
//!
//! Pure formatting over the `console` crate; no prompts. The workflow is
//! non-interactive, so everything here is one-way status output.

use console::style;

use crate::workflow::{PreparedRelease, PublishedRelease};

/// Print an error message in red to stderr
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Echo an external command before it runs
pub fn display_command(command: &str) {
    println!("{} {}", style(">").dim(), style(command).dim());
}

/// Summarize a completed version preparation
pub fn display_prepared(release: &PreparedRelease) {
    println!("\n{}", style("Release prepared").bold());
    println!("  Changelog section: {}", style(&release.version_header).green());
    println!(
        "  Tagged package:    v{} {}",
        release.tagged_version,
        style("(tag created at publish time)").dim()
    );
    println!("  Manifest package:  v{}", release.manifest_version);
    display_success("Changelog committed");
}

/// Summarize a completed publish
pub fn display_published(release: &PublishedRelease) {
    println!("\n{}", style("Release published").bold());
    println!("  Tag: {}", style(&release.tag).green());
    if release.resolved {
        display_success("Module resolved through proxy");
    }
    display_success("Tags pushed");
}
