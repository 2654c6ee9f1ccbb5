//! Pure formatting functions for terminal output.
//!
//! All display logic lives here, separated from the pipeline. Nothing in
//! this module touches the repository or the filesystem.

use console::style;
use semver::Version;

use crate::classifier::CommitGroups;
use crate::domain::ReleaseType;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a one-screen summary of what the run found.
///
/// Shows the project, the display version, the inferred release type and
/// the bucket sizes.
pub fn display_summary(
    project: &str,
    version: &Version,
    release_type: ReleaseType,
    groups: &CommitGroups,
) {
    println!(
        "\n{}",
        style(format!("Release notes for {} v{}", project, version)).bold()
    );
    println!("  type:     {}", release_type);
    println!("  features: {}", groups.feat.len());
    println!("  fixes:    {}", groups.fix.len());
    println!("  misc:     {}", groups.misc.len());
}
