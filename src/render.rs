use semver::Version;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::classifier::CommitGroups;
use crate::config::AttributionConfig;
use crate::domain::{CommitRecord, ReleaseType};
use crate::error::Result;

/// Everything the document template needs for one run.
pub struct NotesContext<'a> {
    pub project: &'a str,
    /// Display version (the 0.0.0 placeholder already mapped to 1.0.0).
    pub version: &'a Version,
    pub release_type: ReleaseType,
    pub groups: &'a CommitGroups,
    pub file_groups: &'a BTreeMap<String, Vec<String>>,
    pub commits: &'a [CommitRecord],
    pub attribution: &'a AttributionConfig,
}

/// Subtitle shown under the document heading.
///
/// A displayed version of exactly 1.0.0 is the project's first release and
/// gets its own subtitle, whatever the release type says.
pub fn subtitle_for(release_type: ReleaseType, version: &Version) -> &'static str {
    if *version == Version::new(1, 0, 0) {
        return "🚀 Initial major release!";
    }

    match release_type {
        ReleaseType::Major => "🚀 Major update with significant changes or new architecture",
        ReleaseType::Minor => "✨ Feature release with new enhancements or capabilities",
        ReleaseType::Patch => "🛠️ Maintenance update with bug fixes and minor improvements",
        ReleaseType::Misc => "📦 Internal update covering refactors, docs or non-functional changes",
    }
}

/// Render the full Markdown document.
///
/// Layout: heading, subtitle, a Highlights section with one subsection per
/// non-empty commit bucket, a Key Files Changed section with one subsection
/// per directory group, and a closing credit line.
pub fn render_notes(ctx: &NotesContext) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("## ✨ {} v{}\n", ctx.project, ctx.version));
    doc.push_str(&format!(
        "\n{}\n",
        subtitle_for(ctx.release_type, ctx.version)
    ));

    doc.push_str("\n---\n\n### ✅ Highlights\n");
    push_bucket(&mut doc, "🚀 Features", &ctx.groups.feat);
    push_bucket(&mut doc, "🐛 Fixes", &ctx.groups.fix);
    push_bucket(&mut doc, "🛠️ Other Improvements", &ctx.groups.misc);

    doc.push_str("\n---\n\n### 📂 Key Files Changed\n");
    for (dir, names) in ctx.file_groups {
        let label = if dir == "." {
            "./".to_string()
        } else {
            format!("{}/", dir)
        };
        let plural = if names.len() > 1 { "s" } else { "" };
        doc.push_str(&format!(
            "\n#### 📁 {} ({} file{})\n\n",
            label,
            names.len(),
            plural
        ));
        for name in names {
            doc.push_str(&format!("- `{}`\n", name));
        }
    }

    doc.push_str("\n---\n\nFeel free to contribute or open issues. 💚\n\n");
    doc.push_str(&credit_line(ctx.commits, ctx.attribution));
    doc.push('\n');

    doc
}

fn push_bucket(doc: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    doc.push_str(&format!("\n#### {}\n\n", title));
    doc.push_str(&lines.join("\n"));
    doc.push('\n');
}

/// Closing credit: unique, bot-excluded authors sorted alphabetically, or
/// the configured fallback name when nobody qualifies.
fn credit_line(commits: &[CommitRecord], attribution: &AttributionConfig) -> String {
    let mut authors: Vec<&str> = commits
        .iter()
        .filter_map(|commit| commit.author.as_deref())
        .filter(|author| !author.is_empty() && !attribution.is_bot(author))
        .collect();
    authors.sort_unstable();
    authors.dedup();

    if authors.is_empty() {
        format!("Made with ❤️ by {}", attribution.fallback_author)
    } else {
        format!("Made with ❤️ by {}", authors.join(", "))
    }
}

/// Write the document to `<notes_dir>/<version>.md`, creating intermediate
/// directories as needed. Last write wins.
pub fn write_notes(notes_dir: &Path, version: &Version, document: &str) -> Result<PathBuf> {
    let output_path = notes_dir.join(format!("{}.md", version));
    fs::create_dir_all(notes_dir)?;
    fs::write(&output_path, document)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::group_commits;
    use crate::files::group_files_by_directory;

    fn record(message: &str, author: Option<&str>) -> CommitRecord {
        CommitRecord::new(message, author.map(|a| a.to_string()))
    }

    fn render(
        version: Version,
        commits: Vec<CommitRecord>,
        changed: Vec<String>,
    ) -> String {
        let attribution = AttributionConfig::default();
        let groups = group_commits(&commits, &attribution);
        let release_type = groups.release_type(&version);
        let display = crate::domain::display_version(&version);
        let file_groups = group_files_by_directory(&changed);

        render_notes(&NotesContext {
            project: "demo",
            version: &display,
            release_type,
            groups: &groups,
            file_groups: &file_groups,
            commits: &commits,
            attribution: &attribution,
        })
    }

    #[test]
    fn test_three_commit_example() {
        let doc = render(
            Version::new(1, 2, 0),
            vec![
                record("feat: add X", Some("Alice")),
                record("fix: bug", Some("Bob")),
                record("chore: cleanup", Some("github-actions[bot]")),
            ],
            vec!["src/lib.rs".to_string()],
        );

        assert!(doc.contains("#### 🚀 Features\n\n- feat: add X _(by Alice)_"));
        assert!(doc.contains("#### 🐛 Fixes\n\n- fix: bug _(by Bob)_"));
        // The bot's line is present but unattributed
        assert!(doc.contains("#### 🛠️ Other Improvements\n\n- chore: cleanup\n"));
        assert!(!doc.contains("github-actions"));
        // Credit line excludes the bot and sorts the humans
        assert!(doc.contains("Made with ❤️ by Alice, Bob"));
    }

    #[test]
    fn test_empty_buckets_are_omitted() {
        let doc = render(
            Version::new(1, 2, 1),
            vec![record("fix: only fixes here", Some("Alice"))],
            vec!["src/lib.rs".to_string()],
        );

        assert!(!doc.contains("Features"));
        assert!(doc.contains("#### 🐛 Fixes"));
        assert!(!doc.contains("Other Improvements"));
    }

    #[test]
    fn test_placeholder_version_renders_as_initial_release() {
        let doc = render(
            Version::new(0, 0, 0),
            vec![record("chore: bootstrap", Some("Alice"))],
            vec!["Cargo.toml".to_string()],
        );

        assert!(doc.contains("## ✨ demo v1.0.0"));
        assert!(doc.contains("🚀 Initial major release!"));
    }

    #[test]
    fn test_major_shape_subtitle_without_feat_or_fix() {
        let doc = render(
            Version::new(2, 0, 0),
            vec![record("docs: rewrite readme", Some("Alice"))],
            vec!["README.md".to_string()],
        );

        assert!(doc.contains("🚀 Major update"));
    }

    #[test]
    fn test_file_sections_show_counts_and_backticks() {
        let doc = render(
            Version::new(1, 3, 0),
            vec![record("feat: more", Some("Alice"))],
            vec![
                "src/main.rs".to_string(),
                "src/lib.rs".to_string(),
                "README.md".to_string(),
            ],
        );

        assert!(doc.contains("#### 📁 ./ (1 file)\n\n- `README.md`"));
        assert!(doc.contains("#### 📁 src/ (2 files)\n\n- `lib.rs`\n- `main.rs`"));
    }

    #[test]
    fn test_credit_falls_back_when_only_bots_commit() {
        let doc = render(
            Version::new(1, 2, 1),
            vec![record("fix: automated patch", Some("github-actions[bot]"))],
            vec!["src/lib.rs".to_string()],
        );

        assert!(doc.contains("Made with ❤️ by The Maintainers"));
    }

    #[test]
    fn test_credit_dedupes_authors() {
        let doc = render(
            Version::new(1, 2, 1),
            vec![
                record("fix: one", Some("Bob")),
                record("fix: two", Some("Bob")),
                record("fix: three", Some("Alice")),
            ],
            vec!["src/lib.rs".to_string()],
        );

        assert!(doc.contains("Made with ❤️ by Alice, Bob"));
    }

    #[test]
    fn test_write_notes_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let notes_dir = dir.path().join(".github").join("release-notes");

        let path = write_notes(&notes_dir, &Version::new(1, 2, 3), "# hello\n").unwrap();

        assert_eq!(path, notes_dir.join("1.2.3.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# hello\n");
    }

    #[test]
    fn test_write_notes_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let notes_dir = dir.path().to_path_buf();

        write_notes(&notes_dir, &Version::new(1, 0, 0), "first").unwrap();
        let path = write_notes(&notes_dir, &Version::new(1, 0, 0), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
