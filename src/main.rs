use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use git_relnotes::classifier::group_commits;
use git_relnotes::collect;
use git_relnotes::config;
use git_relnotes::domain::display_version;
use git_relnotes::files::group_files_by_directory;
use git_relnotes::git::GitHistory;
use git_relnotes::metadata::ProjectMetadata;
use git_relnotes::render::{render_notes, write_notes, NotesContext};
use git_relnotes::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-relnotes",
    about = "Generate Markdown release notes from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        default_value = ".",
        help = "Project directory containing the manifest"
    )]
    project_dir: PathBuf,

    #[arg(short, long, help = "Override the configured output directory")]
    output: Option<String>,

    #[arg(long, help = "Print the document to stdout instead of writing it")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-relnotes {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Project metadata is the one required input; without it there is
    // nothing to name or version the document with
    let metadata = match ProjectMetadata::resolve(&args.project_dir) {
        Ok(meta) => meta,
        Err(e) => {
            ui::display_error(&format!("Cannot resolve project metadata: {}", e));
            std::process::exit(1);
        }
    };

    // A missing repository is not fatal; the collectors degrade to an
    // initial-release snapshot
    let history = GitHistory::discover(&args.project_dir).ok();
    if history.is_none() {
        ui::display_status("Not inside a git repository; generating initial-release notes");
    }

    let snapshot = collect::snapshot(history.as_ref(), &metadata.manifest);

    match &snapshot.reference {
        Some(tag) => ui::display_status(&format!("Comparing against tag '{}'", tag)),
        None => ui::display_status("No previous tag found; covering full history"),
    }

    let groups = group_commits(&snapshot.commits, &config.attribution);
    let release_type = groups.release_type(&metadata.version);
    let version = display_version(&metadata.version);
    let file_groups = group_files_by_directory(&snapshot.changed_files);

    ui::display_summary(&metadata.name, &version, release_type, &groups);

    let document = render_notes(&NotesContext {
        project: &metadata.name,
        version: &version,
        release_type,
        groups: &groups,
        file_groups: &file_groups,
        commits: &snapshot.commits,
        attribution: &config.attribution,
    });

    if args.dry_run {
        println!("\n{}", document);
        return Ok(());
    }

    let notes_dir = args
        .project_dir
        .join(args.output.as_deref().unwrap_or(&config.output.notes_dir));
    let output_path = write_notes(&notes_dir, &version, &document)?;

    ui::display_success(&format!(
        "Release notes written to {}",
        output_path.display()
    ));

    Ok(())
}
