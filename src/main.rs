use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gitdav::commands::plumbing::ls_tree::LsTreeOptions;
use gitdav::{ObjectId, Repository};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitdav",
    version = "0.1.0",
    about = "Browse a git commit as a read-only file tree",
    long_about = "Reads the loose objects of a git repository and exposes the tree of a \
    single commit: list directories, describe paths and print file contents. \
    Packed objects are not supported.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Path inside the repository (defaults to the current directory)"
    )]
    repo: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "ls-tree",
        about = "List a directory of a commit",
        long_about = "Lists the entries of a directory of the given commit as \
        `<mode> <type> <object>\\t<path>`. Without a path the root tree is listed."
    )]
    LsTree {
        #[arg(short, long, help = "The commit to read")]
        commit: ObjectId,
        #[arg(index = 1, default_value = "", help = "Directory inside the commit")]
        path: String,
        #[arg(short, long, help = "Recurse into subdirectories")]
        recursive: bool,
        #[arg(short, long, help = "Show file sizes")]
        long: bool,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of a file of a commit"
    )]
    CatFile {
        #[arg(short, long, help = "The commit to read")]
        commit: ObjectId,
        #[arg(index = 1, help = "File inside the commit")]
        path: String,
    },
    #[command(name = "stat", about = "Describe a path of a commit")]
    Stat {
        #[arg(short, long, help = "The commit to read")]
        commit: ObjectId,
        #[arg(index = 1, default_value = "", help = "Path inside the commit")]
        path: String,
    },
    #[command(name = "show-commit", about = "Print the root tree of a commit")]
    ShowCommit {
        #[arg(index = 1, help = "The commit to read")]
        commit: ObjectId,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = match cli.repo {
        Some(path) => path,
        None => std::env::current_dir().context("Can't get current working directory")?,
    };
    let repository = Repository::discover(&start)?;
    tracing::info!(root = %repository.path().display(), "opened repository");

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    match &cli.command {
        Commands::LsTree {
            commit,
            path,
            recursive,
            long,
        } => {
            let options = LsTreeOptions {
                recursive: *recursive,
                long: *long,
            };
            repository
                .ls_tree(commit, path, options, &mut writer)
                .with_context(|| format!("Unable to list {path:?} at commit {commit}"))?
        }
        Commands::CatFile { commit, path } => repository
            .cat_file(commit, path, &mut writer)
            .with_context(|| format!("Unable to read {path:?} at commit {commit}"))?,
        Commands::Stat { commit, path } => repository
            .stat(commit, path, &mut writer)
            .with_context(|| format!("Unable to stat {path:?} at commit {commit}"))?,
        Commands::ShowCommit { commit } => repository
            .show_commit(commit, &mut writer)
            .with_context(|| format!("Unable to read commit {commit}"))?,
    }

    writer.flush()?;
    Ok(())
}
