use anyhow::Result;
use bit_store::areas::repository::Repository;
use bit_store::logging::init_logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bit-store",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Write blobs, trees and commits to a content-addressable object store",
    long_about = "Builds git objects, hashes them with SHA-1 and stores them zlib-compressed \
    under <repository>/.git/objects, or under $GIT_OBJECT_DIRECTORY when it is set. \
    Every command prints the ID of the object it produced.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short = 'C', global = true, help = "Run as if started in this directory")]
    repository: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "hash-object",
        about = "Compute a blob ID and optionally store the blob",
        long_about = "This command hashes the content of a file as a blob and can write it to the object database."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "mktree",
        about = "Build a tree object from ls-tree formatted text on stdin",
        long_about = "This command reads lines of the form '<mode> <type> <oid>\\t<name>' from stdin, \
        writes the corresponding tree object and prints its ID."
    )]
    Mktree {
        #[arg(long, help = "Allow entries that reference objects not in the database")]
        missing: bool,
    },
    #[command(
        name = "write-tree",
        about = "Snapshot a directory into blob and tree objects",
        long_about = "This command stores every file below a directory as a blob and every directory as a tree, \
        and prints the ID of the root tree. The .git directory and empty directories are skipped."
    )]
    WriteTree {
        #[arg(index = 1, help = "Directory to snapshot, relative to the repository")]
        dir: Option<PathBuf>,
    },
    #[command(
        name = "commit-tree",
        about = "Create a commit object for a tree",
        long_about = "This command creates a commit pointing at the given tree, with an optional parent. \
        Author and committer are read from GIT_AUTHOR_* and GIT_COMMITTER_* environment variables."
    )]
    CommitTree {
        #[arg(index = 1, help = "The tree object ID")]
        tree: String,
        #[arg(short, long, help = "The parent commit ID")]
        parent: Option<String>,
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let path = match cli.repository {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let mut repository = Repository::new(&path, Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::HashObject { write, file } => {
            repository.hash_object(file, *write)?;
        }
        Commands::Mktree { missing } => {
            repository.mktree(std::io::stdin().lock(), *missing)?;
        }
        Commands::WriteTree { dir } => {
            repository.write_tree(dir.as_deref())?;
        }
        Commands::CommitTree {
            tree,
            parent,
            message,
        } => {
            repository.commit_tree(tree, parent.as_deref(), message)?;
        }
    }

    Ok(())
}
