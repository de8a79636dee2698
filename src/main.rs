use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use sprout::areas::repository::Repository;
use sprout::commands::porcelain::log::LogOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sprout",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal local version control system",
    long_about = "sprout snapshots files into a content-addressed store, \
    links the snapshots into a single chain of commits, \
    and shows line diffs between a commit and its parent.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "SPROUT_ROOT",
        help = "The repository root (defaults to the current directory)"
    )]
    root: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "SPROUT_COMMIT_DATE",
        hide = true,
        help = "RFC 3339 timestamp used for new commits"
    )]
    commit_date: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the repository root or at the specified path. \
        Running it on an existing repository leaves it untouched."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the content of the given files and stages them. \
        Directories are added recursively."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files as a new commit on top of the current head."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists the commits reachable from head, newest first."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "show",
        about = "Show the changes introduced by a commit",
        long_about = "This command compares every file of a commit with its version in the parent commit. \
        The commit may be named by a unique prefix of its hash."
    )]
    Show {
        #[arg(index = 1, help = "The commit hash or a unique prefix of it")]
        revision: String,
    },
    #[command(
        name = "status",
        about = "Show the staged files",
        long_about = "This command lists the staged files and how they compare with the commit history."
    )]
    Status,
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SPROUT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn init_color() {
    if std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

fn open_repository(root: &Path, commit_date: Option<&str>) -> Result<Repository> {
    let repository = Repository::new(root, Box::new(std::io::stdout()))?;

    match commit_date {
        Some(commit_date) => {
            let commit_date = DateTime::parse_from_rfc3339(commit_date)
                .map_err(|err| anyhow!("invalid SPROUT_COMMIT_DATE {commit_date}: {err}"))?
                .with_timezone(&Utc);
            Ok(repository.with_commit_date(commit_date))
        }
        None => Ok(repository),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    let commit_date = cli.commit_date.as_deref();

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => root.join(path),
                None => root,
            };
            std::fs::create_dir_all(&path)
                .map_err(|err| anyhow!("unable to create {}: {err}", path.display()))?;

            open_repository(&path, commit_date)?.init()?
        }
        Commands::Add { paths } => {
            open_repository(&root, commit_date)?.add(paths)?;
        }
        Commands::Commit { message } => {
            open_repository(&root, commit_date)?.commit(message)?;
        }
        Commands::Log { oneline } => {
            let opts = LogOptions { oneline: *oneline };

            open_repository(&root, commit_date)?.log(&opts)?
        }
        Commands::Show { revision } => {
            open_repository(&root, commit_date)?.show(revision)?;
        }
        Commands::Status => open_repository(&root, commit_date)?.status()?,
        Commands::CatFile { sha } => open_repository(&root, commit_date)?.cat_file(sha)?,
        Commands::HashObject { write, file } => {
            open_repository(&root, commit_date)?.hash_object(file, *write)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();
    init_color();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
