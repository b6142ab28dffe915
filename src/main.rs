use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use is_terminal::IsTerminal;
use minus::Pager;
use nib::Repository;
use nib::artifacts::core::{PagerWriter, page_all};
use nib::artifacts::merge::resolution::ResolutionStrategy;
use nib::config::{self, DEFAULT_LOG_FILTER, DEFAULT_REPOSITORY_DIR, LOG_ENV, REPOSITORY_DIR_ENV, Settings};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nib",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal local version control engine",
    long_about = "nib tracks snapshots of files through a staging area, immutable commits \
    and named branches, with a naive merge and byte-level conflict detection. \
    It is a learning project, not a replacement for a real version control system.",
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
        env = REPOSITORY_DIR_ENV,
        default_value = DEFAULT_REPOSITORY_DIR,
        help = "The repository root, relative to the workspace unless absolute"
    )]
    repository_dir: PathBuf,
    #[arg(
        long,
        global = true,
        help = "The directory files are staged from (defaults to the current directory)"
    )]
    workspace: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the repository root with an empty staging area, \
        an empty commit store and a single 'main' branch. It does nothing if the root already exists."
    )]
    Init,
    #[command(name = "stage", about = "Copy files into the staging area")]
    Stage {
        #[arg(index = 1, required = true, num_args = 1.., help = "The files to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(name = "reset", about = "Empty the staging area")]
    Reset,
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots the staging area as a new commit on the current branch \
        and empties the staging area."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "branch", about = "Create or list branches")]
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },
    #[command(
        name = "checkout",
        about = "Switch to another branch",
        long_about = "This command switches the current branch. The staging area is always reset, \
        so any staged files are discarded."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        name: String,
        #[arg(short, long, help = "Discard staged files without asking")]
        force: bool,
    },
    #[command(
        name = "merge",
        about = "Merge another branch into the current one",
        long_about = "This command appends the source branch history to the current branch, \
        then copies the source commit files into the staging area without overwriting staged files."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge from")]
        source: String,
        #[arg(long, help = "Only append the history, do not touch the staging area")]
        history_only: bool,
    },
    #[command(
        name = "apply-merge",
        about = "Copy a branch's commit files into the staging area"
    )]
    ApplyMerge {
        #[arg(index = 1, help = "The branch to take files from")]
        source: String,
    },
    #[command(
        name = "conflicts",
        about = "List files whose content differs from the current branch's latest commit"
    )]
    Conflicts {
        #[arg(index = 1, help = "The branch to compare against")]
        source: String,
    },
    #[command(
        name = "resolve-conflicts",
        about = "Choose a strategy for the conflicts with a branch",
        long_about = "This command detects conflicts with the source branch and reports the chosen \
        strategy. No files are changed; re-stage files by hand to apply a resolution."
    )]
    ResolveConflicts {
        #[arg(
            short,
            long,
            value_parser = ResolutionStrategy::try_parse,
            help = "One of: ours, theirs, manual"
        )]
        strategy: ResolutionStrategy,
        #[arg(index = 1, help = "The branch the conflicts come from")]
        source: String,
    },
    #[command(name = "log", about = "Show the commit history of a branch")]
    Log {
        #[arg(index = 1, help = "The branch to show (defaults to the current branch)")]
        branch: Option<String>,
    },
    #[command(name = "status", about = "Show the current branch and staged files")]
    Status,
}

#[derive(Subcommand)]
enum BranchAction {
    #[command(name = "create", about = "Create a branch from the current branch's history")]
    Create {
        #[arg(index = 1, help = "The name of the new branch")]
        name: String,
    },
    #[command(name = "list", about = "List all branches")]
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let workspace = match cli.workspace {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };
    let settings = Settings::new(workspace, cli.repository_dir);

    match cli.command {
        Commands::Log { branch } if config::use_pager() => {
            let pager = Pager::new();
            let repository = Repository::from_settings(
                &settings,
                Box::new(PagerWriter::new(pager.clone())),
            )?;

            repository.log(branch.as_deref())?;
            page_all(pager)?
        }
        command => {
            let repository = Repository::from_settings(&settings, Box::new(std::io::stdout()))?;

            run(&repository, command).await?
        }
    }

    Ok(())
}

async fn run(repository: &Repository, command: Commands) -> Result<()> {
    match command {
        Commands::Init => {
            repository.init().await?;
        }
        Commands::Stage { paths } => {
            for path in paths {
                repository.stage(&path).await?;
            }
        }
        Commands::Reset => repository.reset().await?,
        Commands::Commit { message } => {
            repository.commit(&message).await?;
        }
        Commands::Branch { action } => match action {
            BranchAction::Create { name } => repository.create_branch(&name)?,
            BranchAction::List => repository.show_branches()?,
        },
        Commands::Checkout { name, force } => {
            let staged = repository.checkout_preview(&name).await?;
            if !staged.is_empty()
                && !force
                && std::io::stdin().is_terminal()
                && !confirm_discard(&name, &staged)?
            {
                eprintln!("Checkout aborted.");
                return Ok(());
            }

            let report = repository.checkout(&name).await?;
            if !report.discarded.is_empty() {
                eprintln!(
                    "{} discarded {} staged file(s): {}",
                    "warning:".yellow().bold(),
                    report.discarded.len(),
                    report.discarded.join(", ")
                );
            }
        }
        Commands::Merge {
            source,
            history_only,
        } => {
            if history_only {
                repository.merge_branch(&source)?;
            } else {
                repository.merge(&source).await?;
            }
        }
        Commands::ApplyMerge { source } => {
            repository.apply_merge_changes(&source).await?;
        }
        Commands::Conflicts { source } => {
            repository.detect_conflicts(&source)?;
        }
        Commands::ResolveConflicts { strategy, source } => {
            let conflicts = repository.detect_conflicts(&source)?;
            repository.resolve_conflicts(&conflicts, strategy)?;
        }
        Commands::Log { branch } => repository.log(branch.as_deref())?,
        Commands::Status => {
            repository.status().await?;
        }
    }

    Ok(())
}

fn confirm_discard(target: &str, staged: &[String]) -> Result<bool> {
    eprintln!(
        "{} switching branches resets the staging area. These files will be discarded:",
        "warning:".yellow().bold()
    );
    for name in staged {
        eprintln!("    {}", name.red());
    }
    eprint!("Switch to '{}' anyway? [y/N] ", target);
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
