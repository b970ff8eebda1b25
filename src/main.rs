use anyhow::Result;
use clap::{Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::PagerWriter;
use gitlet::commands::Command;
use gitlet::commands::plumbing::cat_file::CatFileCommand;
use gitlet::commands::plumbing::hash_object::HashObjectCommand;
use gitlet::commands::porcelain::add::AddCommand;
use gitlet::commands::porcelain::branch::BranchCommand;
use gitlet::commands::porcelain::checkout::CheckoutCommand;
use gitlet::commands::porcelain::commit::CommitCommand;
use gitlet::commands::porcelain::find::FindCommand;
use gitlet::commands::porcelain::global_log::GlobalLogCommand;
use gitlet::commands::porcelain::init::InitCommand;
use gitlet::commands::porcelain::log::LogCommand;
use gitlet::commands::porcelain::rm::RmCommand;
use gitlet::commands::porcelain::rm_branch::RmBranchCommand;
use gitlet::commands::porcelain::status::StatusCommand;
use gitlet::config::Config;
use gitlet::errors::GitletError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    about = "A small local version-control system",
    long_about = "Gitlet keeps snapshots of a working directory in a content-addressed \
    store under .gitlet, with branches, a staging area and history inspection.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates .gitlet in the current directory with an initial \
        commit and a master branch pointing at it."
    )]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the head snapshot updated with the staged files \
        and without the files marked for removal."
    )]
    Commit {
        #[arg(index = 1, default_value = "", help = "The commit message")]
        message: String,
    },
    #[command(name = "rm", about = "Unstage a file or mark it for removal")]
    Rm {
        #[arg(index = 1)]
        path: String,
    },
    #[command(name = "log", about = "Show the history of the head commit")]
    Log,
    #[command(name = "global-log", about = "Show every commit reachable from a branch")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "checkout <branch> switches branches; checkout -- <file> restores a file \
        from head; checkout <commit> -- <file> restores a file from a commit."
    )]
    Checkout {
        #[arg(index = 1, help = "Branch to switch to, or commit to restore from")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "File to restore")]
        path: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the head commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object store"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the blob to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "cat-file", about = "Print the content of an object")]
    CatFile {
        #[arg(index = 1, help = "Full or abbreviated object id")]
        id: String,
    },
}

impl Commands {
    fn pages_output(&self) -> bool {
        matches!(self, Commands::Log | Commands::GlobalLog)
    }

    fn into_command(self) -> Result<Box<dyn Command>> {
        let command: Box<dyn Command> = match self {
            Commands::Init => Box::new(InitCommand),
            Commands::Add { path } => Box::new(AddCommand::new(path)),
            Commands::Commit { message } => Box::new(CommitCommand::new(message)),
            Commands::Rm { path } => Box::new(RmCommand::new(path)),
            Commands::Log => Box::new(LogCommand),
            Commands::GlobalLog => Box::new(GlobalLogCommand),
            Commands::Find { message } => Box::new(FindCommand::new(message)),
            Commands::Status => Box::new(StatusCommand),
            Commands::Checkout { target, path } => match (target, path) {
                (Some(branch), None) => Box::new(CheckoutCommand::branch(branch)),
                (revision, Some(path)) => Box::new(CheckoutCommand::file(revision, path)),
                (None, None) => return Err(GitletError::IncorrectOperands.into()),
            },
            Commands::Branch { name } => Box::new(BranchCommand::new(name)),
            Commands::RmBranch { name } => Box::new(RmBranchCommand::new(name)),
            Commands::HashObject { write, file } => Box::new(HashObjectCommand::new(file, write)),
            Commands::CatFile { id } => Box::new(CatFileCommand::new(id)),
        };

        Ok(command)
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let pwd = std::env::current_dir()?;
    let pager = (config.pager && cli.command.pages_output()).then(PagerWriter::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(pager.clone()),
        None => Box::new(std::io::stdout()),
    };

    let command = cli.command.into_command()?;
    let repository = Repository::new(&pwd.to_string_lossy(), writer, config)?;
    repository.run(command.as_ref()).await?;
    drop(repository);

    if let Some(pager) = pager {
        pager.page()?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_from_env()?;
    init_tracing(&config);

    match run(cli, config).await {
        Ok(()) => Ok(()),
        Err(error) => match error.downcast_ref::<GitletError>() {
            Some(gitlet_error) => {
                println!("{}", gitlet_error);
                std::process::exit(1);
            }
            None => Err(error),
        },
    }
}
