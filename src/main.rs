mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cmd::check::{self, CheckCommandArgs};
use crate::cmd::config as config_cmd;
use crate::cmd::install::{self, InstallCommandArgs};
use crate::config::JiraConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::jira::JiraClient;

#[derive(Parser)]
#[command(
    name = "jig",
    author,
    version,
    about = "Git hook that checks branch names against Jira"
)]
struct Cli {
    /// Show pipeline details instead of errors only.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the current branch name and its Jira issue (the hook entry point).
    Check(CheckArgs),
    /// Install the pre-commit hook into the current repository.
    Install(InstallArgs),
    /// Show the Jira configuration keys (token masked).
    Config,
}

#[derive(Args)]
struct CheckArgs {
    /// Check this branch name instead of asking git.
    #[arg(short, long)]
    branch: Option<String>,
}

#[derive(Args)]
struct InstallArgs {
    /// Overwrite an existing hook.
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = run(cli).await {
        error!("{error}");
        std::process::exit(error.exit_code());
    }
}

/// Errors only by default, as befits a hook; `--verbose` raises the filter
/// and `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let git = Arc::new(GitCli::new(cwd));

    match cli.command.unwrap_or(Commands::Check(CheckArgs { branch: None })) {
        Commands::Check(args) => {
            let jira_config = JiraConfig::load(git.as_ref()).await?;
            let issue_tracker = Arc::new(JiraClient::new(
                jira_config.base_url,
                jira_config.user,
                jira_config.token,
            ));
            let ctx = AppContext::new(git, issue_tracker);

            let outcome = check::run(&ctx, CheckCommandArgs { branch: args.branch }).await?;
            info!(
                "{} branch references issue '{}' ({}), status: {}",
                outcome.branch.category.as_str(),
                outcome.issue.key,
                outcome.issue.summary,
                outcome.issue.status.as_str()
            );
            Ok(())
        }
        Commands::Install(args) => {
            let hook_path =
                install::run(git.as_ref(), InstallCommandArgs { force: args.force }).await?;
            println!("Hook installed at {}", hook_path.display());
            Ok(())
        }
        Commands::Config => config_cmd::run(git.as_ref()).await,
    }
}
