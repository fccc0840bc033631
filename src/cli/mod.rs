//! Command-line interface.

pub mod completions;
pub mod diff;
pub mod edit;
pub mod list;
pub mod names;
pub mod output;
pub mod prompt;
pub mod view;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{Config, Settings};
use crate::core::constants;
use crate::core::domain::{Action, CommandConfig, Env};
use crate::core::store::Gcloud;
use crate::error::Result;

/// gsm - manage Google Secret Manager secrets shaped for External Secrets Operator.
#[derive(Parser)]
#[command(
    name = "gsm",
    about = "Edit, view, list and diff GSM secrets named {env}-gke-{secret}-secrets",
    version,
    arg_required_else_help = true,
    after_help = "Set EDITOR to use your preferred editor (default: vi), e.g. EDITOR=\"code --wait\"."
)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Project and environment shared by every command.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// GCP project id
    #[arg(short, long)]
    pub project: String,

    /// Secret environment
    #[arg(short, long, value_enum)]
    pub env: Env,
}

/// Secret selector.
#[derive(Args, Debug, Clone)]
pub struct Select {
    /// Custom secret identifier
    #[arg(short, long, default_value = constants::DEFAULT_SECRET_ID)]
    pub secret: String,

    /// Version of the secret to select
    #[arg(short = 'v', long, default_value = constants::DEFAULT_VERSION)]
    pub version: String,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Edit a secret, creating it if it does not exist
    Edit {
        #[command(flatten)]
        target: Target,
        #[command(flatten)]
        select: Select,
    },

    /// Display secret content in the terminal
    View {
        #[command(flatten)]
        target: Target,
        #[command(flatten)]
        select: Select,
    },

    /// List the versions of a managed secret
    List {
        #[command(flatten)]
        target: Target,
        /// Custom secret identifier
        #[arg(short, long, default_value = constants::DEFAULT_SECRET_ID)]
        secret: String,
    },

    /// Display managed secret names
    Names {
        #[command(flatten)]
        target: Target,
    },

    /// Display differences between secret versions
    Diff {
        #[command(flatten)]
        target: Target,
        /// Custom secret identifier
        #[arg(short, long, default_value = constants::DEFAULT_SECRET_ID)]
        secret: String,
        /// Version to compare
        version_a: String,
        /// Other version to compare
        version_b: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl Command {
    /// Parsed configuration for secret commands; `None` for `completions`.
    pub fn config(&self) -> Option<CommandConfig> {
        let (action, target, secret_id, version, compare) = match self {
            Command::Edit { target, select } => (
                Action::Edit,
                target,
                Some(select.secret.clone()),
                Some(select.version.clone()),
                None,
            ),
            Command::View { target, select } => (
                Action::View,
                target,
                Some(select.secret.clone()),
                Some(select.version.clone()),
                None,
            ),
            Command::List { target, secret } => {
                (Action::List, target, Some(secret.clone()), None, None)
            }
            Command::Names { target } => (Action::Names, target, None, None, None),
            Command::Diff {
                target,
                secret,
                version_a,
                version_b,
            } => (
                Action::Diff,
                target,
                Some(secret.clone()),
                None,
                Some((version_a.clone(), version_b.clone())),
            ),
            Command::Completions { .. } => return None,
        };
        Some(CommandConfig {
            action,
            project_id: target.project.clone(),
            env: target.env,
            secret_id,
            version,
            compare,
        })
    }
}

/// Load settings and locate the secret store tool.
fn connect() -> Result<(Settings, Gcloud)> {
    let settings = Config::load()?.settings()?;
    let store = Gcloud::new(&settings.gcloud, settings.not_found_codes.clone())?;
    Ok((settings, store))
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    let Some(config) = command.config() else {
        if let Command::Completions { shell } = command {
            return completions::execute(shell);
        }
        return Ok(());
    };
    let (settings, store) = connect()?;

    match config.action {
        Action::Edit => edit::execute(&store, &settings, &config),
        Action::View => view::execute(&store, &config),
        Action::List => list::execute(&store, &config),
        Action::Names => names::execute(&store, &config),
        Action::Diff => diff::execute(&store, &config),
    }
}
