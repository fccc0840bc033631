//! gsm - edit, view, list and diff Google Secret Manager secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gsm::cli::output;
use gsm::cli::{execute, Cli};
use gsm::error::{ConfigError, EditError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("GSM_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gsm=debug")
        } else {
            EnvFilter::new("gsm=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Store(StoreError::ToolMissing(_)) => {
                Some("install the Google Cloud SDK or set GSM_GCLOUD")
            }
            Error::Store(StoreError::NotFound { .. }) => {
                Some("check the project, environment, secret and version")
            }
            Error::Edit(EditError::EditorMissing(_)) => Some("set EDITOR to an installed editor"),
            Error::Config(ConfigError::Missing(_)) => Some("unset GSM_CONFIG or create the file"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
