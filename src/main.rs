//! Inlay - resolve secret references and inlay them into YAML configs.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use inlay::cli::output;
use inlay::cli::{execute, Cli};
use inlay::error::{Error, ReferenceError, SourceError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("INLAY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("inlay=debug")
        } else {
            EnvFilter::new("inlay=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Reference(ReferenceError::Malformed { .. }) => {
                Some("references look like 'projects/p/secrets/s/versions/1:DB_PASS'")
            }
            Error::Source(SourceError::MissingEnv(_)) => {
                Some("with --source env, each locator must name a set environment variable")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
