//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod render;

use clap::{Parser, Subcommand};

use crate::error::Result;

/// Inlay - resolve secret references and inlay them into YAML configs.
#[derive(Parser)]
#[command(
    name = "inlay",
    about = "Resolve secret references and inlay them into YAML configs",
    version,
    after_help = "Fetch once. Redact always."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve secrets and interpolate them into a YAML document
    Render {
        /// Secret references, `locator:OUTPUT_KEY` separated by commas or newlines
        #[arg(short, long, env = "INLAY_SECRETS")]
        secrets: String,

        /// YAML document to interpolate (reads stdin if omitted)
        #[arg(short, long)]
        file: Option<String>,

        /// Write output to this path instead of stdout
        #[arg(short, long, conflicts_with = "in_place")]
        out: Option<String>,

        /// Rewrite the input file in place (requires --file)
        #[arg(long, requires = "file")]
        in_place: bool,

        /// Where secret values come from
        #[arg(long, value_enum, default_value_t = Source::Env)]
        source: Source,

        /// Command to run per locator when --source exec (locator is appended)
        #[arg(long, required_if_eq("source", "exec"))]
        exec_command: Option<String>,

        /// Minimum line length registered for log redaction
        #[arg(long, default_value_t = crate::core::mask::DEFAULT_MIN_MASK_LENGTH)]
        min_mask_length: usize,
    },

    /// Parse a secrets specification and report the references without fetching
    Check {
        /// Secret references, `locator:OUTPUT_KEY` separated by commas or newlines
        #[arg(short, long, env = "INLAY_SECRETS")]
        secrets: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Supported secret value sources.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Source {
    /// Locators are environment variable names
    Env,
    /// Locators are passed to an external command (see --exec-command)
    Exec,
}

/// Dispatch a parsed command.
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Render {
            secrets,
            file,
            out,
            in_place,
            source,
            exec_command,
            min_mask_length,
        } => render::execute(render::RenderArgs {
            secrets,
            file,
            out,
            in_place,
            source,
            exec_command,
            min_mask_length,
        }),
        Command::Check { secrets, json } => check::execute(&secrets, json),
        Command::Completions { shell } => {
            completions::execute(shell);
            Ok(())
        }
    }
}
