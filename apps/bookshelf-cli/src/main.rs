//! bookshelf-isbn
//!
//! Checks ISBNs and book record bodies with the same rules the store applies
//! before accepting a write.

mod commands;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bookshelf_identifiers::{IsbnValidator, ShapePolicy, ValidatorConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bookshelf-isbn", version)]
#[command(about = "Validate ISBN-10/ISBN-13 values and book records")]
struct Cli {
    /// Require a written ISBN shape instead of stripping stray characters
    #[arg(long, global = true)]
    strict: bool,

    /// Validator config file (TOML, or JSON with a .json extension)
    #[arg(long, global = true, env = "BOOKSHELF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check ISBNs given as arguments, or one per line on stdin (exit 1 if any is invalid)
    Check {
        /// ISBNs to check
        isbns: Vec<String>,
        /// Print JSON reports
        #[arg(long)]
        json: bool,
    },
    /// Validate a JSON book body, a single object or an array (exit 1 if any is rejected)
    Books {
        /// JSON file to validate
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let validator = load_validator(cli.config.as_deref(), cli.strict)?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Check { isbns, json } => {
            let inputs = if isbns.is_empty() {
                commands::read_lines(io::stdin().lock())?
            } else {
                isbns
            };
            commands::run_check(&validator, &inputs, json, &mut stdout)
        }
        Commands::Books { file } => commands::run_books(&validator, &file, &mut stdout),
    }
}

fn load_validator(config_path: Option<&Path>, strict: bool) -> Result<IsbnValidator> {
    let mut config = match config_path {
        Some(path) => ValidatorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    if strict {
        config.shape = ShapePolicy::Strict;
    }

    tracing::debug!("Validator config: {:?}", config);
    Ok(IsbnValidator::new(config))
}
