//! # sra CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; every handler returns an exit code, and
//! handler errors are logged and mapped to exit code 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sra_cli::edit::{run_notes, run_set, NotesArgs, SetArgs};
use sra_cli::list::{run_list, ListArgs};
use sra_cli::reset::{run_reset, ResetArgs};
use sra_cli::status::run_status;
use sra_cli::transfer::{run_digest, run_export, run_import, ExportArgs, ImportArgs};
use sra_store::{AssessmentStore, STORE_FILE_NAME};

/// HIPAA Security Risk Assessment toolkit.
///
/// Self-score a small healthcare organization against the Security Rule
/// control catalog, keep the answers in a local data file, and export or
/// import the record as JSON/CSV.
#[derive(Parser, Debug)]
#[command(name = "sra", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the assessment data file.
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the compliance dashboard: overall and per-category progress.
    Status,

    /// List controls with their current answers.
    List(ListArgs),

    /// Set a control's self-scored status.
    Set(SetArgs),

    /// Set a control's free-text notes.
    Notes(NotesArgs),

    /// Write a dated JSON or CSV export file.
    Export(ExportArgs),

    /// Validate and adopt a previously exported JSON record.
    Import(ImportArgs),

    /// Erase the stored assessment and start over.
    Reset(ResetArgs),

    /// Print the snapshot digest of the stored assessment.
    Digest,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let data_file = cli.data_file.unwrap_or_else(default_data_file);
    tracing::debug!(data_file = %data_file.display(), "resolved assessment data file");
    let store = AssessmentStore::new(data_file);

    let result = match cli.command {
        Commands::Status => run_status(&store),
        Commands::List(args) => run_list(&args, &store),
        Commands::Set(args) => run_set(&args, &store),
        Commands::Notes(args) => run_notes(&args, &store),
        Commands::Export(args) => run_export(&args, &store),
        Commands::Import(args) => run_import(&args, &store),
        Commands::Reset(args) => run_reset(&args, &store),
        Commands::Digest => run_digest(&store),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Default location of the assessment data file: the platform data
/// directory, falling back to the current directory.
fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("hipaa-sra").join(STORE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME))
}
