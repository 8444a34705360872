//! # Reset Subcommand
//!
//! Erases the stored assessment so the next load starts from the seed
//! catalog. Destructive, so it refuses to run without `--yes`.

use anyhow::Result;
use clap::Args;

use sra_store::AssessmentStore;

/// Arguments for the reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Confirm erasing all assessment data. This cannot be undone.
    #[arg(long)]
    pub yes: bool,
}

/// Erase the stored assessment.
pub fn run_reset(args: &ResetArgs, store: &AssessmentStore) -> Result<u8> {
    if !args.yes {
        eprintln!("This erases all assessment answers and notes. Re-run with --yes to confirm.");
        return Ok(1);
    }

    store.reset();
    println!("Assessment reset. The next command starts from the full control catalog.");
    Ok(0)
}
