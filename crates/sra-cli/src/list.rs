//! # List Subcommand
//!
//! Lists controls with their current answers, optionally filtered by
//! safeguard category and/or status.

use anyhow::Result;
use clap::Args;

use sra_core::{ControlStatus, SafeguardCategory};
use sra_store::AssessmentStore;

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only controls in this category (administrative, physical,
    /// technical, or documentation).
    #[arg(long)]
    pub category: Option<String>,

    /// Only controls with this status (yes, partial, no, or not-started).
    #[arg(long)]
    pub status: Option<String>,
}

/// Print the (filtered) control list.
pub fn run_list(args: &ListArgs, store: &AssessmentStore) -> Result<u8> {
    let category = args
        .category
        .as_deref()
        .map(str::parse::<SafeguardCategory>)
        .transpose()?;
    let status = args
        .status
        .as_deref()
        .map(str::parse::<ControlStatus>)
        .transpose()?;

    let data = store.load();
    let mut shown = 0usize;
    for control in &data.controls {
        if category.is_some_and(|c| control.category != c) {
            continue;
        }
        if status.is_some_and(|s| control.status != s) {
            continue;
        }
        println!(
            "  {:<8} {:<14} {:<12} {:<11} {}",
            control.id,
            control.category,
            control.control_type,
            control.status,
            control.title,
        );
        shown += 1;
    }
    println!();
    println!("{shown} of {} controls", data.controls.len());

    Ok(0)
}
