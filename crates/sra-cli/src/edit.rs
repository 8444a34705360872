//! # Set / Notes Subcommands
//!
//! Mutation entry points: set a control's self-scored status or its notes.
//! Both route through the session so the record is persisted through the
//! store, then print the updated overall percentage.

use anyhow::Result;
use clap::Args;

use sra_core::{ControlId, ControlStatus};
use sra_store::{AssessmentStore, Session};

/// Arguments for the set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Control id (e.g., tec-01).
    pub id: String,

    /// New status: yes, partial, no, or not-started.
    pub status: String,
}

/// Arguments for the notes subcommand.
#[derive(Args, Debug)]
pub struct NotesArgs {
    /// Control id (e.g., tec-01).
    pub id: String,

    /// Replacement notes text.
    pub notes: String,
}

/// Set a control's status and persist the record.
pub fn run_set(args: &SetArgs, store: &AssessmentStore) -> Result<u8> {
    let status: ControlStatus = args.status.parse()?;
    let id = ControlId::new(args.id.as_str());

    let mut session = Session::open(store.clone());
    session.set_status(&id, status)?;
    session.save_now();

    if let Some(control) = session.data().control(&id) {
        println!("{}: {} -> {}", control.id, control.title, control.status);
    }
    println!(
        "Overall compliance: {:.1}%",
        session.stats().compliance_percentage
    );

    Ok(0)
}

/// Set a control's notes and persist the record.
pub fn run_notes(args: &NotesArgs, store: &AssessmentStore) -> Result<u8> {
    let id = ControlId::new(args.id.as_str());

    let mut session = Session::open(store.clone());
    session.set_notes(&id, args.notes.as_str())?;
    session.save_now();

    println!("{}: notes updated", id);

    Ok(0)
}
