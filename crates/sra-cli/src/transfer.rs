//! # Export / Import / Digest Subcommands
//!
//! Moves the assessment record across the process boundary: dated JSON and
//! CSV export files, validated import of a previously exported record, and
//! the snapshot digest.
//!
//! Import rejection is a user-facing outcome, not an internal failure: the
//! handler prints why the file was refused and exits 1 with the stored
//! record untouched.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use sra_core::{compute_stats, Timestamp};
use sra_export::{
    decode_snapshot, export_csv, export_filename, export_json, import_json, snapshot_digest,
    ExportFormat,
};
use sra_store::{AssessmentStore, Session};

/// Arguments for the export subcommand.
#[derive(Args, Debug)]
#[command(group = clap::ArgGroup::new("format").required(true).multiple(false))]
pub struct ExportArgs {
    /// Write the structured JSON export.
    #[arg(long, group = "format")]
    pub json: bool,

    /// Write the flattened CSV export.
    #[arg(long, group = "format")]
    pub csv: bool,

    /// Directory to write the export file into (defaults to the current
    /// directory).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for the import subcommand.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file previously produced by export.
    pub file: PathBuf,
}

/// Write the dated export file and print its path.
pub fn run_export(args: &ExportArgs, store: &AssessmentStore) -> Result<u8> {
    let data = store.load();

    let (format, text) = if args.csv {
        (ExportFormat::Csv, export_csv(&data))
    } else {
        (ExportFormat::Json, export_json(&data)?)
    };

    let out_dir = args.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    let path = out_dir.join(export_filename(format, &Timestamp::now()));
    std::fs::write(&path, text)
        .with_context(|| format!("failed to write export: {}", path.display()))?;

    println!("Exported assessment to {}", path.display());
    Ok(0)
}

/// Validate an exported record and adopt it as the stored assessment.
pub fn run_import(args: &ImportArgs, store: &AssessmentStore) -> Result<u8> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read import file: {}", args.file.display()))?;

    let imported = match import_json(&text) {
        Ok(imported) => imported,
        Err(e) => {
            eprintln!("{e}");
            return Ok(1);
        }
    };

    let stats = compute_stats(&imported);
    let mut session = Session::open(store.clone());
    session.replace(imported);
    session.save_now();

    println!(
        "Imported assessment: {} controls, {} complete, {:.1}% overall",
        stats.total_controls, stats.complete_controls, stats.compliance_percentage
    );
    Ok(0)
}

/// Print the snapshot digest and its decoded summary fields.
pub fn run_digest(store: &AssessmentStore) -> Result<u8> {
    let data = store.load();
    let digest = snapshot_digest(&data)?;
    println!("{digest}");

    if let Ok(snapshot) = decode_snapshot(&digest) {
        println!();
        println!("  date:       {}", snapshot.date);
        println!("  version:    {}", snapshot.version);
        println!("  controls:   {}", snapshot.control_count);
        println!("  completed:  {}", snapshot.completed_count);
    }
    Ok(0)
}
