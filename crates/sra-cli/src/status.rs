//! # Status Subcommand — Compliance Dashboard
//!
//! Rolls the stored record up into the dashboard view: overall counts, the
//! weighted compliance percentage, and the per-category breakdown.

use anyhow::Result;

use sra_core::compute_stats;
use sra_store::AssessmentStore;

/// Print the compliance dashboard for the stored assessment.
pub fn run_status(store: &AssessmentStore) -> Result<u8> {
    let data = store.load();
    let stats = compute_stats(&data);

    println!("HIPAA Security Risk Assessment (v{})", data.version);
    if let Some(organization) = &data.organization {
        println!("Organization: {organization}");
    }
    if let Some(assessor) = &data.assessor {
        println!("Assessor:     {assessor}");
    }
    if !data.systems.is_empty() {
        println!("Systems:      {}", data.systems.join(", "));
    }
    println!("Created:      {}", data.assessment_date);
    println!("Last saved:   {}", data.last_modified);
    println!();
    println!("  Complete:    {:>3}", stats.complete_controls);
    println!("  Partial:     {:>3}", stats.partial_controls);
    println!("  Incomplete:  {:>3}", stats.incomplete_controls);
    println!("  Total:       {:>3}", stats.total_controls);
    println!();
    println!("  Overall compliance: {:.1}%", stats.compliance_percentage);
    println!();
    println!("Category breakdown:");
    for (category, cat) in &stats.category_stats {
        println!(
            "  {:<38} ({})  {:>2}/{:<2} complete  {:>5.1}%  [{} core, {} supplemental]",
            category.name(),
            category.reference(),
            cat.complete,
            cat.total,
            cat.completion_percentage(),
            cat.core_controls,
            cat.supplemental_controls,
        );
    }

    Ok(0)
}
