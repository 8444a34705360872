//! # Statistics Engine — Derived Dashboard Counts
//!
//! Pure roll-up of per-control answers into dashboard numbers: overall
//! counts, an overall compliance percentage, and the same four counts per
//! safeguard category. Recomputed from the record on demand, never
//! persisted, never mutating its input.
//!
//! ## Counting Rules
//!
//! - `complete` counts `yes` answers; `partial` counts `partial`.
//! - `incomplete` merges `no` and `not-started`. The dashboard does not
//!   split them; a finer breakdown would change every percentage shown.
//! - `compliance_percentage = (complete + 0.5 * partial) / total * 100`.
//! - A zero denominator yields `0.0`, never NaN. An empty record reads as
//!   zero percent compliant, and the field stays JSON-serializable.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::assessment::AssessmentData;
use crate::category::SafeguardCategory;
use crate::control::ControlType;
use crate::status::ControlStatus;

/// The four dashboard counts restricted to one safeguard category, plus the
/// category's tier split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryStats {
    /// Controls assigned to this category.
    pub total: usize,
    /// Controls answered `yes`.
    pub complete: usize,
    /// Controls answered `partial`.
    pub partial: usize,
    /// Controls answered `no` or not yet assessed.
    pub incomplete: usize,
    /// Core-tier controls in this category.
    pub core_controls: usize,
    /// Supplemental-tier controls in this category.
    pub supplemental_controls: usize,
}

impl CategoryStats {
    /// Fraction of the category's controls answered `yes`, as a percentage.
    /// An empty category yields `0.0`.
    pub fn completion_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.complete as f64 / self.total as f64 * 100.0
        }
    }
}

/// Derived summary of an assessment record. Ephemeral: recomputed on every
/// state change, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Total control count.
    pub total_controls: usize,
    /// Controls answered `yes`.
    pub complete_controls: usize,
    /// Controls answered `partial`.
    pub partial_controls: usize,
    /// Controls answered `no` or not yet assessed.
    pub incomplete_controls: usize,
    /// Weighted overall percentage: `yes` counts fully, `partial` counts
    /// half.
    pub compliance_percentage: f64,
    /// Per-category breakdown, keyed in canonical category order. All four
    /// categories are present even when empty.
    pub category_stats: BTreeMap<SafeguardCategory, CategoryStats>,
}

/// Roll the record's control statuses up into dashboard statistics.
pub fn compute_stats(data: &AssessmentData) -> DashboardStats {
    let total = data.controls.len();
    let complete = count_status(data, ControlStatus::Yes);
    let partial = count_status(data, ControlStatus::Partial);
    let incomplete = data.controls.iter().filter(|c| c.status.is_incomplete()).count();

    let mut category_stats = BTreeMap::new();
    for category in SafeguardCategory::all() {
        let mut cat = CategoryStats::default();
        for control in data.controls.iter().filter(|c| c.category == *category) {
            cat.total += 1;
            match control.status {
                ControlStatus::Yes => cat.complete += 1,
                ControlStatus::Partial => cat.partial += 1,
                ControlStatus::No | ControlStatus::NotStarted => cat.incomplete += 1,
            }
            match control.control_type {
                ControlType::Core => cat.core_controls += 1,
                ControlType::Supplemental => cat.supplemental_controls += 1,
            }
        }
        category_stats.insert(*category, cat);
    }

    DashboardStats {
        total_controls: total,
        complete_controls: complete,
        partial_controls: partial,
        incomplete_controls: incomplete,
        compliance_percentage: weighted_percentage(complete, partial, total),
        category_stats,
    }
}

fn count_status(data: &AssessmentData, status: ControlStatus) -> usize {
    data.controls.iter().filter(|c| c.status == status).count()
}

fn weighted_percentage(complete: usize, partial: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (complete as f64 + partial as f64 * 0.5) / total as f64 * 100.0
    }
}
