//! Per-user application statistics.

pub mod handlers;

use serde::Serialize;

/// Status counts for one user's applications. `applied` folds both the
/// "applied" and "success" statuses; values outside the taxonomy count
/// toward the total only, so pending + applied + failed <= total.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationStats {
    pub total: u64,
    pub pending: u64,
    pub applied: u64,
    pub failed: u64,
}

/// Folds raw status values into counts in one linear pass. Input order does
/// not matter; an empty input yields all zeros.
pub fn fold_counts<'a, I>(statuses: I) -> ApplicationStats
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stats = ApplicationStats::default();
    for status in statuses {
        stats.total += 1;
        match status {
            "pending" => stats.pending += 1,
            "applied" | "success" => stats.applied += 1,
            "failed" => stats.failed += 1,
            _ => {}
        }
    }
    stats
}
