//! Result aggregation
//!
//! Results are recomputed from the registry counters on every request and
//! never stored, so they can never go stale.

use super::CandidateRegistry;
use crate::types::{TallyEntry, TallyResult};
use chrono::Utc;

/// Computes totals and percentages from a registry
pub struct TallyEngine;

impl TallyEngine {
    /// Read the registry and build a fresh [`TallyResult`]
    ///
    /// When nothing has been cast every percentage is 0.0.
    pub fn compute_results(registry: &CandidateRegistry) -> TallyResult {
        let total_votes = registry.total_votes();

        let per_candidate = registry
            .candidates()
            .iter()
            .map(|c| TallyEntry {
                id: c.id(),
                name: c.name().to_string(),
                count: c.votes(),
                percentage: percentage(c.votes(), total_votes),
            })
            .collect();

        tracing::debug!("Tally computed: total_votes={}", total_votes);

        TallyResult {
            total_votes,
            per_candidate,
            computed_at: Utc::now(),
        }
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
