//! Full reset of counters and session
//!
//! Both halves are reset under a single pair of exclusive borrows, so no
//! caller can observe counters cleared while a stale selection survives,
//! or the reverse.

use super::{CandidateRegistry, VoteSession};

/// Restores registry and session to their initial state
pub struct SessionResetController;

impl SessionResetController {
    /// Zero every counter and return the session to `NotStarted`
    ///
    /// Any held voter identity is dropped and wiped.
    pub fn reset(registry: &mut CandidateRegistry, session: &mut VoteSession) {
        let previous = session.id();
        let discarded_votes = registry.total_votes();

        registry.reset_counts();
        session.clear();

        tracing::info!(
            previous_session = %previous,
            session = %session.id(),
            discarded_votes,
            "Voting reset"
        );
    }
}
