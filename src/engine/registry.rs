//! Candidate roster with per-candidate vote counters
//!
//! The roster shape (ids, names, order) is fixed at construction. Counters
//! are the only mutable state and can only be changed from inside the
//! engine: [`VoteSession::cast_vote`](super::VoteSession::cast_vote) adds one
//! vote, [`SessionResetController`](super::SessionResetController) clears
//! them all.

use crate::errors::NotFoundError;
use crate::types::{Candidate, CandidateId, CandidateSpec};
use crate::{Error, Result};
use std::collections::HashSet;

/// Ordered roster of candidates, in registration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRegistry {
    candidates: Vec<Candidate>,
}

impl CandidateRegistry {
    /// Build a registry with every counter at zero
    ///
    /// Fails with [`Error::EmptyRoster`] when no candidates are given and
    /// [`Error::DuplicateCandidate`] when two entries share an id.
    pub fn new(specs: impl IntoIterator<Item = CandidateSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for spec in specs {
            if !seen.insert(spec.id) {
                return Err(Error::DuplicateCandidate(spec.id));
            }
            candidates.push(Candidate::from_spec(spec));
        }

        if candidates.is_empty() {
            return Err(Error::EmptyRoster);
        }

        tracing::debug!("Candidate registry created with {} candidates", candidates.len());
        Ok(Self { candidates })
    }

    /// The roster in registration order, with current counts
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id() == id)
    }

    pub fn contains(&self, id: CandidateId) -> bool {
        self.get(id).is_some()
    }

    /// Sum of all counters
    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(Candidate::votes).sum()
    }

    /// Add exactly one vote to exactly one candidate.
    ///
    /// The registry has no notion of "already voted"; callers guarantee
    /// this runs at most once per session.
    pub(crate) fn increment_vote(&mut self, id: CandidateId) -> std::result::Result<(), NotFoundError> {
        let candidate = self
            .candidates
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(NotFoundError { candidate_id: id })?;

        candidate.record_vote();
        Ok(())
    }

    pub(crate) fn reset_counts(&mut self) {
        for candidate in &mut self.candidates {
            candidate.clear_votes();
        }
    }
}
