//! Vote session state machine
//!
//! Tracks one voter's selection and whether their vote has been committed:
//!
//! ```text
//! NotStarted --select--> Selecting --cast--> Cast
//!      ^                  |   ^               |
//!      |                  +---+ reselect      |
//!      +--------------------- reset ----------+
//! ```
//!
//! The session guarantees the registry sees exactly one increment per
//! session. Once cast, every further selection or cast is rejected with
//! [`CastError::AlreadyCast`] until the
//! [`SessionResetController`](super::SessionResetController) clears it.

use super::CandidateRegistry;
use crate::errors::{CastError, NotFoundError};
use crate::types::{Candidate, CandidateId, SessionState, VoterIdentity};
use crate::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
enum Phase {
    NotStarted,
    Selecting {
        candidate: CandidateId,
    },
    Cast {
        candidate: CandidateId,
        voter: VoterIdentity,
        cast_at: DateTime<Utc>,
    },
}

/// The current voter's session
#[derive(Debug, Clone)]
pub struct VoteSession {
    id: Uuid,
    phase: Phase,
}

impl Default for VoteSession {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteSession {
    /// Start a fresh session with no selection
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: Phase::NotStarted,
        }
    }

    /// Session id for log correlation; changes on every reset
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::NotStarted => SessionState::NotStarted,
            Phase::Selecting { .. } => SessionState::Selecting,
            Phase::Cast { .. } => SessionState::Cast,
        }
    }

    /// The cast flag
    pub fn has_voted(&self) -> bool {
        matches!(self.phase, Phase::Cast { .. })
    }

    /// Currently selected candidate, frozen once cast
    pub fn selection(&self) -> Option<CandidateId> {
        match &self.phase {
            Phase::NotStarted => None,
            Phase::Selecting { candidate } | Phase::Cast { candidate, .. } => Some(*candidate),
        }
    }

    /// Resolve the selection against the registry
    pub fn selected_candidate<'r>(&self, registry: &'r CandidateRegistry) -> Option<&'r Candidate> {
        self.selection().and_then(|id| registry.get(id))
    }

    /// Identity of the voter whose vote was committed
    pub fn voter(&self) -> Option<&VoterIdentity> {
        match &self.phase {
            Phase::Cast { voter, .. } => Some(voter),
            _ => None,
        }
    }

    pub fn cast_at(&self) -> Option<DateTime<Utc>> {
        match &self.phase {
            Phase::Cast { cast_at, .. } => Some(*cast_at),
            _ => None,
        }
    }

    /// Select a candidate, replacing any earlier selection
    pub fn select_candidate(&mut self, registry: &CandidateRegistry, id: CandidateId) -> Result<()> {
        if self.has_voted() {
            tracing::warn!(session = %self.id, candidate = %id, "Selection rejected: vote already cast");
            return Err(CastError::AlreadyCast.into());
        }
        if !registry.contains(id) {
            tracing::warn!(session = %self.id, candidate = %id, "Selection rejected: unknown candidate");
            return Err(NotFoundError { candidate_id: id }.into());
        }

        self.phase = Phase::Selecting { candidate: id };
        tracing::debug!(session = %self.id, candidate = %id, "Candidate selected");
        Ok(())
    }

    /// Check every cast precondition without changing anything
    ///
    /// Returns the candidate that a cast would count for, so a confirmation
    /// prompt can name it.
    pub fn check_cast<'r>(&self, registry: &'r CandidateRegistry) -> Result<&'r Candidate> {
        let candidate = match &self.phase {
            Phase::Cast { .. } => return Err(CastError::AlreadyCast.into()),
            Phase::NotStarted => return Err(CastError::NoCandidateSelected.into()),
            Phase::Selecting { candidate } => *candidate,
        };

        registry
            .get(candidate)
            .ok_or_else(|| NotFoundError { candidate_id: candidate }.into())
    }

    /// Commit the vote for the selected candidate
    ///
    /// On success exactly one counter in `registry` grows by one and the
    /// session freezes. On failure neither the session nor the registry
    /// changes.
    pub fn cast_vote(
        &mut self,
        registry: &mut CandidateRegistry,
        identity: VoterIdentity,
    ) -> Result<()> {
        let candidate = match self.check_cast(registry) {
            Ok(candidate) => candidate.id(),
            Err(e) => {
                tracing::warn!(session = %self.id, voter = %identity.fingerprint(), "Cast rejected: {}", e);
                return Err(e);
            }
        };

        registry.increment_vote(candidate)?;

        tracing::info!(
            session = %self.id,
            voter = %identity.fingerprint(),
            candidate = %candidate,
            "Vote cast"
        );

        self.phase = Phase::Cast {
            candidate,
            voter: identity,
            cast_at: Utc::now(),
        };
        Ok(())
    }

    /// Drop selection and identity and start over under a new id
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }
}
