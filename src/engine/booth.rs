//! Entry point for the presentation layer
//!
//! [`VotingBooth`] owns the registry and the current session together and
//! exposes the operations a voting screen needs. Every operation runs to
//! completion before returning, and a rejected operation leaves all state
//! untouched.
//!
//! [`SharedBooth`] wraps a booth in one mutex for hosts that drive it from
//! more than one thread; cast and reset are then serialized against each
//! other and against reads.

use super::{
    CandidateRegistry, SessionResetController, TallyEngine, VoteSession, VoterInputValidator,
};
use crate::config::{Config, ValidationRules};
use crate::errors::ValidationError;
use crate::types::{Candidate, CandidateId, SessionState, TallyResult, VoterIdentity};
use crate::{Result, internal_error};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Registry, session and validator for one voting station
#[derive(Debug, Clone)]
pub struct VotingBooth {
    registry: CandidateRegistry,
    session: VoteSession,
    validator: VoterInputValidator,
}

impl VotingBooth {
    pub fn new(registry: CandidateRegistry, rules: ValidationRules) -> Self {
        let session = VoteSession::new();
        tracing::info!(
            session = %session.id(),
            candidates = registry.candidates().len(),
            "Voting booth opened"
        );

        Self {
            registry,
            session,
            validator: VoterInputValidator::new(rules),
        }
    }

    /// Build a booth from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = CandidateRegistry::new(config.roster.candidates.clone())?;
        Ok(Self::new(registry, config.rules))
    }

    /// Roster in registration order with current counts
    pub fn list_candidates(&self) -> &[Candidate] {
        self.registry.candidates()
    }

    pub fn select_candidate(&mut self, id: CandidateId) -> Result<()> {
        self.session.select_candidate(&self.registry, id)
    }

    pub fn validate_identity(
        &self,
        name: &str,
        identifier: &str,
    ) -> std::result::Result<VoterIdentity, ValidationError> {
        self.validator.validate(name, identifier).inspect_err(|e| {
            tracing::warn!(session = %self.session.id(), "Identity rejected: {}", e);
        })
    }

    /// Check that a cast would succeed and name the candidate it would count for
    ///
    /// Nothing changes; a declined confirmation simply never calls
    /// [`cast_vote`](Self::cast_vote).
    pub fn prepare_vote(&self) -> Result<&Candidate> {
        self.session.check_cast(&self.registry).inspect_err(|e| {
            tracing::warn!(session = %self.session.id(), "Vote preview rejected: {}", e);
        })
    }

    pub fn cast_vote(&mut self, identity: VoterIdentity) -> Result<()> {
        self.session.cast_vote(&mut self.registry, identity)
    }

    pub fn compute_results(&self) -> TallyResult {
        TallyEngine::compute_results(&self.registry)
    }

    pub fn reset(&mut self) {
        SessionResetController::reset(&mut self.registry, &mut self.session);
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn has_voted(&self) -> bool {
        self.session.has_voted()
    }

    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.session.selected_candidate(&self.registry)
    }

    /// Voter whose vote was committed in this session
    pub fn voter(&self) -> Option<&VoterIdentity> {
        self.session.voter()
    }

    pub fn session(&self) -> &VoteSession {
        &self.session
    }

    pub fn session_id(&self) -> Uuid {
        self.session.id()
    }
}

/// A [`VotingBooth`] behind a single mutex
#[derive(Debug, Clone)]
pub struct SharedBooth {
    inner: Arc<Mutex<VotingBooth>>,
}

impl SharedBooth {
    pub fn new(booth: VotingBooth) -> Self {
        Self {
            inner: Arc::new(Mutex::new(booth)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, VotingBooth>> {
        self.inner
            .lock()
            .map_err(|_| internal_error!("Voting booth lock poisoned"))
    }

    /// Run several operations under one lock acquisition
    pub fn with<R>(&self, f: impl FnOnce(&mut VotingBooth) -> R) -> Result<R> {
        let mut booth = self.lock()?;
        Ok(f(&mut booth))
    }

    pub fn list_candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.lock()?.list_candidates().to_vec())
    }

    pub fn select_candidate(&self, id: CandidateId) -> Result<()> {
        self.lock()?.select_candidate(id)
    }

    pub fn validate_identity(&self, name: &str, identifier: &str) -> Result<VoterIdentity> {
        Ok(self.lock()?.validate_identity(name, identifier)?)
    }

    pub fn cast_vote(&self, identity: VoterIdentity) -> Result<()> {
        self.lock()?.cast_vote(identity)
    }

    pub fn compute_results(&self) -> Result<TallyResult> {
        Ok(self.lock()?.compute_results())
    }

    pub fn reset(&self) -> Result<()> {
        self.lock()?.reset();
        Ok(())
    }

    pub fn state(&self) -> Result<SessionState> {
        Ok(self.lock()?.state())
    }
}
