//! # Core Types for the Ballot Engine
//!
//! Plain data shared by the engine components and handed to the
//! presentation layer.
//!
//! ## Type Categories
//!
//! ### Roster
//! - [`CandidateId`]: stable candidate identifier
//! - [`CandidateSpec`]: roster entry as configured, before any votes
//! - [`Candidate`]: roster entry with its live vote counter
//!
//! ### Session
//! - [`VoterIdentity`]: validated voter name and identifier code
//! - [`SessionState`]: the phase of the current voter session
//!
//! ### Results
//! - [`TallyResult`]: totals and percentages, recomputed on every request
//! - [`TallyEntry`]: one candidate's line in a [`TallyResult`]
//!
//! ## Usage Examples
//!
//! ```rust
//! use ballot::types::{CandidateId, CandidateSpec};
//!
//! let spec = CandidateSpec::new(1, "Ana", "Open books for every member");
//! assert_eq!(spec.id, CandidateId::new(1));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Stable identifier of a candidate for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(u32);

impl CandidateId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CandidateId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A roster entry as configured
///
/// Roster files are JSON arrays of these:
///
/// ```json
/// [{ "id": 1, "name": "Ana", "description": "Open books for every member" }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSpec {
    pub id: CandidateId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CandidateSpec {
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: CandidateId::new(id),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A candidate in the registry together with its vote counter
///
/// Only the counter ever changes, and only through the engine: the
/// presentation layer gets read access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    id: CandidateId,
    name: String,
    description: String,
    votes: u64,
}

impl Candidate {
    pub(crate) fn from_spec(spec: CandidateSpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name,
            description: spec.description,
            votes: 0,
        }
    }

    pub fn id(&self) -> CandidateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Votes received in the current session
    pub fn votes(&self) -> u64 {
        self.votes
    }

    pub(crate) fn record_vote(&mut self) {
        self.votes += 1;
    }

    pub(crate) fn clear_votes(&mut self) {
        self.votes = 0;
    }
}

/// A voter identity that has passed validation
///
/// Only [`VoterInputValidator`](crate::engine::VoterInputValidator) can build
/// one, so holding a `VoterIdentity` proves the input was accepted. Both
/// fields are stored trimmed and are wiped from memory when the value is
/// dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct VoterIdentity {
    name: String,
    identifier: String,
}

impl VoterIdentity {
    pub(crate) fn new(name: &str, identifier: &str) -> Self {
        Self {
            name: name.to_string(),
            identifier: identifier.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier code (student number in the original deployment)
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Short, non-reversible tag for log lines
    ///
    /// First 8 hex characters of the Blake3 hash of the identifier code.
    pub fn fingerprint(&self) -> String {
        let digest = blake3::hash(self.identifier.as_bytes());
        hex::encode(&digest.as_bytes()[..4])
    }
}

impl fmt::Debug for VoterIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoterIdentity")
            .field("name", &self.name)
            .field("identifier", &format_args!("<{}>", self.fingerprint()))
            .finish()
    }
}

/// Phase of the current voter session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Fresh session: no selection, nothing cast
    NotStarted,
    /// A candidate is selected, vote not yet committed
    Selecting,
    /// The vote is committed; the session is frozen until reset
    Cast,
}

/// One candidate's line in a [`TallyResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub id: CandidateId,
    pub name: String,
    pub count: u64,
    /// Share of the total in percent, 0.0 when no votes exist
    pub percentage: f64,
}

impl TallyEntry {
    /// Percentage rounded to one decimal place, as results are displayed
    pub fn rounded_percentage(&self) -> f64 {
        (self.percentage * 10.0).round() / 10.0
    }
}

/// Aggregated results, recomputed from the registry on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyResult {
    pub total_votes: u64,
    /// In roster order
    pub per_candidate: Vec<TallyEntry>,
    pub computed_at: DateTime<Utc>,
}

impl TallyResult {
    /// Whether any vote has been recorded
    pub fn has_votes(&self) -> bool {
        self.total_votes > 0
    }

    /// Entry for a given candidate
    pub fn entry(&self, id: CandidateId) -> Option<&TallyEntry> {
        self.per_candidate.iter().find(|e| e.id == id)
    }

    /// Candidates sharing the highest count; empty when nothing was cast
    pub fn leaders(&self) -> Vec<&TallyEntry> {
        let Some(top) = self.per_candidate.iter().map(|e| e.count).max() else {
            return Vec::new();
        };
        if top == 0 {
            return Vec::new();
        }
        self.per_candidate.iter().filter(|e| e.count == top).collect()
    }
}
