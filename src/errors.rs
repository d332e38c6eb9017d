//! Error handling for the ballot engine

use crate::types::CandidateId;

/// Result type alias for the ballot engine
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a proposed voter identity is rejected.
///
/// Checked in declaration order: name, then identifier presence, then
/// identifier length.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("voter name is empty")]
    EmptyName,

    #[error("voter identifier is empty")]
    EmptyIdentifier,

    #[error("voter identifier is shorter than the required minimum")]
    IdentifierTooShort,
}

/// Reasons a vote cannot be committed
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastError {
    #[error("no candidate selected")]
    NoCandidateSelected,

    #[error("a vote has already been cast in this session")]
    AlreadyCast,
}

/// No candidate in the roster carries the requested id
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("candidate {candidate_id} not found")]
pub struct NotFoundError {
    pub candidate_id: CandidateId,
}

/// Main error type for the ballot engine
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Voter identity rejected
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Vote could not be cast
    #[error("Cast rejected: {0}")]
    Cast(#[from] CastError),

    /// Unknown candidate id
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Two roster entries share an id
    #[error("Duplicate candidate id {0} in roster")]
    DuplicateCandidate(CandidateId),

    /// Roster has no candidates
    #[error("Roster must contain at least one candidate")]
    EmptyRoster,

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The cast error carried by this error, if any
    pub fn as_cast(&self) -> Option<CastError> {
        match self {
            Self::Cast(e) => Some(*e),
            _ => None,
        }
    }

    /// The validation error carried by this error, if any
    pub fn as_validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(e) => Some(*e),
            _ => None,
        }
    }
}

/// Convenience macros for creating specific error types
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::Error::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::Error::internal($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::internal(format!($fmt, $($arg)*))
    };
}
