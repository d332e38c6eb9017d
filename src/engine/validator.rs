//! Voter identity validation
//!
//! Pure checks on the name and identifier code typed by the voter. The only
//! rule on the identifier is a minimum length after trimming; no format or
//! charset check is applied.

use crate::config::ValidationRules;
use crate::errors::ValidationError;
use crate::types::VoterIdentity;

/// Validates proposed voter identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoterInputValidator {
    rules: ValidationRules,
}

impl VoterInputValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> ValidationRules {
        self.rules
    }

    /// Check name and identifier, returning the trimmed identity
    ///
    /// Rules run in order: empty name, empty identifier, identifier too
    /// short. Lengths are counted in characters.
    pub fn validate(&self, name: &str, identifier: &str) -> Result<VoterIdentity, ValidationError> {
        let name = name.trim();
        let identifier = identifier.trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if identifier.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        if identifier.chars().count() < self.rules.min_identifier_length {
            return Err(ValidationError::IdentifierTooShort);
        }

        Ok(VoterIdentity::new(name, identifier))
    }
}

/// Validate with the default rules
pub fn validate_identity(name: &str, identifier: &str) -> Result<VoterIdentity, ValidationError> {
    VoterInputValidator::default().validate(name, identifier)
}
