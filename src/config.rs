//! Configuration for the ballot engine
//!
//! Loads the candidate roster, validation rules and logging settings from
//! environment variables, with a `.env` file honoured when present.

use crate::types::CandidateSpec;
use crate::{Result, config_error};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::Path;
use tracing::level_filters::LevelFilter;

/// Default minimum identifier length after trimming
pub const DEFAULT_MIN_IDENTIFIER_LENGTH: usize = 8;

/// Candidate roster as configured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterConfig {
    pub candidates: Vec<CandidateSpec>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                CandidateSpec::new(
                    1,
                    "Ahmad Bahlul",
                    "Membangun himpunan yang solid dan inovatif",
                ),
                CandidateSpec::new(
                    2,
                    "Gibraltar Rakasamudra",
                    "Memberdayakan mahasiswa melalui kolaborasi",
                ),
            ],
        }
    }
}

impl RosterConfig {
    /// Parse a JSON array of `{id, name, description}` entries
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let roster = Self::from_json_str(&contents)?;

        tracing::debug!(
            "Loaded {} candidates from {}",
            roster.candidates.len(),
            path.display()
        );
        Ok(roster)
    }
}

/// Voter input rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Minimum identifier length in characters, after trimming
    pub min_identifier_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_identifier_length: DEFAULT_MIN_IDENTIFIER_LENGTH,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub roster: RosterConfig,
    pub rules: ValidationRules,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment
    ///
    /// - `BALLOT_ROSTER_PATH`: JSON roster file (built-in roster if unset)
    /// - `BALLOT_MIN_IDENTIFIER_LENGTH`: default 8, must be at least 1
    /// - `LOG_LEVEL`: default `info`
    /// - `LOG_FORMAT`: `pretty` (default) or `json`
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let roster = match env_var("BALLOT_ROSTER_PATH")? {
            Some(path) => RosterConfig::from_file(&path)
                .map_err(|e| config_error!("Cannot load roster from {}: {}", path, e))?,
            None => RosterConfig::default(),
        };

        let min_identifier_length = match env_var("BALLOT_MIN_IDENTIFIER_LENGTH")? {
            Some(raw) => parse_min_identifier_length(&raw)?,
            None => DEFAULT_MIN_IDENTIFIER_LENGTH,
        };

        let logging = LoggingConfig {
            level: env_var("LOG_LEVEL")?.unwrap_or_else(|| "info".to_string()),
            format: env_var("LOG_FORMAT")?.unwrap_or_else(|| "pretty".to_string()),
        };
        validate_log_level(&logging.level)?;
        validate_log_format(&logging.format)?;

        Ok(Self {
            roster,
            rules: ValidationRules {
                min_identifier_length,
            },
            logging,
        })
    }

    /// Create configuration for testing
    pub fn for_testing() -> Result<Self> {
        Ok(Self {
            roster: RosterConfig::default(),
            rules: ValidationRules::default(),
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: "pretty".to_string(),
            },
        })
    }
}

/// Read an environment variable; unset is `None`, non-UTF-8 is an error
fn env_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(config_error!("{} is not valid UTF-8", name)),
    }
}

fn parse_min_identifier_length(raw: &str) -> Result<usize> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| config_error!("Invalid BALLOT_MIN_IDENTIFIER_LENGTH: {}", raw))?;

    if value == 0 {
        return Err(config_error!("BALLOT_MIN_IDENTIFIER_LENGTH must be at least 1"));
    }
    Ok(value)
}

fn validate_log_level(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map(|_| ()).map_err(|_| {
        config_error!(
            "Invalid LOG_LEVEL: {} (expected off, error, warn, info, debug or trace)",
            level
        )
    })
}

fn validate_log_format(format: &str) -> Result<()> {
    match format {
        "pretty" | "json" => Ok(()),
        other => Err(config_error!("Invalid LOG_FORMAT: {} (expected pretty or json)", other)),
    }
}
