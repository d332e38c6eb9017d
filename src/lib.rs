//! Single-session election engine
//!
//! Records one voter's identity, lets them pick exactly one candidate from a
//! fixed roster, and reports aggregate results. Rendering, dialogs and
//! assets belong to the caller.

pub mod config;
pub mod engine;
pub mod errors;
pub mod types;

// Re-export commonly used types
pub use engine::{SharedBooth, VotingBooth};
pub use errors::{CastError, Error, NotFoundError, Result, ValidationError};

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with `RUST_LOG`, falling back to `ballot=info`
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "ballot=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| internal_error!("Logging already initialized: {}", e))?;

    tracing::info!("🗳️  Ballot engine v{} initialized", VERSION);
    Ok(())
}

/// Initialize logging from configuration
pub fn init_with(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(format!("ballot={}", logging.level))
        .map_err(|e| config_error!("Invalid LOG_LEVEL {}: {}", logging.level, e))?;

    let installed = match logging.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .try_init(),
    };
    installed.map_err(|e| internal_error!("Logging already initialized: {}", e))?;

    tracing::info!(format = %logging.format, "🗳️  Ballot engine v{} initialized", VERSION);
    Ok(())
}
