//! # CLI Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Flow
//! ```text
//! ValidationError ──┐
//!                   ├──► CliError ──► main: "error: ..." on stderr, exit code
//! PricingError ─────┤
//! serde_json::Error ┘
//! ```

use pricer_core::{PricingError, ValidationError};
use thiserror::Error;

/// Errors a CLI command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input rejected before pricing (e.g. negative amount).
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Input could not be turned into pricing rules (e.g. unknown layer).
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Quote could not be encoded as JSON.
    #[error("Failed to encode quote: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// - `2`: bad input (same code clap uses for usage errors)
    /// - `1`: anything else
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) | CliError::Pricing(_) => 2,
            CliError::Json(_) => 1,
        }
    }
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
