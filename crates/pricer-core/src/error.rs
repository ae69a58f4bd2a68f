//! # Error Types
//!
//! Error types for pricer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricer-core errors (this file)                                        │
//! │  ├── PricingError     - Layer names, strict constructors               │
//! │  └── ValidationError  - Opt-in parameter checks                        │
//! │                                                                         │
//! │  pricer-cli errors (separate crate)                                    │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → CliError → stderr              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Never Errors
//! The pricing operations themselves are total. `apply`, `select_by_season`,
//! `PromoChain::process` and `PriceComponent::price` accept any input and
//! return a number. Errors only exist for callers that opt into validation
//! or parse a layer name from text.

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors raised while turning caller input into pricing rules.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A decorator layer name did not match any known layer.
    ///
    /// ## When This Occurs
    /// - `"tax"` / `"membership"` misspelled on the command line
    /// - A layer that only exists in a newer version
    #[error("Unknown price layer: {0}")]
    UnknownLayer(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Parameter validation errors.
///
/// Returned by the strict constructors and the helpers in
/// [`crate::validation`]. The permissive constructors never produce these.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is outside its half-open range `[min, max)`.
    #[error("{field} must be in [{min}, {max}), got {value}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Value must not be negative.
    #[error("{field} must not be negative, got {value}")]
    MustBeNonNegative { field: String, value: f64 },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g. lowercase promo code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
