//! # Validation Module
//!
//! Opt-in parameter checks for pricing inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Caller (e.g. pricer-cli)                                              │
//! │  ├── validate_amount() before pricing user input                       │
//! │  └── validate_promo_code() before dispatching                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Strict constructors                                                   │
//! │  ├── PercentageDiscount::try_new() → validate_rate()                   │
//! │  └── FlatDiscount::try_new()       → validate_flat()                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Pricing operations: PERMISSIVE, never validate                        │
//! │  (negative rates, odd codes flow through as plain arithmetic)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricer_core::validation::{validate_amount, validate_rate};
//!
//! assert!(validate_amount(100.0).is_ok());
//! assert!(validate_rate(0.25).is_ok());
//! assert!(validate_rate(1.0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest promo code accepted by [`validate_promo_code`].
pub const MAX_PROMO_CODE_LEN: usize = 32;

// =============================================================================
// Numeric Validators
// =============================================================================

fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a percentage rate.
///
/// ## Rules
/// - Must be finite
/// - Must be in `[0, 1)`: a rate of 1.0 would make everything free
///
/// ## Example
/// ```rust
/// use pricer_core::validation::validate_rate;
///
/// assert!(validate_rate(0.0).is_ok());
/// assert!(validate_rate(0.99).is_ok());
/// assert!(validate_rate(-0.1).is_err());
/// assert!(validate_rate(f64::NAN).is_err());
/// ```
pub fn validate_rate(rate: f64) -> ValidationResult<()> {
    require_finite("rate", rate)?;

    if !(0.0..1.0).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "rate".to_string(),
            min: 0.0,
            max: 1.0,
            value: rate,
        });
    }

    Ok(())
}

/// Validates a flat discount value.
///
/// ## Rules
/// - Must be finite
/// - Must be `>= 0`
pub fn validate_flat(flat: f64) -> ValidationResult<()> {
    require_finite("flat discount", flat)?;

    if flat < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "flat discount".to_string(),
            value: flat,
        });
    }

    Ok(())
}

/// Validates an order amount.
///
/// ## Rules
/// - Must be finite
/// - Must be `>= 0` (zero is a free order)
///
/// ## Example
/// ```rust
/// use pricer_core::validation::validate_amount;
///
/// assert!(validate_amount(0.0).is_ok());
/// assert!(validate_amount(19.99).is_ok());
/// assert!(validate_amount(-1.0).is_err());
/// assert!(validate_amount(f64::INFINITY).is_err());
/// ```
pub fn validate_amount(amount: f64) -> ValidationResult<()> {
    require_finite("amount", amount)?;

    if amount < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
            value: amount,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates the shape of a promo code.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_PROMO_CODE_LEN`] characters
/// - Only `A-Z`, `0-9` and `_`
///
/// A well-formed code is not necessarily a recognized one; unknown codes
/// still fall through the chain unchanged.
pub fn validate_promo_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "promo code".to_string(),
        });
    }

    if code.len() > MAX_PROMO_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "promo code".to_string(),
            max: MAX_PROMO_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "promo code".to_string(),
            reason: "must contain only uppercase letters, digits, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(0.0).is_ok());
        assert!(validate_rate(0.10).is_ok());
        assert!(validate_rate(0.999).is_ok());

        assert!(validate_rate(1.0).is_err());
        assert!(validate_rate(-0.01).is_err());
        assert!(matches!(
            validate_rate(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_flat() {
        assert!(validate_flat(0.0).is_ok());
        assert!(validate_flat(50.0).is_ok());
        assert!(validate_flat(-5.0).is_err());
        assert!(validate_flat(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(100.0).is_ok());
        assert_eq!(
            validate_amount(-0.5),
            Err(ValidationError::MustBeNonNegative {
                field: "amount".to_string(),
                value: -0.5,
            })
        );
    }

    #[test]
    fn test_validate_promo_code() {
        assert!(validate_promo_code("WELCOME").is_ok());
        assert!(validate_promo_code("BLACK_FRIDAY").is_ok());
        assert!(validate_promo_code("SAVE10").is_ok());

        assert!(validate_promo_code("").is_err());
        assert!(validate_promo_code("   ").is_err());
        assert!(validate_promo_code("welcome").is_err());
        assert!(validate_promo_code("BLACK FRIDAY").is_err());
        assert!(matches!(
            validate_promo_code(" WELCOME"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_promo_code(&"A".repeat(40)).is_err());
    }
}
