//! # Domain Types
//!
//! Shared types used by every pricing mechanism.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │     Amount      │   │     Season      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  f64, no unit   │   │  Summer         │                             │
//! │  │  no rounding    │   │  Winter         │                             │
//! │  │                 │   │  Clearance      │                             │
//! │  │                 │   │  Regular (else) │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parsing Names
//! Every discriminator is matched on the text exactly as given; surrounding
//! whitespace is never trimmed.
//!
//! | Discriminator              | Case        | Unknown name          |
//! |----------------------------|-------------|-----------------------|
//! | [`Season`] (incl. serde)   | insensitive | `Regular`             |
//! | [`crate::Layer`]           | insensitive | `UnknownLayer` error  |
//! | promo code                 | exact       | falls through chain   |

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Amount
// =============================================================================

/// A monetary amount.
///
/// Plain `f64`: there is no currency unit and no rounding rule beyond native
/// floating-point semantics. Display formatting is left to callers.
pub type Amount = f64;

// =============================================================================
// Season
// =============================================================================

/// A promotional season, the discriminator of the season selector.
///
/// Any name that is not a known season resolves to [`Season::Regular`], so
/// parsing can never fail.
///
/// Serializes as the canonical upper-case name. Deserializes through
/// [`Season::parse`], so any casing is accepted and unknown names become
/// `Regular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum Season {
    /// 10% off.
    Summer,
    /// 20% off.
    Winter,
    /// Flat 50 off, floored at zero.
    Clearance,
    /// No promotion; the identity adjustment.
    Regular,
}

impl Season {
    /// Resolves a season name, ignoring case.
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::Season;
    ///
    /// assert_eq!(Season::parse("summer"), Season::Summer);
    /// assert_eq!(Season::parse("SuMmEr"), Season::Summer);
    /// assert_eq!(Season::parse(""), Season::Regular);
    /// assert_eq!(Season::parse("spring"), Season::Regular);
    /// ```
    pub fn parse(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "SUMMER" => Season::Summer,
            "WINTER" => Season::Winter,
            "CLEARANCE" => Season::Clearance,
            _ => Season::Regular,
        }
    }

    /// Canonical upper-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "SUMMER",
            Season::Winter => "WINTER",
            Season::Clearance => "CLEARANCE",
            Season::Regular => "REGULAR",
        }
    }
}

impl Default for Season {
    fn default() -> Self {
        Season::Regular
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Season {
    fn from(name: &str) -> Self {
        Season::parse(name)
    }
}

impl From<String> for Season {
    fn from(name: String) -> Self {
        Season::parse(&name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_is_case_insensitive() {
        assert_eq!(Season::parse("winter"), Season::Winter);
        assert_eq!(Season::parse("WINTER"), Season::Winter);
        assert_eq!(Season::parse("Clearance"), Season::Clearance);
    }

    #[test]
    fn test_season_parse_unknown_is_regular() {
        assert_eq!(Season::parse("autumn"), Season::Regular);
        assert_eq!(Season::parse(""), Season::Regular);
        // Whitespace is not trimmed
        assert_eq!(Season::parse(" SUMMER"), Season::Regular);
    }

    #[test]
    fn test_season_default() {
        assert_eq!(Season::default(), Season::Regular);
    }

    #[test]
    fn test_season_display_and_serde() {
        assert_eq!(Season::Clearance.to_string(), "CLEARANCE");

        let json = serde_json::to_string(&Season::Winter).unwrap();
        assert_eq!(json, "\"WINTER\"");
        let back: Season = serde_json::from_str("\"SUMMER\"").unwrap();
        assert_eq!(back, Season::Summer);
    }

    #[test]
    fn test_season_deserialize_matches_parse() {
        let lower: Season = serde_json::from_str("\"summer\"").unwrap();
        assert_eq!(lower, Season::Summer);
        let mixed: Season = serde_json::from_str("\"Winter\"").unwrap();
        assert_eq!(mixed, Season::Winter);
        let unknown: Season = serde_json::from_str("\"monsoon\"").unwrap();
        assert_eq!(unknown, Season::Regular);
        let padded: Season = serde_json::from_str("\" SUMMER\"").unwrap();
        assert_eq!(padded, Season::Regular);

        assert!(serde_json::from_str::<Season>("42").is_err());
    }
}
