//! # Season Selector
//!
//! Picks one discount from a fixed table, keyed by season name.
//!
//! ## Selection Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  select_by_season(name)                                                 │
//! │                                                                         │
//! │  name ──► Season::parse (case-insensitive)                              │
//! │              │                                                          │
//! │              ├── SUMMER     ──► Percentage(0.10)                        │
//! │              ├── WINTER     ──► Percentage(0.20)                        │
//! │              ├── CLEARANCE  ──► Flat(50.0)                              │
//! │              └── anything   ──► Percentage(0.0)   (identity)            │
//! │                                                                         │
//! │  Total: an unknown or empty name is a defined outcome, not an error.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::trace;

use crate::adjustment::Discount;
use crate::types::Season;

impl Season {
    /// The discount this season grants.
    pub const fn discount(&self) -> Discount {
        match self {
            Season::Summer => Discount::percentage(0.10),
            Season::Winter => Discount::percentage(0.20),
            Season::Clearance => Discount::flat(50.0),
            Season::Regular => Discount::identity(),
        }
    }
}

/// Returns the discount for a season name.
///
/// ## Example
/// ```rust
/// use pricer_core::{select_by_season, Adjustment};
///
/// assert_eq!(select_by_season("WINTER").apply(100.0), 80.0);
/// assert_eq!(select_by_season("summer").apply(100.0), 90.0);
/// assert_eq!(select_by_season("clearance").apply(120.0), 70.0);
/// assert_eq!(select_by_season("monsoon").apply(100.0), 100.0);
/// ```
pub fn select_by_season(season: &str) -> Discount {
    let resolved = Season::parse(season);
    trace!(input = season, season = %resolved, "season resolved");
    resolved.discount()
}
