//! # pricer-core: Pure Pricing Rules for Pricer
//!
//! This crate computes the final price of an order from a base amount and a
//! set of pluggable adjustments. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricer Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pricer-cli (thin caller)                     │   │
//! │  │      season ──► promo ──► stack ──► legacy   (print quotes)     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pricer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │adjustment │  │ selector  │  │   chain   │  │ decorator │  │   │
//! │  │   │ Discount  │  │  Season   │  │ PromoRule │  │ BasePrice │  │   │
//! │  │   │ apply()   │  │ ──► table │  │ first hit │  │ Tax / VIP │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`adjustment`] - The `Adjustment` capability and the two discount variants
//! - [`selector`] - Season name ──► discount table
//! - [`chain`] - Promo code dispatch, first match wins
//! - [`decorator`] - Price stacks built by wrapping (tax, membership rebate)
//! - [`calculator`] - The monolithic calculator the pluggable rules replace
//! - [`validation`] - Opt-in parameter checks
//! - [`types`] - Shared domain types (`Amount`, `Season`)
//! - [`error`] - Error types
//!
//! ## Composition Shapes
//! ```text
//!   select:  "winter" ──► Season::Winter ──► Percentage(0.20) ──► apply(a)
//!
//!   chain:   (a, "WELCOME") ──► BLACK_FRIDAY? no ──► WELCOME? yes ──► a × 0.90
//!
//!   stack:   Membership( Tax( Base(a) ) ) ──► (a × 1.05) − 20
//! ```
//!
//! Ordering is always chosen by the caller and is never rearranged:
//! percentage-then-flat is not flat-then-percentage.
//!
//! ## Example Usage
//!
//! ```rust
//! use pricer_core::{select_by_season, Adjustment, PromoChain};
//! use pricer_core::decorator::{BasePrice, MembershipDecorator, PriceComponent, TaxDecorator};
//!
//! let winter = select_by_season("winter");
//! assert_eq!(winter.apply(100.0), 80.0);
//!
//! let chain = PromoChain::standard();
//! assert_eq!(chain.process(100.0, "WELCOME"), 90.0);
//!
//! let stacked = MembershipDecorator::new(TaxDecorator::new(BasePrice::new(100.0)));
//! assert!((stacked.price() - 85.0).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod adjustment;
pub mod calculator;
pub mod chain;
pub mod decorator;
pub mod error;
pub mod selector;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use adjustment::{Adjustment, Discount, DiscountContext, FlatDiscount, PercentageDiscount};
pub use chain::{PromoChain, PromoRule};
pub use decorator::{Layer, PriceComponent};
pub use error::{PricingError, PricingResult, ValidationError};
pub use selector::select_by_season;
pub use types::{Amount, Season};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Multiplier applied by the tax decorator (5% sales tax).
pub const TAX_MULTIPLIER: f64 = 1.05;

/// Flat amount subtracted by the membership decorator.
///
/// Not floored at zero: a stack whose inner price is below this value
/// produces a negative result.
pub const MEMBERSHIP_REBATE: f64 = 20.0;

/// Promo code recognized by the first link of the standard chain.
pub const BLACK_FRIDAY_CODE: &str = "BLACK_FRIDAY";

/// Promo code recognized by the second link of the standard chain.
pub const WELCOME_CODE: &str = "WELCOME";
