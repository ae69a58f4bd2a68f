//! # Adjustment Module
//!
//! The leaf abstraction of the crate: an adjustment maps an amount to a new
//! amount. Everything else (season selection, promo chains, price stacks)
//! composes adjustments.
//!
//! ## Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Adjustment Capability                                │
//! │                                                                         │
//! │   trait Adjustment { fn apply(&self, amount) -> amount }               │
//! │                                                                         │
//! │   ┌──────────────────────┐  ┌──────────────────────┐  ┌─────────────┐  │
//! │   │ PercentageDiscount   │  │ FlatDiscount         │  │ Fn(f64)->f64│  │
//! │   │ a × (1 − rate)       │  │ max(0, a − flat)     │  │ any closure │  │
//! │   └──────────┬───────────┘  └──────────┬───────────┘  └─────────────┘  │
//! │              └───────────┬─────────────┘                                │
//! │                          ▼                                              │
//! │              enum Discount { Percentage, Flat }                         │
//! │              (what the selector and the chain hand out)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All variants are immutable after construction, so a single instance can
//! be reused for any number of calls and shared between threads.
//!
//! ## Usage
//! ```rust
//! use pricer_core::{Adjustment, FlatDiscount, PercentageDiscount};
//!
//! let summer = PercentageDiscount::new(0.10);
//! assert_eq!(summer.apply(100.0), 90.0);
//!
//! let clearance = FlatDiscount::new(50.0);
//! assert_eq!(clearance.apply(30.0), 0.0); // floored, never negative
//!
//! // Order matters: percentage-then-flat is not flat-then-percentage
//! let a = PercentageDiscount::new(0.5).then(FlatDiscount::new(10.0));
//! let b = FlatDiscount::new(10.0).then(PercentageDiscount::new(0.5));
//! assert_eq!(a.apply(100.0), 40.0);
//! assert_eq!(b.apply(100.0), 45.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PricingResult;
use crate::types::Amount;
use crate::validation::{validate_flat, validate_rate};

// =============================================================================
// Adjustment Trait
// =============================================================================

/// A pricing adjustment: a pure function from an amount to an adjusted amount.
///
/// Implementations must not read or mutate shared state; the result depends
/// only on `amount` and the adjustment's own fixed parameters.
pub trait Adjustment {
    /// Applies the adjustment to `amount`.
    fn apply(&self, amount: Amount) -> Amount;

    /// Chains `next` after this adjustment: `next.apply(self.apply(a))`.
    fn then<B>(self, next: B) -> Then<Self, B>
    where
        Self: Sized,
        B: Adjustment,
    {
        Then {
            first: self,
            second: next,
        }
    }
}

/// Any `Fn(Amount) -> Amount` closure is an adjustment.
impl<F> Adjustment for F
where
    F: Fn(Amount) -> Amount,
{
    #[inline]
    fn apply(&self, amount: Amount) -> Amount {
        self(amount)
    }
}

// =============================================================================
// Percentage Discount
// =============================================================================

/// Takes a fraction off the amount: `a × (1 − rate)`.
///
/// The rate is expected in `[0, 1)` but [`PercentageDiscount::new`] does not
/// enforce it; a negative rate is a surcharge. Use
/// [`PercentageDiscount::try_new`] to reject out-of-range rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageDiscount {
    rate: f64,
}

impl PercentageDiscount {
    /// Creates a percentage discount without checking the rate.
    #[inline]
    pub const fn new(rate: f64) -> Self {
        PercentageDiscount { rate }
    }

    /// Creates a percentage discount, rejecting rates outside `[0, 1)`.
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::PercentageDiscount;
    ///
    /// assert!(PercentageDiscount::try_new(0.20).is_ok());
    /// assert!(PercentageDiscount::try_new(1.20).is_err());
    /// ```
    pub fn try_new(rate: f64) -> PricingResult<Self> {
        validate_rate(rate)?;
        Ok(PercentageDiscount { rate })
    }

    /// The fraction taken off.
    #[inline]
    pub const fn rate(&self) -> f64 {
        self.rate
    }
}

impl Adjustment for PercentageDiscount {
    #[inline]
    fn apply(&self, amount: Amount) -> Amount {
        amount * (1.0 - self.rate)
    }
}

// =============================================================================
// Flat Discount
// =============================================================================

/// Takes a fixed value off the amount, floored at zero: `max(0, a − flat)`.
///
/// A NaN amount or NaN flat value yields NaN; the floor never turns it into
/// a zero price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatDiscount {
    flat: f64,
}

impl FlatDiscount {
    /// Creates a flat discount without checking the value.
    #[inline]
    pub const fn new(flat: f64) -> Self {
        FlatDiscount { flat }
    }

    /// Creates a flat discount, rejecting negative or non-finite values.
    pub fn try_new(flat: f64) -> PricingResult<Self> {
        validate_flat(flat)?;
        Ok(FlatDiscount { flat })
    }

    /// The value taken off.
    #[inline]
    pub const fn flat(&self) -> f64 {
        self.flat
    }
}

impl Adjustment for FlatDiscount {
    #[inline]
    fn apply(&self, amount: Amount) -> Amount {
        let reduced = amount - self.flat;
        // f64::max would swallow NaN
        if reduced.is_nan() {
            reduced
        } else {
            reduced.max(0.0)
        }
    }
}

// =============================================================================
// Discount (tagged variant)
// =============================================================================

/// One of the two canonical discounts.
///
/// This is the value handed out by the season selector and stored in promo
/// chain rules. Callers compare discounts by behavior (`apply`), though the
/// variant is public for matching and serialization.
///
/// ## Serialization
/// ```json
/// { "kind": "percentage", "rate": 0.2 }
/// { "kind": "flat", "flat": 50.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discount {
    /// See [`PercentageDiscount`].
    Percentage(PercentageDiscount),
    /// See [`FlatDiscount`].
    Flat(FlatDiscount),
}

impl Discount {
    /// Shorthand for `Discount::Percentage(PercentageDiscount::new(rate))`.
    #[inline]
    pub const fn percentage(rate: f64) -> Self {
        Discount::Percentage(PercentageDiscount::new(rate))
    }

    /// Shorthand for `Discount::Flat(FlatDiscount::new(flat))`.
    #[inline]
    pub const fn flat(flat: f64) -> Self {
        Discount::Flat(FlatDiscount::new(flat))
    }

    /// The neutral discount: a 0% percentage discount.
    #[inline]
    pub const fn identity() -> Self {
        Discount::percentage(0.0)
    }
}

impl Default for Discount {
    fn default() -> Self {
        Discount::identity()
    }
}

impl Adjustment for Discount {
    #[inline]
    fn apply(&self, amount: Amount) -> Amount {
        match self {
            Discount::Percentage(d) => d.apply(amount),
            Discount::Flat(d) => d.apply(amount),
        }
    }
}

impl From<PercentageDiscount> for Discount {
    fn from(d: PercentageDiscount) -> Self {
        Discount::Percentage(d)
    }
}

impl From<FlatDiscount> for Discount {
    fn from(d: FlatDiscount) -> Self {
        Discount::Flat(d)
    }
}

// =============================================================================
// Composition
// =============================================================================

/// Two adjustments applied in sequence, `first` then `second`.
///
/// Built by [`Adjustment::then`] or [`compose`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A: Adjustment, B: Adjustment> Adjustment for Then<A, B> {
    #[inline]
    fn apply(&self, amount: Amount) -> Amount {
        self.second.apply(self.first.apply(amount))
    }
}

/// Applies `first`, then `second`.
pub fn compose<A: Adjustment, B: Adjustment>(first: A, second: B) -> Then<A, B> {
    first.then(second)
}

// =============================================================================
// Discount Context
// =============================================================================

/// Holds the currently active discount for a checkout and applies it.
///
/// ## Lifecycle
/// ```text
/// DiscountContext::default()          ──► identity (prices unchanged)
///        │
///        ▼
/// set_discount(Percentage(0.10))      ──► swap the rule, no other state
///        │
///        ▼
/// execute(100.0) = 90.0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountContext {
    discount: Discount,
}

impl DiscountContext {
    /// Creates a context with an initial discount.
    pub fn new(discount: impl Into<Discount>) -> Self {
        DiscountContext {
            discount: discount.into(),
        }
    }

    /// Replaces the active discount.
    pub fn set_discount(&mut self, discount: impl Into<Discount>) {
        self.discount = discount.into();
    }

    /// The active discount.
    pub fn discount(&self) -> Discount {
        self.discount
    }

    /// Applies the active discount to `amount`.
    pub fn execute(&self, amount: Amount) -> Amount {
        self.discount.apply(amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
