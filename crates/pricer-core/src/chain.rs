//! # Promo Chain
//!
//! First-match-wins dispatch of promo codes.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process(100.0, "WELCOME")                                              │
//! │                                                                         │
//! │  ┌────────────────────┐  no   ┌────────────────────┐  no               │
//! │  │ BLACK_FRIDAY  ×0.5 │ ────► │ WELCOME      ×0.9  │ ────► 100.0       │
//! │  └─────────┬──────────┘       └─────────┬──────────┘  (unchanged)       │
//! │            │ yes                        │ yes                            │
//! │            ▼                            ▼                                │
//! │          50.0                          90.0  ◄── returned here          │
//! │                                                                         │
//! │  • Each rule sees the ORIGINAL amount and the SAME code                 │
//! │  • At most one rule applies; later matches are never consulted          │
//! │  • No match is a no-op, not an error                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules live in an ordered `Vec` and are scanned linearly, so there are no
//! successor pointers to manage and no cycles to guard against.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjustment::{Adjustment, Discount};
use crate::types::Amount;
use crate::{BLACK_FRIDAY_CODE, WELCOME_CODE};

// =============================================================================
// Promo Rule
// =============================================================================

/// One link of the chain: a promo code it owns and the discount it grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoRule {
    code: String,
    discount: Discount,
}

impl PromoRule {
    /// Creates a rule recognizing exactly `code`.
    pub fn new(code: impl Into<String>, discount: impl Into<Discount>) -> Self {
        PromoRule {
            code: code.into(),
            discount: discount.into(),
        }
    }

    /// Half price on `BLACK_FRIDAY`.
    pub fn black_friday() -> Self {
        PromoRule::new(BLACK_FRIDAY_CODE, Discount::percentage(0.50))
    }

    /// 10% off for new customers on `WELCOME`.
    pub fn new_user() -> Self {
        PromoRule::new(WELCOME_CODE, Discount::percentage(0.10))
    }

    /// Whether this rule handles `code`. Matching is exact and case-sensitive.
    #[inline]
    pub fn recognizes(&self, code: &str) -> bool {
        self.code == code
    }

    /// The code this rule owns.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The discount this rule grants.
    pub fn discount(&self) -> Discount {
        self.discount
    }
}

// =============================================================================
// Promo Chain
// =============================================================================

/// An ordered sequence of promo rules.
///
/// ## Example
/// ```rust
/// use pricer_core::{PromoChain, PromoRule};
///
/// let chain = PromoChain::new()
///     .then_rule(PromoRule::black_friday())
///     .then_rule(PromoRule::new_user());
///
/// assert_eq!(chain.process(100.0, "WELCOME"), 90.0);
/// assert_eq!(chain.process(100.0, "BLACK_FRIDAY"), 50.0);
/// assert_eq!(chain.process(100.0, "NONE"), 100.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromoChain {
    rules: Vec<PromoRule>,
}

impl PromoChain {
    /// Creates an empty chain; every code falls through.
    pub fn new() -> Self {
        PromoChain { rules: Vec::new() }
    }

    /// The stock chain: `BLACK_FRIDAY` first, then `WELCOME`.
    pub fn standard() -> Self {
        PromoChain::new()
            .then_rule(PromoRule::black_friday())
            .then_rule(PromoRule::new_user())
    }

    /// Appends `rule` as the new last link.
    pub fn then_rule(mut self, rule: PromoRule) -> Self {
        self.push(rule);
        self
    }

    /// Appends `rule` as the new last link, in place.
    pub fn push(&mut self, rule: PromoRule) {
        self.rules.push(rule);
    }

    /// The rule that would handle `code`, if any.
    pub fn find(&self, code: &str) -> Option<&PromoRule> {
        self.rules.iter().find(|rule| rule.recognizes(code))
    }

    /// Applies the first rule recognizing `code` to `amount`.
    ///
    /// Returns `amount` unchanged when no rule matches.
    pub fn process(&self, amount: Amount, code: &str) -> Amount {
        match self.find(code) {
            Some(rule) => {
                let adjusted = rule.discount.apply(amount);
                debug!(code, amount, adjusted, "promo rule matched");
                adjusted
            }
            None => {
                debug!(code, amount, rules = self.rules.len(), "no promo rule matched");
                amount
            }
        }
    }

    /// The rules in dispatch order.
    pub fn rules(&self) -> &[PromoRule] {
        &self.rules
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain has no links.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<PromoRule> for PromoChain {
    fn from_iter<I: IntoIterator<Item = PromoRule>>(iter: I) -> Self {
        PromoChain {
            rules: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
