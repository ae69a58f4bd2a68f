//! # Price Decorators
//!
//! Builds a price by wrapping a base amount in successive layers, each layer
//! transforming the price of the single component it wraps.
//!
//! ## Nesting Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Membership( Tax( Base(100) ) )        Tax( Membership( Base(100) ) )   │
//! │                                                                         │
//! │  Base        100.00                    Base          100.00             │
//! │    │                                     │                              │
//! │  Tax ×1.05   105.00                    Membership −20  80.00            │
//! │    │                                     │                              │
//! │  Membership −20  85.00                 Tax ×1.05      84.00             │
//! │                                                                         │
//! │  Same layers, different order, different price.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A wrapper can only be built around an already-built component, so stacks
//! are trees of depth = nesting count with no way to form a cycle. Nothing is
//! cached: every [`PriceComponent::price`] call walks the whole stack.
//!
//! ## Usage
//! ```rust
//! use pricer_core::decorator::{BasePrice, MembershipDecorator, PriceComponent, TaxDecorator};
//!
//! let taxed = TaxDecorator::new(BasePrice::new(100.0));
//! assert!((taxed.price() - 105.0).abs() < 1e-9);
//!
//! let vip_taxed = MembershipDecorator::new(taxed);
//! assert!((vip_taxed.price() - 85.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;
use crate::types::Amount;
use crate::{MEMBERSHIP_REBATE, TAX_MULTIPLIER};

// =============================================================================
// Price Component
// =============================================================================

/// Anything that has a price: a base value or a wrapper around another
/// component.
pub trait PriceComponent: Send + Sync {
    /// Computes the price, recursing into any wrapped component.
    fn price(&self) -> Amount;
}

impl<P: PriceComponent + ?Sized> PriceComponent for Box<P> {
    #[inline]
    fn price(&self) -> Amount {
        (**self).price()
    }
}

/// A fixed starting amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePrice {
    amount: Amount,
}

impl BasePrice {
    pub const fn new(amount: Amount) -> Self {
        BasePrice { amount }
    }
}

impl PriceComponent for BasePrice {
    #[inline]
    fn price(&self) -> Amount {
        self.amount
    }
}

// =============================================================================
// Wrappers
// =============================================================================

/// Adds 5% sales tax to the wrapped price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxDecorator<P> {
    inner: P,
}

impl<P: PriceComponent> TaxDecorator<P> {
    pub fn new(inner: P) -> Self {
        TaxDecorator { inner }
    }

    /// The wrapped component.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: PriceComponent> PriceComponent for TaxDecorator<P> {
    fn price(&self) -> Amount {
        Layer::Tax.transform(self.inner.price())
    }
}

/// Takes the flat membership rebate off the wrapped price.
///
/// Unlike [`crate::FlatDiscount`] this does NOT floor at zero: wrapping a
/// price below the rebate yields a negative result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipDecorator<P> {
    inner: P,
}

impl<P: PriceComponent> MembershipDecorator<P> {
    pub fn new(inner: P) -> Self {
        MembershipDecorator { inner }
    }

    /// The wrapped component.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: PriceComponent> PriceComponent for MembershipDecorator<P> {
    fn price(&self) -> Amount {
        Layer::Membership.transform(self.inner.price())
    }
}

// =============================================================================
// Layer (runtime-chosen wrappers)
// =============================================================================

/// A wrapper kind, for stacks whose shape is only known at runtime.
///
/// ## Parsing
/// | Input (any case)       | Layer        |
/// |------------------------|--------------|
/// | `tax`                  | `Tax`        |
/// | `membership`, `vip`    | `Membership` |
///
/// Whitespace is significant: `" tax"` is an unknown layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// See [`TaxDecorator`].
    Tax,
    /// See [`MembershipDecorator`].
    Membership,
}

impl Layer {
    /// The layer's own transform, applied to an already computed inner price.
    #[inline]
    pub fn transform(&self, inner: Amount) -> Amount {
        match self {
            Layer::Tax => inner * TAX_MULTIPLIER,
            Layer::Membership => inner - MEMBERSHIP_REBATE,
        }
    }

    /// Wraps `inner` in this layer.
    pub fn wrap(self, inner: Box<dyn PriceComponent>) -> Box<dyn PriceComponent> {
        match self {
            Layer::Tax => Box::new(TaxDecorator::new(inner)),
            Layer::Membership => Box::new(MembershipDecorator::new(inner)),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Layer::Tax => "tax",
            Layer::Membership => "membership",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tax" => Ok(Layer::Tax),
            "membership" | "vip" => Ok(Layer::Membership),
            _ => Err(PricingError::UnknownLayer(s.to_string())),
        }
    }
}

/// Builds a stack over `base`, applying `layers` innermost first.
///
/// ## Example
/// ```rust
/// use pricer_core::decorator::{stack, Layer, PriceComponent};
///
/// let tax_then_vip = stack(100.0, &[Layer::Tax, Layer::Membership]);
/// let vip_then_tax = stack(100.0, &[Layer::Membership, Layer::Tax]);
///
/// assert!((tax_then_vip.price() - 85.0).abs() < 1e-9);
/// assert!((vip_then_tax.price() - 84.0).abs() < 1e-9);
/// ```
pub fn stack(base: Amount, layers: &[Layer]) -> Box<dyn PriceComponent> {
    layers
        .iter()
        .fold(Box::new(BasePrice::new(base)) as Box<dyn PriceComponent>, |inner, layer| {
            layer.wrap(inner)
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_base_price_is_verbatim() {
        assert_eq!(BasePrice::new(100.0).price(), 100.0);
        assert_eq!(BasePrice::new(0.0).price(), 0.0);
    }

    #[test]
    fn test_tax_alone() {
        let taxed = TaxDecorator::new(BasePrice::new(100.0));
        assert!((taxed.price() - 105.0).abs() < EPS);
    }

    #[test]
    fn test_ordering_is_not_commutative() {
        let rebate_of_tax = MembershipDecorator::new(TaxDecorator::new(BasePrice::new(100.0)));
        let tax_of_rebate = TaxDecorator::new(MembershipDecorator::new(BasePrice::new(100.0)));

        assert!((rebate_of_tax.price() - 85.0).abs() < EPS);
        assert!((tax_of_rebate.price() - 84.0).abs() < EPS);
        assert!((rebate_of_tax.price() - tax_of_rebate.price()).abs() > 0.5);
    }

    #[test]
    fn test_membership_is_not_floored() {
        let vip = MembershipDecorator::new(BasePrice::new(5.0));
        assert_eq!(vip.price(), -15.0);
    }

    #[test]
    fn test_price_is_idempotent() {
        let stacked = TaxDecorator::new(MembershipDecorator::new(TaxDecorator::new(
            BasePrice::new(250.0),
        )));
        let first = stacked.price();
        let second = stacked.price();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inner_access() {
        let taxed = TaxDecorator::new(BasePrice::new(10.0));
        assert_eq!(taxed.inner().price(), 10.0);
    }

    #[test]
    fn test_layer_parsing() {
        assert_eq!("tax".parse::<Layer>().unwrap(), Layer::Tax);
        assert_eq!("TAX".parse::<Layer>().unwrap(), Layer::Tax);
        assert_eq!("vip".parse::<Layer>().unwrap(), Layer::Membership);
        assert_eq!("Membership".parse::<Layer>().unwrap(), Layer::Membership);

        let err = "coupon".parse::<Layer>().unwrap_err();
        assert!(matches!(err, PricingError::UnknownLayer(name) if name == "coupon"));
    }

    #[test]
    fn test_layer_parsing_keeps_whitespace() {
        let err = " tax".parse::<Layer>().unwrap_err();
        assert!(matches!(err, PricingError::UnknownLayer(name) if name == " tax"));
        assert!("vip\n".parse::<Layer>().is_err());
        assert!("".parse::<Layer>().is_err());
    }

    #[test]
    fn test_runtime_stack_matches_static_stack() {
        let dynamic = stack(100.0, &[Layer::Tax, Layer::Membership]);
        let fixed = MembershipDecorator::new(TaxDecorator::new(BasePrice::new(100.0)));
        assert_eq!(dynamic.price(), fixed.price());
    }

    #[test]
    fn test_empty_stack_is_base() {
        assert_eq!(stack(42.0, &[]).price(), 42.0);
    }

    #[test]
    fn test_deep_stack() {
        let layers = [Layer::Tax; 3];
        let expected = 100.0 * TAX_MULTIPLIER * TAX_MULTIPLIER * TAX_MULTIPLIER;
        assert!((stack(100.0, &layers).price() - expected).abs() < EPS);
    }
}
