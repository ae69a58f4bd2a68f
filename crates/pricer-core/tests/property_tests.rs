//! Property tests for the pricing invariants.
//!
//! Uses proptest to verify:
//! 1. Percentage discount is `a × (1 − r)`
//! 2. Flat discount is `max(0, a − f)` and never negative
//! 3. The season selector is total and case-insensitive
//! 4. Promo chains apply at most one rule and fall through unchanged
//! 5. Price stacks are order-sensitive and recompute identically

use proptest::prelude::*;
use pricer_core::decorator::{stack, BasePrice, MembershipDecorator, TaxDecorator};
use pricer_core::{
    select_by_season, Adjustment, Discount, FlatDiscount, Layer, PercentageDiscount,
    PriceComponent, PromoChain, PromoRule, MEMBERSHIP_REBATE, TAX_MULTIPLIER,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_amount() -> impl Strategy<Value = f64> {
    (0.0..100_000.0_f64).prop_map(|a| (a * 100.0).round() / 100.0)
}

/// Amounts on both sides of zero, for the rules that must hold for any input.
fn arb_signed_amount() -> impl Strategy<Value = f64> {
    (-1000.0..1000.0_f64).prop_map(|a| (a * 100.0).round() / 100.0)
}

fn arb_rate() -> impl Strategy<Value = f64> {
    0.0..1.0_f64
}

fn arb_flat() -> impl Strategy<Value = f64> {
    0.0..500.0_f64
}

fn arb_layers() -> impl Strategy<Value = Vec<Layer>> {
    prop::collection::vec(prop_oneof![Just(Layer::Tax), Just(Layer::Membership)], 0..8)
}

/// Randomly upper/lower-cases each character of `name`.
fn arb_casing(name: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), name.len()).prop_map(move |flips| {
        name.chars()
            .zip(flips)
            .map(|(c, upper)| {
                if upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

// ── 1-2. Primitives ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn percentage_matches_formula(a in arb_amount(), r in arb_rate()) {
        prop_assert_eq!(PercentageDiscount::new(r).apply(a), a * (1.0 - r));
    }

    #[test]
    fn flat_matches_formula_and_is_never_negative(a in arb_signed_amount(), f in arb_flat()) {
        let result = FlatDiscount::new(f).apply(a);
        prop_assert_eq!(result, (a - f).max(0.0));
        prop_assert!(result >= 0.0);
    }

    #[test]
    fn discount_enum_agrees_with_variants(a in arb_amount(), r in arb_rate(), f in arb_flat()) {
        prop_assert_eq!(Discount::percentage(r).apply(a), PercentageDiscount::new(r).apply(a));
        prop_assert_eq!(Discount::flat(f).apply(a), FlatDiscount::new(f).apply(a));
    }
}

// ── 3. Selector ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn selector_ignores_case(
        a in arb_amount(),
        name in prop_oneof![arb_casing("summer"), arb_casing("winter"), arb_casing("clearance")],
    ) {
        let canonical = select_by_season(&name.to_uppercase());
        prop_assert_eq!(select_by_season(&name).apply(a), canonical.apply(a));
    }

    #[test]
    fn unknown_season_is_identity(a in arb_amount(), name in "[a-z]{0,12}") {
        prop_assume!(!["summer", "winter", "clearance"].contains(&name.as_str()));
        prop_assert_eq!(select_by_season(&name).apply(a), a);
    }
}

// ── 4. Chain ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn unmatched_code_returns_original_amount(a in arb_amount(), code in "[A-Z_]{0,16}") {
        prop_assume!(code != "BLACK_FRIDAY" && code != "WELCOME");
        prop_assert_eq!(PromoChain::standard().process(a, &code), a);
    }

    #[test]
    fn at_most_one_rule_applies(a in arb_amount(), r1 in arb_rate(), r2 in arb_rate()) {
        let chain = PromoChain::new()
            .then_rule(PromoRule::new("CODE", Discount::percentage(r1)))
            .then_rule(PromoRule::new("CODE", Discount::percentage(r2)));
        prop_assert_eq!(chain.process(a, "CODE"), PercentageDiscount::new(r1).apply(a));
    }
}

// ── 5. Decorators ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn decorator_order_changes_price(a in arb_amount()) {
        let rebate_of_tax = MembershipDecorator::new(TaxDecorator::new(BasePrice::new(a)));
        let tax_of_rebate = TaxDecorator::new(MembershipDecorator::new(BasePrice::new(a)));

        // (a × 1.05 − 20) − ((a − 20) × 1.05) = 20 × 0.05 = 1.0
        let gap = rebate_of_tax.price() - tax_of_rebate.price();
        let expected = MEMBERSHIP_REBATE * (TAX_MULTIPLIER - 1.0);
        prop_assert!((gap - expected).abs() < 1e-6);
    }

    #[test]
    fn price_recomputes_identically(a in arb_amount(), layers in arb_layers()) {
        let stacked = stack(a, &layers);
        prop_assert_eq!(stacked.price(), stacked.price());
    }

    #[test]
    fn runtime_stack_equals_folded_transforms(a in arb_amount(), layers in arb_layers()) {
        let expected = layers.iter().fold(a, |price, layer| layer.transform(price));
        prop_assert_eq!(stack(a, &layers).price(), expected);
    }
}

// ── End-to-end scenario ──────────────────────────────────────────────

#[test]
fn end_to_end_scenario() {
    assert_eq!(PercentageDiscount::new(0.10).apply(100.0), 90.0);
    assert_eq!(select_by_season("WINTER").apply(100.0), 80.0);

    let chain = PromoChain::standard();
    assert_eq!(chain.process(100.0, "WELCOME"), 90.0);
    assert_eq!(chain.process(100.0, "NONE"), 100.0);

    let taxed = TaxDecorator::new(BasePrice::new(100.0));
    assert!((taxed.price() - 105.0).abs() < 1e-9);
    let vip_taxed = MembershipDecorator::new(taxed);
    assert!((vip_taxed.price() - 85.0).abs() < 1e-9);
}
