//! `pricer promo <CODE> <AMOUNT>`

use pricer_core::validation::{validate_amount, validate_promo_code};
use pricer_core::PromoChain;
use tracing::warn;

use super::{Mechanism, Quote};
use crate::error::CliResult;

/// Runs `code` through the standard promo chain.
///
/// A malformed code is only warned about: it still goes through the chain,
/// where it simply matches nothing.
pub fn quote(code: &str, amount: f64) -> CliResult<Quote> {
    validate_amount(amount)?;

    if let Err(err) = validate_promo_code(code) {
        warn!(code, %err, "promo code is malformed and will not match");
    }

    let chain = PromoChain::standard();
    let detail = match chain.find(code) {
        Some(rule) => format!("promo {}", rule.code()),
        None => format!("promo {code} (not recognized)"),
    };

    Ok(Quote {
        mechanism: Mechanism::Promo,
        detail,
        input: amount,
        adjusted: chain.process(amount, code),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_code() {
        let quote = quote("WELCOME", 100.0).unwrap();
        assert_eq!(quote.detail, "promo WELCOME");
        assert_eq!(quote.adjusted, 90.0);
    }

    #[test]
    fn test_black_friday_code() {
        assert_eq!(quote("BLACK_FRIDAY", 80.0).unwrap().adjusted, 40.0);
    }

    #[test]
    fn test_unrecognized_code_passes_through() {
        let quote = quote("welcome", 100.0).unwrap();
        assert_eq!(quote.detail, "promo welcome (not recognized)");
        assert_eq!(quote.adjusted, 100.0);
    }
}
