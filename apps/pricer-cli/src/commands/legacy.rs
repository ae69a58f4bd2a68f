//! `pricer legacy <AMOUNT> <SEASON> [--vip] [--holiday]`

use pricer_core::calculator::{calculate_final_price, OrderFlags};
use pricer_core::validation::validate_amount;

use super::{Mechanism, Quote};
use crate::error::CliResult;

/// Prices with the legacy all-in-one calculator.
pub fn quote(amount: f64, season: &str, vip: bool, holiday: bool) -> CliResult<Quote> {
    validate_amount(amount)?;

    let flags = OrderFlags { vip, holiday };

    let mut detail = season.to_string();
    if vip {
        detail.push_str(" vip");
    }
    if holiday {
        detail.push_str(" holiday");
    }

    Ok(Quote {
        mechanism: Mechanism::Legacy,
        detail,
        input: amount,
        adjusted: calculate_final_price(amount, season, flags),
    })
}
