//! `pricer season <SEASON> <AMOUNT>`

use pricer_core::validation::validate_amount;
use pricer_core::{select_by_season, Adjustment, Season};
use tracing::debug;

use super::{Mechanism, Quote};
use crate::error::CliResult;

/// Prices `amount` with the discount for `season`.
pub fn quote(season: &str, amount: f64) -> CliResult<Quote> {
    validate_amount(amount)?;

    let resolved = Season::parse(season);
    if resolved == Season::Regular {
        debug!(season, "no seasonal promotion for this name");
    }

    Ok(Quote {
        mechanism: Mechanism::Season,
        detail: resolved.to_string(),
        input: amount,
        adjusted: select_by_season(season).apply(amount),
    })
}
