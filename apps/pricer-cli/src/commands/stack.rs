//! `pricer stack <AMOUNT> [--layer LAYER]...`

use pricer_core::decorator::{stack, Layer};
use pricer_core::validation::validate_amount;
use pricer_core::PriceComponent;

use super::{Mechanism, Quote};
use crate::error::CliResult;

/// Wraps `amount` in the named layers, first name innermost.
pub fn quote(amount: f64, layer_names: &[String]) -> CliResult<Quote> {
    validate_amount(amount)?;

    let layers = layer_names
        .iter()
        .map(|name| name.parse::<Layer>())
        .collect::<Result<Vec<_>, _>>()?;

    let detail = std::iter::once("base")
        .chain(layers.iter().map(Layer::as_str))
        .collect::<Vec<_>>()
        .join(" > ");

    Ok(Quote {
        mechanism: Mechanism::Stack,
        detail,
        input: amount,
        adjusted: stack(amount, &layers).price(),
    })
}
