//! # Pricing Commands
//!
//! One module per subcommand. Each command validates its amount, calls
//! exactly one pricing mechanism from `pricer-core`, and returns a [`Quote`].
//! Printing happens once, in [`render`].
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Subcommand        Module        pricer-core call                       │
//! │  ──────────        ──────        ────────────────                       │
//! │  season            season.rs     select_by_season(..).apply(a)          │
//! │  promo             promo.rs      PromoChain::standard().process(a, c)   │
//! │  stack             stack.rs      decorator::stack(a, layers).price()    │
//! │  legacy            legacy.rs     calculate_final_price(a, s, flags)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod legacy;
pub mod promo;
pub mod season;
pub mod stack;

use serde::{Deserialize, Serialize};
use std::fmt;

use pricer_core::Amount;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Which pricing mechanism produced a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mechanism {
    Season,
    Promo,
    Stack,
    Legacy,
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mechanism::Season => "season",
            Mechanism::Promo => "promo",
            Mechanism::Stack => "stack",
            Mechanism::Legacy => "legacy",
        };
        f.write_str(name)
    }
}

/// The result of one pricing command.
///
/// ## JSON Shape
/// ```json
/// { "mechanism": "promo", "detail": "promo WELCOME", "input": 100.0, "adjusted": 90.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub mechanism: Mechanism,
    /// Human-readable description of the rule(s) applied.
    pub detail: String,
    pub input: Amount,
    pub adjusted: Amount,
}

/// Renders a quote either as JSON or as a one-line sentence.
pub fn render(quote: &Quote, json: bool, config: &CliConfig) -> CliResult<String> {
    if json {
        return Ok(serde_json::to_string(quote)?);
    }

    Ok(format!(
        "{}: {} -> {}",
        quote.detail,
        format_amount(quote.input, config),
        format_amount(quote.adjusted, config)
    ))
}

/// Formats an amount with the configured symbol and precision.
///
/// Display only: the amount itself is never rounded.
pub fn format_amount(amount: Amount, config: &CliConfig) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!(
        "{}{}{:.*}",
        sign,
        config.currency_symbol,
        usize::from(config.decimals),
        amount.abs()
    )
}
