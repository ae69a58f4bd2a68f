//! # CLI Configuration
//!
//! Presentation and logging settings for the CLI.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PRICER_*`)
//! 2. Defaults (this file)
//!
//! Rule parameters (rates, flat values, promo codes) are not configurable;
//! they are fixed in `pricer-core`.

use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places shown (amounts are never rounded internally)
    pub decimals: u8,
}

impl Default for CliConfig {
    /// Returns the default configuration.
    ///
    /// ## Default Values
    /// - Log filter: `warn,pricer=info`
    /// - Currency: `$`, 2 decimals
    fn default() -> Self {
        CliConfig {
            log_filter: "warn,pricer=info".to_string(),
            currency_symbol: "$".to_string(),
            decimals: 2,
        }
    }
}

impl CliConfig {
    /// Creates a CliConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PRICER_LOG`: Override log filter
    /// - `PRICER_CURRENCY_SYMBOL`: Override currency symbol
    /// - `PRICER_DECIMALS`: Override displayed decimals (0-9)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    ///
    /// Split out of [`CliConfig::from_env`] so tests don't touch the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(filter) = lookup("PRICER_LOG") {
            config.log_filter = filter;
        }

        if let Some(symbol) = lookup("PRICER_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("PRICER_DECIMALS") {
            // Invalid values keep the default
            if let Ok(d) = decimals.parse::<u8>() {
                if d <= 9 {
                    config.decimals = d;
                }
            }
        }

        config
    }
}
