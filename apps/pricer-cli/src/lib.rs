//! # Pricer CLI Library
//!
//! A thin terminal caller for `pricer-core`. It owns everything the core
//! deliberately leaves out: argument parsing, logging setup, environment
//! configuration and printing.
//!
//! ## Module Organization
//! ```text
//! pricer_cli/
//! ├── lib.rs          ◄─── You are here (argument parsing, tracing, dispatch)
//! ├── config.rs       ◄─── CliConfig: defaults + PRICER_* overrides
//! ├── error.rs        ◄─── CliError and exit codes
//! └── commands/
//!     ├── mod.rs      ◄─── Quote type and rendering
//!     ├── season.rs   ◄─── `pricer season`
//!     ├── promo.rs    ◄─── `pricer promo`
//!     ├── stack.rs    ◄─── `pricer stack`
//!     └── legacy.rs   ◄─── `pricer legacy`
//! ```
//!
//! ## Examples
//! ```text
//! $ pricer season winter 100
//! WINTER: $100.00 -> $80.00
//!
//! $ pricer promo WELCOME 100
//! promo WELCOME: $100.00 -> $90.00
//!
//! $ pricer stack 100 --layer tax --layer membership
//! base > tax > membership: $100.00 -> $85.00
//!
//! $ pricer --json legacy 100 SUMMER --vip
//! {"mechanism":"legacy","detail":"SUMMER vip","input":100.0,"adjusted":80.0}
//! ```

pub mod commands;
pub mod config;
pub mod error;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::Quote;
use config::CliConfig;
use error::CliResult;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "pricer",
    about = "Pricer: price an order with seasonal, promo-code and stacked rules"
)]
pub struct Cli {
    /// Print the quote as JSON instead of a sentence.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply the seasonal discount (summer, winter, clearance; anything else is no discount).
    Season {
        /// Season name, any case.
        season: String,

        /// Order amount.
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Run a promo code through the standard chain (BLACK_FRIDAY, then WELCOME).
    Promo {
        /// Promo code, matched exactly.
        code: String,

        /// Order amount.
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Wrap the amount in price layers, innermost first.
    Stack {
        /// Base amount.
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Layer to wrap with: tax or membership. Repeat to stack.
        #[arg(long = "layer", value_name = "LAYER")]
        layers: Vec<String>,
    },
    /// Price with the legacy all-in-one calculator.
    Legacy {
        /// Order amount.
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Season name, matched with exact case.
        season: String,

        /// Customer is a VIP member.
        #[arg(long, default_value_t = false)]
        vip: bool,

        /// Order placed on a holiday.
        #[arg(long, default_value_t = false)]
        holiday: bool,
    },
}

/// Parses arguments, sets up logging and runs one command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env();

    init_tracing(&config);
    debug!(?config, "configuration loaded");

    let quote = execute(&cli.command)?;
    info!(
        mechanism = %quote.mechanism,
        input = quote.input,
        adjusted = quote.adjusted,
        "quote computed"
    );

    println!("{}", commands::render(&quote, cli.json, &config)?);
    Ok(())
}

/// Runs one command and returns its quote without printing anything.
pub fn execute(command: &Command) -> CliResult<Quote> {
    match command {
        Command::Season { season, amount } => commands::season::quote(season, *amount),
        Command::Promo { code, amount } => commands::promo::quote(code, *amount),
        Command::Stack { amount, layers } => commands::stack::quote(*amount, layers),
        Command::Legacy {
            amount,
            season,
            vip,
            holiday,
        } => commands::legacy::quote(*amount, season, *vip, *holiday),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (promo matches, config)
/// - `RUST_LOG=pricer=trace` - Also show season resolution
/// - Otherwise: `CliConfig::log_filter` (default `warn,pricer=info`)
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
