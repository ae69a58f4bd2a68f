//! # Pricer CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load configuration (defaults, then `PRICER_*` environment)
//! 3. Initialize tracing (logging)
//! 4. Run the requested pricing command and print the quote

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match pricer_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
