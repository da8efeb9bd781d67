//! Ticket-bot command line for the standard names registry.
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination. Everything
//! inside the `stdnames` library is UI agnostic; this crate owns argument
//! parsing, banner rendering, and exit codes.
//!
//! Validation failures in a submission are part of normal operation (the
//! rendered banner is the bot's reply to the ticket), so they print to stdout
//! and exit zero. Only operational failures (unreadable registry or denylist
//! files, malformed arguments) terminate with an error.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
