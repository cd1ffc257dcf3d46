//! Transaction Ledger CLI
//!
//! Command-line interface for replaying a CSV transaction log.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv > accounts.csv
//! TX_LEDGER_LOG=debug cargo run -- transactions.csv > accounts.csv
//! ```
//!
//! The program reads transaction records from the input CSV file, applies them
//! in order, and writes the final account states to stdout. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, malformed input, etc.)

use std::env;
use std::io::{stderr, stdout};
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};
use tx_ledger::cli;
use tx_ledger::{write_report, CsvRecordSource, LedgerConfig, LedgerEngine, LedgerError};

fn main() {
    let args = cli::parse_args();

    let log_level = env::var(cli::LOG_LEVEL_ENV)
        .map(|level| cli::parse_log_level(&level))
        .unwrap_or(LevelFilter::ERROR);
    setup_logging(log_level);

    if let Err(e) = process_file(&args) {
        eprintln!("tx-ledger: {}", e);
        process::exit(1);
    }
}

fn process_file(args: &cli::CliArgs) -> Result<(), LedgerError> {
    // Open errors surface before the header is read
    let source = CsvRecordSource::from_path(&args.input_file)?;
    let report = LedgerEngine::with_config(LedgerConfig::default()).process(source)?;

    let stdout = stdout();
    write_report(&report, &mut stdout.lock())
}

fn setup_logging(level: LevelFilter) {
    // stdout carries the report
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}
