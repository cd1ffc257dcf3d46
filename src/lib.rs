//! Transaction Ledger Library
//! # Overview
//!
//! This library replays an ordered CSV log of payment transactions and produces
//! the final balance of every client it references.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransactionRecord, LedgerError, etc.)
//! - [`cli`] - CLI arguments parsing and log level selection
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Transaction processing orchestration
//!   - [`core::account_manager`] - Account state management and balance operations
//!   - [`core::transaction_store`] - Transaction history for dispute lookups
//!   - [`core::config`] - Engine policy switches
//! - [`io`] - Streaming CSV record source and report writer
//!
//! # Transaction Types
//!
//! The engine supports five transaction types:
//!
//! - **Deposit**: Credit funds to an account
//! - **Withdrawal**: Debit funds from an account (balances may go negative)
//! - **Dispute**: Move a recorded transaction's amount from available to held
//! - **Resolve**: Move a recorded transaction's amount from held back to available
//! - **Chargeback**: Remove a recorded transaction's amount from held and lock the account
//!
//! # Account States
//!
//! Each account maintains:
//! - `available`: Funds available for withdrawal or trading
//! - `held`: Funds frozen due to disputes
//! - `total`: Sum of available and held funds, computed when reported
//! - `locked`: Whether the account has seen a chargeback

pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{AccountManager, LedgerConfig, LedgerEngine, TransactionStore};
pub use io::{write_report, CsvRecordSource};
pub use types::{
    Account, AccountReport, ClientId, ErrorCategory, LedgerError, StoredTransaction,
    TransactionId, TransactionRecord, TransactionType,
};

use std::io::{Read, Write};

/// Replay `input` and write the account report to `output`
///
/// The whole input is processed before anything is written, so a failing run
/// leaves `output` untouched.
pub fn run<R, W>(
    input: R,
    mut output: W,
    config: LedgerConfig,
) -> Result<AccountReport, LedgerError>
where
    R: Read,
    W: Write,
{
    let source = CsvRecordSource::new(input)?;
    let report = LedgerEngine::with_config(config).process(source)?;
    write_report(&report, &mut output)?;
    Ok(report)
}
