//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state
//! - `transaction`: Transaction records, stored transactions, and identifiers
//! - `error`: Error types for the ledger
//! - `report`: The final per-client snapshot

pub mod account;
pub mod error;
pub mod report;
pub mod transaction;

pub use account::Account;
pub use error::{ErrorCategory, LedgerError};
pub use report::AccountReport;
pub use transaction::{
    ClientId, StoredTransaction, TransactionId, TransactionRecord, TransactionType,
    UnknownTransactionType,
};
