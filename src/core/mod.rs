//! Core business logic module
//!
//! This module contains the ledger components:
//! - `engine` - Applies transaction records in order and builds the report
//! - `account_manager` - Account state and balance movements
//! - `transaction_store` - Deposits and withdrawals kept for dispute lookups
//! - `config` - Policy switches for the engine

pub mod account_manager;
pub mod config;
pub mod engine;
pub mod transaction_store;

pub use account_manager::AccountManager;
pub use config::LedgerConfig;
pub use engine::LedgerEngine;
pub use transaction_store::TransactionStore;
