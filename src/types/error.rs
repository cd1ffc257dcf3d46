//! Error types for the ledger
//!
//! Every error here is fatal: it aborts the run and no report is written.
//! Lookups of unknown transaction ids are not errors and never appear here.
//!
//! # Error Categories
//!
//! - **Format**: the header is missing or does not match
//! - **Validation**: a data row cannot be turned into a transaction, or applying
//!   it would overflow a balance
//! - **Io**: the input cannot be opened, read, or written

use super::transaction::{ClientId, TransactionId};
use thiserror::Error;

/// Coarse classification of a [`LedgerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Validation,
    Io,
}

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The input had no header row at all
    #[error("missing header")]
    MissingHeader,

    /// The header row did not match the expected field names
    #[error("invalid header: got \"{found}\", want \"{expected}\"")]
    InvalidHeader { found: String, expected: String },

    /// An amount field could not be parsed as a decimal number
    #[error("invalid amount \"{amount}\" at line {line}")]
    InvalidAmount { amount: String, line: u64 },

    /// The type tag is not one of the five known types
    #[error("unrecognized transaction type \"{tx_type}\" at line {line}")]
    UnknownTransactionType { tx_type: String, line: u64 },

    /// A deposit or withdrawal row without an amount
    #[error("{tx_type} at line {line} requires an amount")]
    MissingAmount { tx_type: String, line: u64 },

    /// A client or tx field that is not a valid id
    #[error("invalid {field} \"{value}\" at line {line}")]
    InvalidField {
        field: &'static str,
        value: String,
        line: u64,
    },

    /// A row with a field count other than 3 or 4
    #[error("expected 3 or 4 fields, found {fields} at line {line}")]
    MalformedRecord { fields: usize, line: u64 },

    /// Applying a transaction would take a balance out of range
    #[error("arithmetic overflow in {operation} for client {client} (tx {tx})")]
    ArithmeticOverflow {
        operation: String,
        client: ClientId,
        tx: TransactionId,
    },

    /// The input file could not be opened
    #[error("opening transactions file {path}: {message}")]
    OpenFile { path: String, message: String },

    /// I/O error while reading input or writing the report
    #[error("I/O error: {message}")]
    Io { message: String },

    /// The CSV layer failed (bad quoting, invalid UTF-8, ...)
    #[error("CSV error{}: {message}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv { line: Option<u64>, message: String },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LedgerError::MissingHeader | LedgerError::InvalidHeader { .. } => ErrorCategory::Format,
            LedgerError::InvalidAmount { .. }
            | LedgerError::UnknownTransactionType { .. }
            | LedgerError::MissingAmount { .. }
            | LedgerError::InvalidField { .. }
            | LedgerError::MalformedRecord { .. }
            | LedgerError::ArithmeticOverflow { .. } => ErrorCategory::Validation,
            LedgerError::OpenFile { .. } | LedgerError::Io { .. } | LedgerError::Csv { .. } => {
                ErrorCategory::Io
            }
        }
    }

    /// 1-based input line the error refers to, where known
    pub fn line(&self) -> Option<u64> {
        match self {
            LedgerError::InvalidAmount { line, .. }
            | LedgerError::UnknownTransactionType { line, .. }
            | LedgerError::MissingAmount { line, .. }
            | LedgerError::InvalidField { line, .. }
            | LedgerError::MalformedRecord { line, .. } => Some(*line),
            LedgerError::Csv { line, .. } => *line,
            _ => None,
        }
    }

    /// Both headers are rendered as comma-space separated field names
    pub fn invalid_header(found: &[&str], expected: &[&str]) -> Self {
        LedgerError::InvalidHeader {
            found: found.join(", "),
            expected: expected.join(", "),
        }
    }

    pub fn invalid_amount(amount: &str, line: u64) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
            line,
        }
    }

    pub fn unknown_transaction_type(tx_type: &str, line: u64) -> Self {
        LedgerError::UnknownTransactionType {
            tx_type: tx_type.to_string(),
            line,
        }
    }

    pub fn missing_amount(tx_type: &str, line: u64) -> Self {
        LedgerError::MissingAmount {
            tx_type: tx_type.to_string(),
            line,
        }
    }

    pub fn invalid_field(field: &'static str, value: &str, line: u64) -> Self {
        LedgerError::InvalidField {
            field,
            value: value.to_string(),
            line,
        }
    }

    pub fn arithmetic_overflow(operation: &str, client: ClientId, tx: TransactionId) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            client,
            tx,
        }
    }

    pub fn open_file(path: &std::path::Path, error: &std::io::Error) -> Self {
        LedgerError::OpenFile {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}
