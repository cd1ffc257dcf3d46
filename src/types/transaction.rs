//! Transaction-related types for the ledger
//!
//! This module defines transaction types, the records produced by the record
//! source, and the stored form kept for dispute lookups.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Client identifier
///
/// Supports client IDs from 0 to 65,535
pub type ClientId = u16;

/// Transaction identifier
///
/// Supports transaction IDs from 0 to 4,294,967,295
pub type TransactionId = u32;

/// Transaction types understood by the ledger
///
/// Deposits and withdrawals move money and are recorded for later reference.
/// Disputes, resolves, and chargebacks adjudicate a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Credit funds to the available balance
    Deposit,

    /// Debit funds from the available balance
    Withdrawal,

    /// Move a recorded amount from available to held
    Dispute,

    /// Move a recorded amount from held back to available
    Resolve,

    /// Remove a recorded amount from held and lock the account
    Chargeback,
}

impl TransactionType {
    /// Whether records of this type carry an amount field
    pub fn carries_amount(self) -> bool {
        matches!(self, TransactionType::Deposit | TransactionType::Withdrawal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Dispute => "dispute",
            TransactionType::Resolve => "resolve",
            TransactionType::Chargeback => "chargeback",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type tag is not one of the five known types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    /// Type tags are matched exactly; `"Deposit"` is not a deposit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(TransactionType::Deposit),
            "withdrawal" => Ok(TransactionType::Withdrawal),
            "dispute" => Ok(TransactionType::Dispute),
            "resolve" => Ok(TransactionType::Resolve),
            "chargeback" => Ok(TransactionType::Chargeback),
            other => Err(UnknownTransactionType(other.to_string())),
        }
    }
}

/// A single input record, in one of its two shapes
///
/// Deposits and withdrawals are the 4-field form and carry an amount. The
/// dispute family is the 3-field form and references an earlier transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionRecord {
    Deposit {
        client: ClientId,
        tx: TransactionId,
        amount: Decimal,
    },
    Withdrawal {
        client: ClientId,
        tx: TransactionId,
        amount: Decimal,
    },
    Dispute {
        client: ClientId,
        tx: TransactionId,
    },
    Resolve {
        client: ClientId,
        tx: TransactionId,
    },
    Chargeback {
        client: ClientId,
        tx: TransactionId,
    },
}

impl TransactionRecord {
    /// Build a record of the given type
    ///
    /// `amount` must be present exactly when the type carries one. Returns
    /// `None` for a deposit or withdrawal without an amount and for a dispute,
    /// resolve, or chargeback with one.
    pub fn new(
        tx_type: TransactionType,
        client: ClientId,
        tx: TransactionId,
        amount: Option<Decimal>,
    ) -> Option<Self> {
        let record = match (tx_type, amount) {
            (TransactionType::Deposit, Some(amount)) => {
                TransactionRecord::Deposit { client, tx, amount }
            }
            (TransactionType::Withdrawal, Some(amount)) => {
                TransactionRecord::Withdrawal { client, tx, amount }
            }
            (TransactionType::Dispute, None) => TransactionRecord::Dispute { client, tx },
            (TransactionType::Resolve, None) => TransactionRecord::Resolve { client, tx },
            (TransactionType::Chargeback, None) => TransactionRecord::Chargeback { client, tx },
            _ => return None,
        };
        Some(record)
    }

    /// The client whose account this record is applied to
    pub fn client(&self) -> ClientId {
        match *self {
            TransactionRecord::Deposit { client, .. }
            | TransactionRecord::Withdrawal { client, .. }
            | TransactionRecord::Dispute { client, .. }
            | TransactionRecord::Resolve { client, .. }
            | TransactionRecord::Chargeback { client, .. } => client,
        }
    }

    /// The transaction id this record carries or references
    pub fn tx(&self) -> TransactionId {
        match *self {
            TransactionRecord::Deposit { tx, .. }
            | TransactionRecord::Withdrawal { tx, .. }
            | TransactionRecord::Dispute { tx, .. }
            | TransactionRecord::Resolve { tx, .. }
            | TransactionRecord::Chargeback { tx, .. } => tx,
        }
    }

    pub fn tx_type(&self) -> TransactionType {
        match self {
            TransactionRecord::Deposit { .. } => TransactionType::Deposit,
            TransactionRecord::Withdrawal { .. } => TransactionType::Withdrawal,
            TransactionRecord::Dispute { .. } => TransactionType::Dispute,
            TransactionRecord::Resolve { .. } => TransactionType::Resolve,
            TransactionRecord::Chargeback { .. } => TransactionType::Chargeback,
        }
    }
}

/// Stored transaction for dispute lookups
///
/// Only deposits and withdrawals are stored. The record is written once and
/// read by every later dispute, resolve, or chargeback that references it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredTransaction {
    /// The client that created this transaction
    pub client: ClientId,

    /// The original amount
    pub amount: Decimal,

    /// Deposit or Withdrawal
    pub tx_type: TransactionType,
}
