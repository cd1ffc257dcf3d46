//! Transaction storage for dispute lookups
//!
//! Keeps deposits and withdrawals by transaction ID so a later dispute,
//! resolve, or chargeback can find the amount it refers to. Records are never
//! mutated or removed once stored.
//!
//! # Duplicate Handling
//!
//! If a duplicate transaction ID is encountered, only the first occurrence is
//! stored. Subsequent transactions with the same ID are reported to the caller
//! and otherwise ignored.

use crate::types::{StoredTransaction, TransactionId};
use std::collections::HashMap;

/// Transaction store for dispute lookups
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: HashMap<TransactionId, StoredTransaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        TransactionStore {
            transactions: HashMap::new(),
        }
    }

    /// Store a deposit or withdrawal
    ///
    /// Returns `false` and leaves the existing record in place if `tx_id` was
    /// already stored.
    pub fn store(&mut self, tx_id: TransactionId, tx: StoredTransaction) -> bool {
        match self.transactions.entry(tx_id) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(tx);
                true
            }
        }
    }

    /// Look up a stored transaction
    ///
    /// `None` means the ID was never recorded. Callers treat that as a no-op.
    pub fn get(&self, tx_id: TransactionId) -> Option<&StoredTransaction> {
        self.transactions.get(&tx_id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
