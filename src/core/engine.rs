//! Ledger engine
//!
//! This module provides the LedgerEngine that applies transaction records in
//! order, coordinating between the AccountManager and the TransactionStore.
//!
//! Transition rules:
//! - deposit: `available += amount`, recorded for later reference
//! - withdrawal: `available -= amount`, recorded for later reference
//! - dispute: `available -= tx.amount; held += tx.amount`
//! - resolve: `available += tx.amount; held -= tx.amount`
//! - chargeback: `held -= tx.amount; locked = true`
//!
//! A dispute-family record that references an unknown transaction is a no-op.
//! The account it names is still created.

use crate::core::account_manager::AccountManager;
use crate::core::config::LedgerConfig;
use crate::core::transaction_store::TransactionStore;
use crate::types::{
    Account, AccountReport, ClientId, LedgerError, StoredTransaction, TransactionId,
    TransactionRecord, TransactionType,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Ledger engine
///
/// Owns the account map and the transaction map for a single run. Engines
/// share nothing, so independent engines can be built per shard or per test.
#[derive(Debug, Default)]
pub struct LedgerEngine {
    account_manager: AccountManager,
    transaction_store: TransactionStore,
    config: LedgerConfig,
}

impl LedgerEngine {
    /// Create an engine with the default policies
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        LedgerEngine {
            account_manager: AccountManager::new(),
            transaction_store: TransactionStore::new(),
            config,
        }
    }

    /// Apply every record in order and return the final report
    ///
    /// Stops at the first error, whether it came from the record source or
    /// from applying a record. No report is produced in that case.
    pub fn process<I>(&mut self, records: I) -> Result<AccountReport, LedgerError>
    where
        I: IntoIterator<Item = Result<TransactionRecord, LedgerError>>,
    {
        let mut applied = 0usize;
        for record in records {
            self.apply(record?)?;
            applied += 1;
        }

        info!(
            records = applied,
            clients = self.account_manager.len(),
            "finished processing transactions"
        );

        Ok(self.report())
    }

    /// Apply a single transaction record
    ///
    /// The referenced client's account is created first, so every client that
    /// appears in the input shows up in the report.
    ///
    /// # Errors
    ///
    /// Returns an error only when a balance would overflow.
    pub fn apply(&mut self, record: TransactionRecord) -> Result<(), LedgerError> {
        let client = record.client();
        self.account_manager.get_or_create_account(client);

        if self.config.freeze_locked_accounts && self.account_manager.is_locked(client) {
            warn!(
                client,
                tx = record.tx(),
                tx_type = %record.tx_type(),
                "ignoring transaction against locked account"
            );
            return Ok(());
        }

        match record {
            TransactionRecord::Deposit { client, tx, amount } => {
                self.account_manager.deposit(client, tx, amount)?;
                self.record(tx, client, amount, TransactionType::Deposit);
            }
            TransactionRecord::Withdrawal { client, tx, amount } => {
                self.account_manager.withdraw(client, tx, amount)?;
                self.record(tx, client, amount, TransactionType::Withdrawal);
            }
            TransactionRecord::Dispute { client, tx } => {
                if let Some(amount) = self.referenced_amount(client, tx, TransactionType::Dispute)
                {
                    self.account_manager.hold_funds(client, tx, amount)?;
                }
            }
            TransactionRecord::Resolve { client, tx } => {
                if let Some(amount) = self.referenced_amount(client, tx, TransactionType::Resolve)
                {
                    self.account_manager.release_funds(client, tx, amount)?;
                }
            }
            TransactionRecord::Chargeback { client, tx } => {
                if let Some(amount) =
                    self.referenced_amount(client, tx, TransactionType::Chargeback)
                {
                    self.account_manager.chargeback(client, tx, amount)?;
                }
            }
        }

        Ok(())
    }

    /// Snapshot of every account referenced so far, sorted by client ID
    pub fn report(&self) -> AccountReport {
        AccountReport::new(
            self.account_manager
                .get_all_accounts()
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    pub fn account(&self, client: ClientId) -> Option<&Account> {
        self.account_manager.get(client)
    }

    pub fn transaction(&self, tx: TransactionId) -> Option<&StoredTransaction> {
        self.transaction_store.get(tx)
    }

    fn record(
        &mut self,
        tx: TransactionId,
        client: ClientId,
        amount: Decimal,
        tx_type: TransactionType,
    ) {
        let stored = StoredTransaction {
            client,
            amount,
            tx_type,
        };

        if !self.transaction_store.store(tx, stored) {
            warn!(
                client,
                tx,
                %tx_type,
                "duplicate transaction id; disputes keep referring to the first one"
            );
        }
    }

    /// Resolve the amount a dispute-family record refers to
    ///
    /// `None` means the record must leave balances unchanged: the transaction
    /// is unknown, or it belongs to another client and mismatches are rejected.
    fn referenced_amount(
        &self,
        client: ClientId,
        tx: TransactionId,
        operation: TransactionType,
    ) -> Option<Decimal> {
        let Some(stored) = self.transaction_store.get(tx) else {
            debug!(client, tx, %operation, "referenced transaction not found");
            return None;
        };

        if stored.client != client && self.config.reject_client_mismatch {
            warn!(
                client,
                tx,
                owner = stored.client,
                %operation,
                "ignoring reference to another client's transaction"
            );
            return None;
        }

        Some(stored.amount)
    }
}
