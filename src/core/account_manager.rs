//! Account management module
//!
//! This module provides the `AccountManager` struct which maintains the state
//! of all client accounts and applies balance movements to them.
//!
//! The AccountManager is responsible for:
//! - Creating new accounts on first reference
//! - Moving funds between available and held
//! - Setting the locked flag on chargeback
//! - Providing sorted account listings for output
//!
//! No operation here checks for sufficient funds. Balances are signed and may
//! go negative; only arithmetic overflow is rejected.

use crate::types::{Account, ClientId, LedgerError, TransactionId};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Manages all client accounts and their states
#[derive(Debug, Default)]
pub struct AccountManager {
    accounts: HashMap<ClientId, Account>,
}

impl AccountManager {
    pub fn new() -> Self {
        AccountManager {
            accounts: HashMap::new(),
        }
    }

    /// Get or create an account for the specified client
    ///
    /// A missing account is created with zero balances and unlocked status.
    pub fn get_or_create_account(&mut self, client: ClientId) -> &mut Account {
        self.accounts
            .entry(client)
            .or_insert_with(|| Account::new(client))
    }

    pub fn get(&self, client: ClientId) -> Option<&Account> {
        self.accounts.get(&client)
    }

    /// Returns `false` for clients that have no account yet
    pub fn is_locked(&self, client: ClientId) -> bool {
        self.accounts
            .get(&client)
            .is_some_and(|account| account.locked)
    }

    /// Get all accounts sorted by client ID
    pub fn get_all_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.client);
        accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// `available += amount`
    pub fn deposit(
        &mut self,
        client: ClientId,
        tx: TransactionId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let account = self.get_or_create_account(client);

        account.available = account
            .available
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", client, tx))?;

        Ok(())
    }

    /// `available -= amount`
    pub fn withdraw(
        &mut self,
        client: ClientId,
        tx: TransactionId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let account = self.get_or_create_account(client);

        account.available = account
            .available
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", client, tx))?;

        Ok(())
    }

    /// Move funds from available to held (dispute)
    ///
    /// Both new balances are computed before either is written, so a failed
    /// hold leaves the account untouched.
    pub fn hold_funds(
        &mut self,
        client: ClientId,
        tx: TransactionId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let account = self.get_or_create_account(client);

        let new_available = account
            .available
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("dispute", client, tx))?;

        let new_held = account
            .held
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("dispute", client, tx))?;

        account.available = new_available;
        account.held = new_held;

        Ok(())
    }

    /// Move funds from held to available (resolve)
    pub fn release_funds(
        &mut self,
        client: ClientId,
        tx: TransactionId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let account = self.get_or_create_account(client);

        let new_held = account
            .held
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("resolve", client, tx))?;

        let new_available = account
            .available
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("resolve", client, tx))?;

        account.held = new_held;
        account.available = new_available;

        Ok(())
    }

    /// Remove held funds and lock the account (chargeback)
    ///
    /// `available` is left where it was.
    pub fn chargeback(
        &mut self,
        client: ClientId,
        tx: TransactionId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let account = self.get_or_create_account(client);

        account.held = account
            .held
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("chargeback", client, tx))?;
        account.locked = true;

        Ok(())
    }
}
