//! Final account snapshot produced by the ledger

use super::account::Account;
use super::transaction::ClientId;

/// One row per referenced client, sorted by client ID
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountReport {
    accounts: Vec<Account>,
}

impl AccountReport {
    /// Build a report, sorting the rows by client ID
    pub fn new(mut accounts: Vec<Account>) -> Self {
        accounts.sort_by_key(|account| account.client);
        AccountReport { accounts }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, client: ClientId) -> Option<&Account> {
        self.accounts
            .binary_search_by_key(&client, |account| account.client)
            .ok()
            .map(|index| &self.accounts[index])
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl<'a> IntoIterator for &'a AccountReport {
    type Item = &'a Account;
    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}
