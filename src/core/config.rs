//! Policy configuration for the ledger
//!
//! Both switches cover cases where the input may be hostile or where production
//! rules are stricter than plain replay of the log.

/// Configuration for ledger policies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Ignore a dispute, resolve, or chargeback whose client differs from the
    /// client that created the referenced transaction
    pub reject_client_mismatch: bool,
    /// Ignore every record against an account once it is locked
    pub freeze_locked_accounts: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            reject_client_mismatch: true,
            freeze_locked_accounts: false,
        }
    }
}

impl LedgerConfig {
    /// Create a LedgerConfig with custom values
    pub fn new(reject_client_mismatch: bool, freeze_locked_accounts: bool) -> Self {
        Self {
            reject_client_mismatch,
            freeze_locked_accounts,
        }
    }

    pub fn with_reject_client_mismatch(mut self, reject: bool) -> Self {
        self.reject_client_mismatch = reject;
        self
    }

    pub fn with_freeze_locked_accounts(mut self, freeze: bool) -> Self {
        self.freeze_locked_accounts = freeze;
        self
    }
}
