//! Account state for a single client

use super::transaction::ClientId;
use rust_decimal::Decimal;

/// Client account state
///
/// `total` is not stored; it is always `available + held`.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The client ID (u16: 0-65,535)
    pub client: ClientId,

    /// Funds the client may withdraw or spend
    pub available: Decimal,

    /// Funds frozen while a dispute is open
    pub held: Decimal,

    /// Set once a chargeback has been applied to this client
    pub locked: bool,
}

impl Account {
    /// Create a new account with zero balances and unlocked status
    pub fn new(client: ClientId) -> Self {
        Account {
            client,
            available: Decimal::ZERO,
            held: Decimal::ZERO,
            locked: false,
        }
    }

    /// Total funds (available + held)
    ///
    /// Saturates instead of panicking if the sum is out of range; the ledger
    /// rejects the transitions that could get there.
    pub fn total(&self) -> Decimal {
        self.available.saturating_add(self.held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_zeroed() {
        let account = Account::new(7);
        assert_eq!(account.client, 7);
        assert_eq!(account.available, Decimal::ZERO);
        assert_eq!(account.held, Decimal::ZERO);
        assert_eq!(account.total(), Decimal::ZERO);
        assert!(!account.locked);
    }

    #[test]
    fn test_total_is_available_plus_held() {
        let account = Account {
            client: 1,
            available: Decimal::new(-15, 1),
            held: Decimal::new(40, 1),
            locked: false,
        };
        assert_eq!(account.total(), Decimal::new(25, 1));
    }
}
