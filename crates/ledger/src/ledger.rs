//! The shared coin pool.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use coinbank_core::{DomainError, DomainResult, LedgerId};

use crate::journal::LedgerEntry;

/// Coins in circulation for a freshly opened pool.
pub const DEFAULT_SUPPLY: u64 = 10_000;

/// Parse a starting supply from text (e.g. an environment variable).
pub fn parse_supply(raw: &str) -> DomainResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| DomainError::validation(format!("starting supply {raw:?}: {e}")))
}

/// Interior state, always accessed under the lock.
#[derive(Debug)]
struct Vault {
    available: u64,
    initial_supply: u64,
    journal: Vec<LedgerEntry>,
}

/// A shared pool of coins with a bounded starting supply.
///
/// `CoinLedger` is a cheap handle: cloning it yields another handle onto the
/// same pool. There is no process-wide instance; pass the handle explicitly to
/// whoever needs coins. Access is serialized through a mutex, so handles can
/// be shared across threads.
///
/// Both operations are total: a withdrawal grants at most what is available
/// (zero included) and a deposit always succeeds. `available` can never go
/// negative; it *can* exceed the initial supply, because deposits are not
/// capped (see [`CoinLedger::deposit`]).
#[derive(Debug, Clone)]
pub struct CoinLedger {
    id: LedgerId,
    vault: Arc<Mutex<Vault>>,
}

impl CoinLedger {
    /// Open a pool with the default supply of 10,000 coins.
    pub fn new() -> Self {
        Self::with_supply(DEFAULT_SUPPLY)
    }

    /// Open a pool with a custom starting supply.
    pub fn with_supply(initial_supply: u64) -> Self {
        let ledger = Self {
            id: LedgerId::new(),
            vault: Arc::new(Mutex::new(Vault {
                available: initial_supply,
                initial_supply,
                journal: Vec::new(),
            })),
        };
        tracing::debug!(ledger = %ledger.id, initial_supply, "pool opened");
        ledger
    }

    pub fn id(&self) -> LedgerId {
        self.id
    }

    /// Coins currently sitting in the pool.
    pub fn available(&self) -> u64 {
        self.lock().available
    }

    /// The supply the pool was opened with.
    pub fn initial_supply(&self) -> u64 {
        self.lock().initial_supply
    }

    /// Snapshot of every movement recorded so far, in order.
    pub fn journal(&self) -> Vec<LedgerEntry> {
        self.lock().journal.clone()
    }

    /// Hand out up to `requested` coins.
    ///
    /// Grants `min(requested, available)` and returns the grant. Never fails
    /// and never over-draws: an empty pool grants zero.
    pub fn withdraw(&self, requested: u64) -> u64 {
        let mut vault = self.lock();
        let granted = requested.min(vault.available);
        vault.available -= granted;
        vault.journal.push(LedgerEntry::vend(requested, granted));
        tracing::debug!(
            ledger = %self.id,
            requested,
            granted,
            available = vault.available,
            "coins vended"
        );
        granted
    }

    /// Put `amount` coins back into the pool.
    ///
    /// Unconditional: the pool does not enforce an upper bound, so repeated
    /// deposits can push `available` past the initial supply. Callers that need
    /// conservation get it by only depositing what they previously withdrew.
    pub fn deposit(&self, amount: u64) {
        let mut vault = self.lock();
        vault.available = vault.available.saturating_add(amount);
        vault.journal.push(LedgerEntry::receive(amount));
        tracing::debug!(
            ledger = %self.id,
            amount,
            available = vault.available,
            "coins received"
        );
    }

    // A poisoned lock still holds a consistent count (the vault is plain
    // counters, never left mid-update), so recover the guard instead of
    // propagating a panic into total operations.
    fn lock(&self) -> MutexGuard<'_, Vault> {
        self.vault.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CoinLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::EntryKind;
    use proptest::prelude::*;

    #[test]
    fn supply_parses_from_plain_digits() {
        assert_eq!(parse_supply("10000").unwrap(), 10_000);
        assert_eq!(parse_supply(" 250 ").unwrap(), 250);
    }

    #[test]
    fn malformed_supply_reports_validation() {
        let err = parse_supply("lots").unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("lots")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn withdraw_grants_what_was_requested_when_covered() {
        let ledger = CoinLedger::new();
        assert_eq!(ledger.withdraw(100), 100);
        assert_eq!(ledger.available(), 9_900);
    }

    #[test]
    fn withdraw_clamps_to_the_available_supply() {
        let ledger = CoinLedger::with_supply(250);
        assert_eq!(ledger.withdraw(1_000), 250);
        assert_eq!(ledger.available(), 0);
        // Empty pool grants zero, unconditionally.
        assert_eq!(ledger.withdraw(1), 0);
        assert_eq!(ledger.available(), 0);
    }

    #[test]
    fn deposit_restores_withdrawn_coins() {
        let ledger = CoinLedger::new();
        let granted = ledger.withdraw(4_000);
        ledger.deposit(granted);
        assert_eq!(ledger.available(), DEFAULT_SUPPLY);
    }

    // Deposits are deliberately uncapped, so the pool can end up holding more
    // than it started with. Callers, not the pool, enforce conservation.
    #[test]
    fn deposit_can_push_available_past_the_initial_supply() {
        let ledger = CoinLedger::with_supply(100);
        ledger.deposit(50);
        assert!(ledger.available() > ledger.initial_supply());
        assert_eq!(ledger.available(), 150);
    }

    #[test]
    fn journal_records_every_movement_in_order() {
        let ledger = CoinLedger::with_supply(10);
        ledger.withdraw(25);
        ledger.deposit(7);

        let journal = ledger.journal();
        assert_eq!(journal.len(), 2);
        assert_eq!(
            journal[0].kind,
            EntryKind::Vend {
                requested: 25,
                granted: 10
            }
        );
        assert_eq!(journal[1].kind, EntryKind::Receive { amount: 7 });
    }

    proptest! {
        /// Property: withdraw(requested) returns min(requested, available) and
        /// decrements the pool by exactly the grant.
        #[test]
        fn withdraw_grants_min_of_request_and_supply(
            supply in 0u64..50_000,
            requested in 0u64..50_000,
        ) {
            let ledger = CoinLedger::with_supply(supply);
            let granted = ledger.withdraw(requested);
            prop_assert_eq!(granted, requested.min(supply));
            prop_assert_eq!(ledger.available(), supply - granted);
        }

        /// Property: the journal balances; initial supply plus the net of all
        /// recorded movements equals the live count, for any interleaving of
        /// withdrawals and deposits.
        #[test]
        fn journal_conservation_holds_for_any_op_sequence(
            supply in 0u64..50_000,
            ops in prop::collection::vec((any::<bool>(), 0u64..5_000), 0..40),
        ) {
            let ledger = CoinLedger::with_supply(supply);
            for (is_withdraw, amount) in ops {
                if is_withdraw {
                    ledger.withdraw(amount);
                } else {
                    ledger.deposit(amount);
                }
            }

            let net: i128 = ledger.journal().iter().map(LedgerEntry::delta).sum();
            prop_assert_eq!(supply as i128 + net, ledger.available() as i128);
        }
    }
}
