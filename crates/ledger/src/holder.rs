//! A short-lived borrower of coins.

use coinbank_core::{Entity, HolderId};

use crate::ledger::CoinLedger;

/// A participant holding coins borrowed from a [`CoinLedger`].
///
/// A holder withdraws its starting allowance at construction (clamped to what
/// the pool can cover) and owns its balance privately from then on. When a
/// holder's lifetime ends, by explicit [`release`](Holder::release) or plain
/// scope exit, its entire remaining balance goes back to the pool, exactly
/// once, on every exit path. Drop is the cleanup hook; there is no path that
/// leaks the balance.
#[derive(Debug)]
pub struct Holder {
    id: HolderId,
    ledger: CoinLedger,
    balance: u64,
    released: bool,
}

impl Holder {
    /// Join the game with a starting allowance of up to `requested_allowance`
    /// coins from `ledger`.
    pub fn new(ledger: &CoinLedger, requested_allowance: u64) -> Self {
        let balance = ledger.withdraw(requested_allowance);
        let holder = Self {
            id: HolderId::new(),
            ledger: ledger.clone(),
            balance,
            released: false,
        };
        tracing::debug!(
            holder = %holder.id,
            requested = requested_allowance,
            balance,
            "holder joined"
        );
        holder
    }

    pub fn id(&self) -> HolderId {
        self.id
    }

    /// Coins currently in this holder's purse.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Win up to `amount` more coins from the pool.
    ///
    /// Pockets whatever the pool grants; an empty pool grants nothing and the
    /// balance is unchanged.
    pub fn win(&mut self, amount: u64) {
        let granted = self.ledger.withdraw(amount);
        self.balance += granted;
        tracing::debug!(
            holder = %self.id,
            requested = amount,
            granted,
            balance = self.balance,
            "holder won coins"
        );
    }

    /// Return the remaining balance to the pool and retire the holder.
    ///
    /// Dropping a holder has the same effect; this makes the hand-back explicit
    /// at call sites that want it. The holder is consumed, so nothing can be
    /// called on it afterwards.
    pub fn release(mut self) {
        self.settle();
    }

    // Runs at most once per instance, on whichever path ends the holder first.
    fn settle(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let coins = core::mem::take(&mut self.balance);
        self.ledger.deposit(coins);
        tracing::debug!(holder = %self.id, returned = coins, "holder left, balance returned");
    }
}

impl Entity for Holder {
    type Id = HolderId;

    fn id(&self) -> &HolderId {
        &self.id
    }
}

impl Drop for Holder {
    fn drop(&mut self) {
        self.settle();
    }
}
