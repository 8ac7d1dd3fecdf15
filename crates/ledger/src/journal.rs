//! Append-only record of pool movements.
//!
//! Every `withdraw`/`deposit` on a [`CoinLedger`](crate::ledger::CoinLedger)
//! appends one entry. Entries are immutable facts; balances can always be
//! re-derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Coins left the pool. `granted` is clamped to what was available, so it
    /// may be less than `requested` (down to zero).
    Vend { requested: u64, granted: u64 },
    /// Coins came back into the pool.
    Receive { amount: u64 },
}

/// One journal line: a pool movement plus its business time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub kind: EntryKind,
    pub occurred_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub(crate) fn vend(requested: u64, granted: u64) -> Self {
        Self {
            kind: EntryKind::Vend { requested, granted },
            occurred_at: Utc::now(),
        }
    }

    pub(crate) fn receive(amount: u64) -> Self {
        Self {
            kind: EntryKind::Receive { amount },
            occurred_at: Utc::now(),
        }
    }

    /// Net effect of this entry on the pool (coins out are negative).
    ///
    /// Wide signed type so sums over long journals cannot overflow.
    pub fn delta(&self) -> i128 {
        match self.kind {
            EntryKind::Vend { granted, .. } => -(granted as i128),
            EntryKind::Receive { amount } => amount as i128,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_negative_for_vends_and_positive_for_receives() {
        assert_eq!(LedgerEntry::vend(500, 300).delta(), -300);
        assert_eq!(LedgerEntry::receive(300).delta(), 300);
    }

    #[test]
    fn vend_delta_counts_the_grant_not_the_request() {
        // A fully clamped vend moved nothing.
        assert_eq!(LedgerEntry::vend(1_000, 0).delta(), 0);
    }
}
