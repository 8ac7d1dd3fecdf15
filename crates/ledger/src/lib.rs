//! `coinbank-ledger` — a shared pool of coins with a bounded starting supply,
//! and the short-lived holders that borrow from and return to it.
//!
//! The pool is an explicitly passed, owned context object (not a process-wide
//! static): create a [`CoinLedger`], hand clones of the handle to whoever needs
//! one. A [`Holder`] borrows coins at construction and hands its remainder back
//! when it goes out of scope.

pub mod holder;
pub mod journal;
pub mod ledger;

pub use holder::Holder;
pub use journal::{EntryKind, LedgerEntry};
pub use ledger::{CoinLedger, DEFAULT_SUPPLY, parse_supply};
