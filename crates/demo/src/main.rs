//! Replays the canonical two-player coin-lifecycle scenario against a fresh
//! pool, narrating every step through tracing and dumping the journal as JSON
//! at the end.
//!
//! Run with `RUST_LOG=debug` to also see the individual vend/receive events.

use anyhow::Context;
use coinbank_ledger::{CoinLedger, Holder, parse_supply};

fn main() -> anyhow::Result<()> {
    coinbank_observability::init();

    // Starting supply from the environment, or the default 10,000 coins.
    let ledger = match std::env::var("COINBANK_INITIAL_SUPPLY") {
        Ok(raw) => {
            let supply = parse_supply(&raw).context("COINBANK_INITIAL_SUPPLY is invalid")?;
            CoinLedger::with_supply(supply)
        }
        Err(_) => CoinLedger::new(),
    };
    tracing::info!(ledger = %ledger.id(), available = ledger.available(), "the bank is open");

    let mut player_one = Holder::new(&ledger, 100);
    tracing::info!(
        balance = player_one.balance(),
        available = ledger.available(),
        "a new player joined the game"
    );

    player_one.win(2_000);
    tracing::info!(
        balance = player_one.balance(),
        available = ledger.available(),
        "player one won coins"
    );

    player_one.release();
    tracing::info!(available = ledger.available(), "player one left the game");

    // A second player asks for far more than the pool can cover and is clamped.
    let mut player_two = Holder::new(&ledger, 50_000);
    tracing::info!(
        balance = player_two.balance(),
        available = ledger.available(),
        "a high roller joined and drained the pool"
    );

    player_two.win(100);
    tracing::info!(
        balance = player_two.balance(),
        available = ledger.available(),
        "winning against an empty pool grants nothing"
    );

    drop(player_two);
    tracing::info!(available = ledger.available(), "the high roller left the game");

    let journal = serde_json::to_string_pretty(&ledger.journal())
        .context("failed to serialize the ledger journal")?;
    println!("{journal}");

    Ok(())
}
