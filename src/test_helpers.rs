use chrono::{DateTime, Utc};

use crate::journal::TradeRecord;
use crate::models::TradeSide;

/// A bare trade with the given side and emotion tags.
pub fn trade(side: TradeSide, tags: &[&str]) -> TradeRecord {
    TradeRecord::new(side, tags)
}

/// `n` identical trades.
pub fn trades_with(side: TradeSide, tags: &[&str], n: usize) -> Vec<TradeRecord> {
    (0..n).map(|_| trade(side, tags)).collect()
}

/// An untagged buy dated at the given RFC 3339 instant.
pub fn dated_trade(rfc3339: &str) -> TradeRecord {
    let date = DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc);
    TradeRecord {
        trade_date: Some(date),
        ..trade(TradeSide::Buy, &[])
    }
}

/// A trade carrying size, price and realised PnL.
pub fn priced_trade(
    side: TradeSide,
    quantity: f64,
    entry_price: f64,
    pnl: f64,
    tags: &[&str],
) -> TradeRecord {
    TradeRecord {
        quantity: Some(quantity),
        entry_price: Some(entry_price),
        pnl: Some(pnl),
        ..trade(side, tags)
    }
}
