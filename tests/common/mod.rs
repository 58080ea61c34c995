use serde_json::json;
use trade_journal_psych::journal::TradeRecord;
use trade_journal_psych::models::TradeSide;

/// A trade with the given side and emotion tags.
pub fn trade(side: TradeSide, tags: &[&str]) -> TradeRecord {
    TradeRecord::new(side, tags)
}

/// Build a journal of `n` trades cycling through sides and tag shapes,
/// including the legacy JSON-string encoding.
pub fn mixed_journal(n: usize) -> Vec<TradeRecord> {
    let sides = [TradeSide::Buy, TradeSide::Sell, TradeSide::Unknown, TradeSide::Buy];
    let tag_sets: [serde_json::Value; 6] = [
        json!(["FOMO", "TILT"]),
        json!("[\"revenge\", \"overrisk\"]"),
        json!(" patience "),
        json!(["DISCIPLINE", "CONFIDENT", "NOT_AN_EMOTION"]),
        json!(["anxious", "regret", "neutral"]),
        json!(null),
    ];

    (0..n)
        .map(|i| {
            let account = if i % 3 == 0 { "alpha" } else { "beta" };
            let pnl = if i % 4 == 0 { -10.0 } else { 15.0 };
            let row = json!({
                "id": format!("t{}", i),
                "accountId": account,
                "side": sides[i % sides.len()].to_string(),
                "emotionTags": tag_sets[i % tag_sets.len()].clone(),
                "quantity": 1.0 + (i % 5) as f64,
                "entryPrice": 100.0,
                "pnl": pnl,
            });
            TradeRecord::from_value(&row).expect("fixture row must parse")
        })
        .collect()
}
