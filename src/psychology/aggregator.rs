use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::journal::trade_record::TradeRecord;
use crate::models::{Emotion, Leaning, LeaningSide, TradeSide};
use crate::psychology::validation::round2;

/// |leaningValue| above this marks an emotion as directionally biased.
pub const LEANING_THRESHOLD: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SideCounts {
    buy: u64,
    sell: u64,
    null: u64,
}

impl SideCounts {
    fn record(&mut self, side: TradeSide) {
        match side {
            TradeSide::Buy => self.buy += 1,
            TradeSide::Sell => self.sell += 1,
            TradeSide::Unknown => self.null += 1,
        }
    }

    fn total(&self) -> u64 {
        self.buy + self.sell + self.null
    }
}

/// Buy/sell bias of one emotion across the trades it was tagged on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionAggregate {
    pub subject: String,
    pub buy_count: u64,
    pub sell_count: u64,
    pub null_count: u64,
    pub total_trades: u64,
    pub leaning_value: f64,
    pub value: f64,
    pub leaning: Leaning,
    pub side: LeaningSide,
}

impl EmotionAggregate {
    pub fn from_counts(subject: impl Into<String>, buy: u64, sell: u64, null: u64) -> Self {
        let total = buy + sell + null;
        let leaning_value = if total == 0 {
            0.0
        } else {
            round2((buy as f64 - sell as f64) / total as f64 * 100.0)
        };

        let leaning = if leaning_value > LEANING_THRESHOLD {
            Leaning::BuyLeaning
        } else if leaning_value < -LEANING_THRESHOLD {
            Leaning::SellLeaning
        } else {
            Leaning::Balanced
        };

        Self {
            subject: subject.into(),
            buy_count: buy,
            sell_count: sell,
            null_count: null,
            total_trades: total,
            leaning_value,
            value: leaning_value.abs(),
            leaning,
            side: leaning.side(),
        }
    }
}

/// Counts every recognised emotion tag by trade side.
///
/// Single pass over the trades into a fixed per-emotion table, so the cost is
/// linear in trades times tags. Emotions never seen are left out; the rest
/// are reported in [`Emotion::ALL`] order.
pub fn aggregate(trades: &[TradeRecord]) -> Vec<EmotionAggregate> {
    let mut table = [SideCounts::default(); Emotion::COUNT];

    for trade in trades {
        for emotion in trade.emotion_tags.emotions() {
            table[emotion.index()].record(trade.side);
        }
    }

    Emotion::ALL
        .iter()
        .zip(table.iter())
        .filter(|(_, counts)| counts.total() > 0)
        .map(|(emotion, c)| EmotionAggregate::from_counts(emotion.as_str(), c.buy, c.sell, c.null))
        .collect()
}

/// [`aggregate`] over an untrusted JSON payload (null, non-array, or rows of
/// mixed quality).
pub fn aggregate_json(payload: &Value) -> Vec<EmotionAggregate> {
    aggregate(&TradeRecord::parse_lenient(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{trade, trades_with};
    use serde_json::json;

    fn find<'a>(aggs: &'a [EmotionAggregate], subject: &str) -> &'a EmotionAggregate {
        aggs.iter()
            .find(|a| a.subject == subject)
            .unwrap_or_else(|| panic!("no aggregate for {}", subject))
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate_json(&json!(null)).is_empty());
        assert!(aggregate_json(&json!("garbage")).is_empty());
    }

    #[test]
    fn two_buys_one_sell_leans_buy() {
        let trades = vec![
            trade(TradeSide::Buy, &["FOMO"]),
            trade(TradeSide::Buy, &["FOMO"]),
            trade(TradeSide::Sell, &["FOMO"]),
        ];
        let aggs = aggregate(&trades);
        assert_eq!(aggs.len(), 1);
        let fomo = &aggs[0];
        assert_eq!(fomo.subject, "FOMO");
        assert_eq!(fomo.buy_count, 2);
        assert_eq!(fomo.sell_count, 1);
        assert_eq!(fomo.null_count, 0);
        assert_eq!(fomo.total_trades, 3);
        assert_eq!(fomo.leaning_value, 33.33);
        assert_eq!(fomo.value, 33.33);
        assert_eq!(fomo.leaning, Leaning::BuyLeaning);
        assert_eq!(fomo.side, LeaningSide::Buy);
    }

    #[test]
    fn multiple_tags_fan_out() {
        let aggs = aggregate(&[trade(TradeSide::Buy, &["FOMO", "TILT"])]);
        assert_eq!(find(&aggs, "FOMO").buy_count, 1);
        assert_eq!(find(&aggs, "TILT").buy_count, 1);
    }

    #[test]
    fn unknown_tags_never_create_entries() {
        let aggs = aggregate(&[
            trade(TradeSide::Buy, &["MADE_UP_EMOTION"]),
            trade(TradeSide::Sell, &["", "   "]),
        ]);
        assert!(aggs.is_empty());
    }

    #[test]
    fn unknown_side_is_balanced() {
        let aggs = aggregate(&trades_with(TradeSide::Unknown, &["REGRET"], 4));
        let regret = find(&aggs, "REGRET");
        assert_eq!(regret.null_count, 4);
        assert_eq!(regret.leaning_value, 0.0);
        assert_eq!(regret.leaning, Leaning::Balanced);
        assert_eq!(regret.side, LeaningSide::Null);
    }

    #[test]
    fn sell_heavy_emotion_leans_sell() {
        let mut trades = trades_with(TradeSide::Sell, &["revenge"], 3);
        trades.push(trade(TradeSide::Buy, &["Revenge"]));
        let revenge = aggregate(&trades).remove(0);
        assert_eq!(revenge.leaning_value, -50.0);
        assert_eq!(revenge.value, 50.0);
        assert_eq!(revenge.leaning, Leaning::SellLeaning);
        assert_eq!(revenge.side, LeaningSide::Sell);
    }

    #[test]
    fn threshold_boundary_is_balanced() {
        // 23 buy / 17 sell over 40 trades = exactly +15.
        let mut trades = trades_with(TradeSide::Buy, &["PATIENCE"], 23);
        trades.extend(trades_with(TradeSide::Sell, &["PATIENCE"], 17));
        let patience = aggregate(&trades).remove(0);
        assert_eq!(patience.leaning_value, 15.0);
        assert_eq!(patience.leaning, Leaning::Balanced);
    }

    #[test]
    fn negative_threshold_boundary_is_balanced() {
        // 17 buy / 23 sell over 40 trades = exactly -15.
        let mut trades = trades_with(TradeSide::Buy, &["PATIENCE"], 17);
        trades.extend(trades_with(TradeSide::Sell, &["PATIENCE"], 23));
        let patience = aggregate(&trades).remove(0);
        assert_eq!(patience.leaning_value, -15.0);
        assert_eq!(patience.leaning, Leaning::Balanced);
        assert_eq!(patience.side, LeaningSide::Null);
        assert_eq!(patience.value, 15.0);
    }

    #[test]
    fn output_follows_whitelist_order() {
        let aggs = aggregate(&[
            trade(TradeSide::Buy, &["NEUTRAL"]),
            trade(TradeSide::Buy, &["FOMO"]),
            trade(TradeSide::Buy, &["DISCIPLINE"]),
        ]);
        let subjects: Vec<&str> = aggs.iter().map(|a| a.subject.as_str()).collect();
        assert_eq!(subjects, vec!["FOMO", "DISCIPLINE", "NEUTRAL"]);
    }

    #[test]
    fn repeated_tag_on_one_trade_counts_once() {
        let aggs = aggregate(&[trade(TradeSide::Buy, &["TILT", "tilt", " TILT "])]);
        assert_eq!(find(&aggs, "TILT").total_trades, 1);
    }

    #[test]
    fn json_payload_with_mixed_tag_shapes() {
        let payload = json!([
            {"side": "Buy", "emotionTags": ["fomo"]},
            {"side": "Buy", "emotionTags": "[\"FOMO\", \"anxious\"]"},
            {"side": "Sell", "emotionTags": "fomo"},
            {"side": "sideways", "emotionTags": "\"Anxious\""},
            7,
            {"side": "Buy", "emotionTags": 99}
        ]);
        let aggs = aggregate_json(&payload);
        let fomo = find(&aggs, "FOMO");
        assert_eq!((fomo.buy_count, fomo.sell_count, fomo.null_count), (2, 1, 0));
        let anxious = find(&aggs, "ANXIOUS");
        assert_eq!((anxious.buy_count, anxious.sell_count, anxious.null_count), (1, 0, 1));
        assert_eq!(anxious.leaning_value, 50.0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let mut trades = trades_with(TradeSide::Buy, &["FOMO", "TILT"], 5);
        trades.extend(trades_with(TradeSide::Sell, &["TILT", "REGRET"], 3));
        trades.extend(trades_with(TradeSide::Unknown, &["NEUTRAL"], 2));
        assert_eq!(aggregate(&trades), aggregate(&trades));
    }

    #[test]
    fn degenerate_entry_is_zeroed() {
        let agg = EmotionAggregate::from_counts("TILT", 0, 0, 0);
        assert_eq!(agg.total_trades, 0);
        assert_eq!(agg.leaning_value, 0.0);
        assert_eq!(agg.leaning, Leaning::Balanced);
    }

    #[test]
    fn serializes_to_wire_shape() {
        let agg = EmotionAggregate::from_counts("FOMO", 2, 1, 0);
        let v = serde_json::to_value(&agg).unwrap();
        assert_eq!(v["subject"], "FOMO");
        assert_eq!(v["buyCount"], 2);
        assert_eq!(v["nullCount"], 0);
        assert_eq!(v["totalTrades"], 3);
        assert_eq!(v["leaningValue"], 33.33);
        assert_eq!(v["leaning"], "Buy Leaning");
        assert_eq!(v["side"], "Buy");
    }
}
