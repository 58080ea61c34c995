use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::journal::trade_record::TradeRecord;
use crate::models::TradeSide;

/// Query narrowing applied before aggregation. Every unset field matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeFilter {
    #[serde(default)]
    pub side: Option<TradeSide>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub emotion: Option<String>,
}

impl TradeFilter {
    pub fn is_empty(&self) -> bool {
        self == &TradeFilter::default()
    }

    pub fn matches(&self, trade: &TradeRecord) -> bool {
        if let Some(side) = self.side {
            if trade.side != side {
                return false;
            }
        }

        if let Some(market) = &self.market {
            match &trade.symbol {
                Some(symbol) if symbol.trim().eq_ignore_ascii_case(market.trim()) => {}
                _ => return false,
            }
        }

        // Date bounds are inclusive; undated trades fail any bound.
        if self.from.is_some() || self.to.is_some() {
            let Some(date) = trade.trade_date else {
                return false;
            };
            if self.from.is_some_and(|from| date < from) {
                return false;
            }
            if self.to.is_some_and(|to| date > to) {
                return false;
            }
        }

        if let Some(emotion) = &self.emotion {
            if !trade.emotion_tags.contains(emotion) {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, trades: &[TradeRecord]) -> Vec<TradeRecord> {
        trades.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}
