use serde::{Deserialize, Serialize};

use crate::journal::trade_record::TradeRecord;
use crate::psychology::validation::round2;
use crate::psychology::{aggregate, synthesize, EmotionAggregate, StabilityMetrics};

/// Statistics response served to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingStatistics {
    pub total_trades: usize,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    pub win_rate: f64,
    pub avg_trade_size: f64,
    pub last_sync_time: i64,
    pub emotional_data: Vec<EmotionAggregate>,
}

impl TradingStatistics {
    /// `last_sync_time` (epoch ms) comes from the caller so this stays a pure
    /// function of its inputs.
    pub fn compute(trades: &[TradeRecord], last_sync_time: i64) -> Self {
        let pnls: Vec<f64> = trades
            .iter()
            .filter_map(|t| t.pnl)
            .filter(|p| p.is_finite())
            .collect();
        let total_pnl: f64 = pnls.iter().sum();
        let wins = pnls.iter().filter(|&&p| p > 0.0).count();
        let win_rate = if pnls.is_empty() {
            0.0
        } else {
            wins as f64 / pnls.len() as f64 * 100.0
        };

        let sizes: Vec<f64> = trades.iter().filter_map(TradeRecord::notional).collect();
        let avg_trade_size = if sizes.is_empty() {
            0.0
        } else {
            sizes.iter().sum::<f64>() / sizes.len() as f64
        };

        Self {
            total_trades: trades.len(),
            total_pnl: round2(total_pnl),
            win_rate: round2(win_rate),
            avg_trade_size: round2(avg_trade_size),
            last_sync_time,
            emotional_data: aggregate(trades),
        }
    }
}

/// The `{disciplineLevel, tiltControl}` pair rendered as progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychologySnapshot {
    pub discipline_level: f64,
    pub tilt_control: f64,
}

impl PsychologySnapshot {
    pub fn from_aggregates(aggregates: &[EmotionAggregate]) -> Self {
        Self::from(&synthesize(aggregates))
    }
}

impl From<&StabilityMetrics> for PsychologySnapshot {
    fn from(m: &StabilityMetrics) -> Self {
        Self {
            discipline_level: m.discipline_level,
            tilt_control: m.tilt_control,
        }
    }
}
