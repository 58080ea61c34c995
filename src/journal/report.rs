use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::debug;

use crate::error::Result;
use crate::journal::filter::TradeFilter;
use crate::journal::stats::{PsychologySnapshot, TradingStatistics};
use crate::journal::trade_record::TradeRecord;
use crate::psychology::{synthesize, StabilityMetrics};

/// Account key for trades exported without one.
pub const UNASSIGNED_ACCOUNT: &str = "unassigned";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalReport {
    pub account_id: String,
    pub statistics: TradingStatistics,
    pub psychology: PsychologySnapshot,
    pub stability: StabilityMetrics,
}

impl JournalReport {
    pub fn build(account_id: impl Into<String>, trades: &[TradeRecord], last_sync_time: i64) -> Self {
        let statistics = TradingStatistics::compute(trades, last_sync_time);
        let stability = synthesize(&statistics.emotional_data);
        Self {
            account_id: account_id.into(),
            psychology: PsychologySnapshot::from(&stability),
            statistics,
            stability,
        }
    }
}

pub fn group_by_account(trades: Vec<TradeRecord>) -> BTreeMap<String, Vec<TradeRecord>> {
    let mut groups: BTreeMap<String, Vec<TradeRecord>> = BTreeMap::new();
    for trade in trades {
        let key = trade
            .account_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNASSIGNED_ACCOUNT)
            .to_string();
        groups.entry(key).or_default().push(trade);
    }
    groups
}

/// Filters, groups by account and builds every account's report on the
/// blocking pool, at most `workers` at a time. Reports come back sorted by
/// account id.
pub async fn build_reports(
    trades: Vec<TradeRecord>,
    filter: &TradeFilter,
    last_sync_time: i64,
    workers: usize,
) -> Result<Vec<JournalReport>> {
    let trades = if filter.is_empty() {
        trades
    } else {
        filter.apply(&trades)
    };

    let permits = Arc::new(Semaphore::new(workers.max(1)));
    let mut join_set: JoinSet<std::result::Result<JournalReport, JoinError>> = JoinSet::new();

    for (account, account_trades) in group_by_account(trades) {
        let permits = Arc::clone(&permits);
        join_set.spawn(async move {
            let _permit = permits.acquire_owned().await.ok();
            debug!("Building report for {} ({} trades)", account, account_trades.len());
            let handle = tokio::task::spawn_blocking(move || {
                JournalReport::build(account, &account_trades, last_sync_time)
            });
            handle.await
        });
    }

    let mut reports = Vec::new();
    while let Some(joined) = join_set.join_next().await {
        reports.push(joined??);
    }
    reports.sort_by(|a, b| a.account_id.cmp(&b.account_id));
    Ok(reports)
}
