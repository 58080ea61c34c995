use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::journal::TradeFilter;
use crate::models::TradeSide;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Input
    pub trades_file: PathBuf,
    pub filter: TradeFilter,

    // Output
    pub pretty: bool,
    pub last_sync_ms: Option<i64>,

    // Concurrency
    pub workers: usize,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparseable values
    /// fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| default.to_string())
        };
        let opt = |key: &str| -> Option<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let date = |key: &str| -> Option<DateTime<Utc>> { opt(key).and_then(|v| v.parse().ok()) };

        let filter = TradeFilter {
            side: opt("JOURNAL_FILTER_SIDE")
                .map(|s| TradeSide::from_label(&s))
                .filter(|s| *s != TradeSide::Unknown),
            market: opt("JOURNAL_FILTER_MARKET"),
            from: date("JOURNAL_FILTER_FROM"),
            to: date("JOURNAL_FILTER_TO"),
            emotion: opt("JOURNAL_FILTER_EMOTION"),
        };

        Config {
            trades_file: PathBuf::from(env("JOURNAL_TRADES_FILE", "trades.json")),
            filter,
            pretty: env("JOURNAL_PRETTY", "true").to_lowercase() == "true",
            last_sync_ms: opt("JOURNAL_LAST_SYNC_MS").and_then(|v| v.parse().ok()),
            workers: env("JOURNAL_WORKERS", "4").parse::<usize>().unwrap_or(4).max(1),
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }
}
