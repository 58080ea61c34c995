use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use trade_journal_psych::config::Config;
use trade_journal_psych::journal::{build_reports, load_trades};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let trades = load_trades(&cfg.trades_file)
        .with_context(|| format!("loading trades from {}", cfg.trades_file.display()))?;

    if !cfg.filter.is_empty() {
        info!("Applying filter: {:?}", cfg.filter);
    }

    let last_sync = cfg
        .last_sync_ms
        .unwrap_or_else(|| Utc::now().timestamp_millis());

    let reports = build_reports(trades, &cfg.filter, last_sync, cfg.workers)
        .await
        .context("building journal reports")?;

    if reports.is_empty() {
        warn!("No trades left to report on");
    }
    for r in &reports {
        info!(
            "{}: {} trades, discipline {:.2}, tilt control {:.2}",
            r.account_id,
            r.statistics.total_trades,
            r.psychology.discipline_level,
            r.psychology.tilt_control
        );
    }

    let out = if cfg.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{}", out);

    Ok(())
}
