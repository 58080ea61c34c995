pub mod filter;
pub mod loader;
pub mod report;
pub mod stats;
pub mod trade_record;

pub use filter::TradeFilter;
pub use loader::load_trades;
pub use report::{build_reports, group_by_account, JournalReport};
pub use stats::{PsychologySnapshot, TradingStatistics};
pub use trade_record::TradeRecord;
