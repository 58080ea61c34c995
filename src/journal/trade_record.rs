use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::models::TradeSide;
use crate::psychology::tags::RawEmotionTags;

/// One journaled trade as handed over by the persistence layer.
///
/// Only `side` and `emotion_tags` drive the psychology engine; the rest feed
/// the statistics response and the filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    #[serde(default, deserialize_with = "lenient_label")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub account_id: Option<String>,
    #[serde(default, alias = "market", deserialize_with = "lenient_label")]
    pub symbol: Option<String>,
    #[serde(default)]
    pub side: TradeSide,
    #[serde(default, alias = "emotion_tags", alias = "emotionalState")]
    pub emotion_tags: RawEmotionTags,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub entry_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pnl: Option<f64>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub trade_date: Option<DateTime<Utc>>,
}

impl TradeRecord {
    pub fn new(side: TradeSide, tags: &[&str]) -> Self {
        Self {
            side,
            emotion_tags: RawEmotionTags::from_labels(tags.iter().copied()),
            ..Default::default()
        }
    }

    /// Parses one raw row, returning `None` for anything that is not a
    /// well-formed record object.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            debug!("Skipping non-object trade row: {}", value);
            return None;
        }
        match TradeRecord::deserialize(value) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Skipping malformed trade row: {}", e);
                None
            }
        }
    }

    /// Tolerant batch parse: `null` or a non-array payload gives no records,
    /// malformed rows are dropped.
    pub fn parse_lenient(payload: &Value) -> Vec<Self> {
        match payload {
            Value::Array(rows) => rows.iter().filter_map(TradeRecord::from_value).collect(),
            Value::Null => Vec::new(),
            other => {
                debug!("Trade payload is not an array ({})", json_kind(other));
                Vec::new()
            }
        }
    }

    pub fn notional(&self) -> Option<f64> {
        let qty = self.quantity.filter(|q| q.is_finite())?;
        match self.entry_price.filter(|p| p.is_finite()) {
            Some(price) => Some((qty * price).abs()),
            None => Some(qty.abs()),
        }
    }
}

// Journal-only fields never reject a row: a value of the wrong shape reads
// as missing.

/// String or number (database keys often arrive as integers).
fn lenient_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Number, or a string holding one (decimal columns come back as text).
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

/// RFC 3339 instant, or a bare `YYYY-MM-DD` taken as midnight UTC.
fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let Value::String(raw) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc()))
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
