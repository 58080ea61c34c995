use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Emotion;

/// Emotion tags exactly as they arrive from the journal store.
///
/// Older exports wrote the tag list as a JSON-encoded string, some clients
/// send a bare string, and a few rows carry garbage. Every shape is accepted
/// and [`RawEmotionTags::normalize`] reduces it to canonical labels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEmotionTags {
    #[default]
    Missing,
    List(Vec<Value>),
    Text(String),
    Other(Value),
}

impl RawEmotionTags {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawEmotionTags::List(
            labels
                .into_iter()
                .map(|s| Value::String(s.into()))
                .collect(),
        )
    }

    /// Trimmed, upper-cased, non-empty tags. Unknown labels are kept here;
    /// whitelisting happens in [`RawEmotionTags::emotions`].
    pub fn normalize(&self) -> Vec<String> {
        match self {
            RawEmotionTags::Missing | RawEmotionTags::Other(_) => Vec::new(),
            RawEmotionTags::List(items) => normalize_items(items),
            RawEmotionTags::Text(raw) => normalize_text(raw),
        }
    }

    /// Recognised emotions on this trade, each listed once, in tag order.
    pub fn emotions(&self) -> Vec<Emotion> {
        let mut out: Vec<Emotion> = Vec::new();
        for tag in self.normalize() {
            if let Some(emotion) = Emotion::from_label(&tag) {
                if !out.contains(&emotion) {
                    out.push(emotion);
                }
            }
        }
        out
    }

    pub fn contains(&self, label: &str) -> bool {
        match canonical(label) {
            Some(wanted) => self.normalize().iter().any(|t| *t == wanted),
            None => false,
        }
    }
}

fn normalize_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.as_str())
        .filter_map(canonical)
        .collect()
}

fn normalize_text(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => normalize_items(&items),
        Ok(Value::String(inner)) => canonical(&inner).into_iter().collect(),
        _ => canonical(raw).into_iter().collect(),
    }
}

fn canonical(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}
