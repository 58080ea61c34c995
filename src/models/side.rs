use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Side of a journaled trade. Anything other than an exact `Buy` / `Sell`
/// (wrong case, wrong JSON type, missing) is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TradeSide {
    Buy,
    Sell,
    #[default]
    Unknown,
}

impl TradeSide {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Buy" => TradeSide::Buy,
            "Sell" => TradeSide::Sell,
            _ => TradeSide::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "Buy",
            TradeSide::Sell => "Sell",
            TradeSide::Unknown => "NULL",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TradeSide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TradeSide {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw {
            serde_json::Value::String(s) => TradeSide::from_label(&s),
            _ => TradeSide::Unknown,
        })
    }
}

/// Directional bias of an emotion across the trades it was tagged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leaning {
    #[serde(rename = "Buy Leaning")]
    BuyLeaning,
    #[serde(rename = "Sell Leaning")]
    SellLeaning,
    Balanced,
}

impl fmt::Display for Leaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaning::BuyLeaning => write!(f, "Buy Leaning"),
            Leaning::SellLeaning => write!(f, "Sell Leaning"),
            Leaning::Balanced => write!(f, "Balanced"),
        }
    }
}

impl Leaning {
    /// Side label mirrored onto the aggregate for chart colouring.
    pub fn side(self) -> LeaningSide {
        match self {
            Leaning::BuyLeaning => LeaningSide::Buy,
            Leaning::SellLeaning => LeaningSide::Sell,
            Leaning::Balanced => LeaningSide::Null,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaningSide {
    Buy,
    Sell,
    #[serde(rename = "NULL")]
    Null,
}

impl fmt::Display for LeaningSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaningSide::Buy => write!(f, "Buy"),
            LeaningSide::Sell => write!(f, "Sell"),
            LeaningSide::Null => write!(f, "NULL"),
        }
    }
}
