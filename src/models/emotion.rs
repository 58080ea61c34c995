use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion labels the journal recognises when counting tagged trades.
///
/// Declaration order is the order aggregates are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Emotion {
    Fomo,
    Revenge,
    Tilt,
    Overrisk,
    Patience,
    Regret,
    Discipline,
    Confident,
    Anxious,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 10] = [
        Emotion::Fomo,
        Emotion::Revenge,
        Emotion::Tilt,
        Emotion::Overrisk,
        Emotion::Patience,
        Emotion::Regret,
        Emotion::Discipline,
        Emotion::Confident,
        Emotion::Anxious,
        Emotion::Neutral,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Looks up a canonical (already trimmed and upper-cased) tag.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "FOMO" => Some(Emotion::Fomo),
            "REVENGE" => Some(Emotion::Revenge),
            "TILT" => Some(Emotion::Tilt),
            "OVERRISK" => Some(Emotion::Overrisk),
            "PATIENCE" => Some(Emotion::Patience),
            "REGRET" => Some(Emotion::Regret),
            "DISCIPLINE" => Some(Emotion::Discipline),
            "CONFIDENT" => Some(Emotion::Confident),
            "ANXIOUS" => Some(Emotion::Anxious),
            "NEUTRAL" => Some(Emotion::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Fomo => "FOMO",
            Emotion::Revenge => "REVENGE",
            Emotion::Tilt => "TILT",
            Emotion::Overrisk => "OVERRISK",
            Emotion::Patience => "PATIENCE",
            Emotion::Regret => "REGRET",
            Emotion::Discipline => "DISCIPLINE",
            Emotion::Confident => "CONFIDENT",
            Emotion::Anxious => "ANXIOUS",
            Emotion::Neutral => "NEUTRAL",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn category(self) -> EmotionCategory {
        match self {
            Emotion::Patience | Emotion::Discipline | Emotion::Confident => {
                EmotionCategory::Positive
            }
            Emotion::Neutral => EmotionCategory::Neutral,
            Emotion::Fomo
            | Emotion::Revenge
            | Emotion::Tilt
            | Emotion::Overrisk
            | Emotion::Regret
            | Emotion::Anxious => EmotionCategory::Negative,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const POSITIVE_LABELS: &[&str] = &[
    "DISCIPLINE",
    "CONFIDENCE",
    "CONFIDENT",
    "PATIENCE",
    "CALM",
    "FOCUSED",
];

const NEGATIVE_LABELS: &[&str] = &[
    "TILT",
    "REVENGE",
    "FRUSTRATION",
    "IMPATIENCE",
    "FOMO",
    "OVERRISK",
    "REGRET",
    "ANXIOUS",
    "GREED",
    "FEAR",
];

const NEUTRAL_LABELS: &[&str] = &["NEUTRAL", "ANALYTICAL"];

/// Sentiment bucket used when scoring emotional stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Positive,
    Negative,
    Neutral,
}

impl EmotionCategory {
    /// Classifies a free-form subject. Wider than the counting whitelist so
    /// caller-built readings (CONFIDENCE, IMPATIENCE, ...) still score.
    pub fn classify(subject: &str) -> Option<Self> {
        let label = subject.trim().to_uppercase();
        let label = label.as_str();
        if POSITIVE_LABELS.contains(&label) {
            Some(EmotionCategory::Positive)
        } else if NEGATIVE_LABELS.contains(&label) {
            Some(EmotionCategory::Negative)
        } else if NEUTRAL_LABELS.contains(&label) {
            Some(EmotionCategory::Neutral)
        } else {
            None
        }
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmotionCategory::Positive => write!(f, "positive"),
            EmotionCategory::Negative => write!(f, "negative"),
            EmotionCategory::Neutral => write!(f, "neutral"),
        }
    }
}
