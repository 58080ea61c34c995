use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::EmotionCategory;
use crate::psychology::aggregator::EmotionAggregate;
use crate::psychology::validation::{
    clamp_scale, round2, sanitize_magnitude, NEUTRAL_MIDPOINT, SCALE_MAX,
};

const POSITIVE_WEIGHT: f64 = 2.0;
const NEUTRAL_WEIGHT: f64 = 1.0;
const NEGATIVE_WEIGHT: f64 = 1.5;

/// How far both metrics are pushed away from the shared stability index.
pub const COUPLING_FACTOR: f64 = 0.6;

/// Largest permitted gap between discipline level and tilt control.
pub const MAX_DEVIATION: f64 = 30.0;

/// Anything that carries a labelled emotion magnitude in [0, 100].
///
/// `None` stands for a missing value and scores as 0.
pub trait EmotionMagnitude {
    fn subject(&self) -> &str;
    fn magnitude(&self) -> Option<f64>;
}

impl EmotionMagnitude for EmotionAggregate {
    fn subject(&self) -> &str {
        &self.subject
    }
    fn magnitude(&self) -> Option<f64> {
        Some(self.value)
    }
}

impl<S: AsRef<str>> EmotionMagnitude for (S, f64) {
    fn subject(&self) -> &str {
        self.0.as_ref()
    }
    fn magnitude(&self) -> Option<f64> {
        Some(self.1)
    }
}

/// Caller-built `{subject, value}` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionReading {
    pub subject: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl EmotionReading {
    pub fn new(subject: impl Into<String>, value: f64) -> Self {
        Self {
            subject: subject.into(),
            value: Some(value),
        }
    }

    /// Rows without a string `subject` are dropped; a non-numeric `value`
    /// becomes missing.
    pub fn parse_lenient(payload: &Value) -> Vec<Self> {
        let Value::Array(rows) = payload else {
            return Vec::new();
        };
        rows.iter()
            .filter_map(|row| {
                let subject = row.get("subject")?.as_str()?;
                Some(EmotionReading {
                    subject: subject.to_string(),
                    value: row.get("value").and_then(Value::as_f64),
                })
            })
            .collect()
    }
}

impl EmotionMagnitude for EmotionReading {
    fn subject(&self) -> &str {
        &self.subject
    }
    fn magnitude(&self) -> Option<f64> {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilityMetrics {
    pub emotional_state_score: f64,
    pub psychological_stability_index: f64,
    pub discipline_level: f64,
    pub tilt_control: f64,
    pub positive_score: f64,
    pub negative_score: f64,
    pub neutral_score: f64,
    pub classified_count: usize,
    pub aggregate_count: usize,
}

impl StabilityMetrics {
    /// "No opinion yet": both metrics at 50, ESS 0, PSI at the midpoint.
    pub fn neutral() -> Self {
        Self {
            emotional_state_score: 0.0,
            psychological_stability_index: NEUTRAL_MIDPOINT,
            discipline_level: NEUTRAL_MIDPOINT,
            tilt_control: NEUTRAL_MIDPOINT,
            positive_score: 0.0,
            negative_score: 0.0,
            neutral_score: 0.0,
            classified_count: 0,
            aggregate_count: 0,
        }
    }

    fn is_finite(&self) -> bool {
        [
            self.emotional_state_score,
            self.psychological_stability_index,
            self.discipline_level,
            self.tilt_control,
        ]
        .iter()
        .all(|x| x.is_finite())
    }
}

impl Default for StabilityMetrics {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Derives discipline level and tilt control from emotion magnitudes.
///
/// Total over its input: an empty slice, or a caller impl that panics, yields
/// [`StabilityMetrics::neutral`].
pub fn synthesize<T: EmotionMagnitude>(aggregates: &[T]) -> StabilityMetrics {
    if aggregates.is_empty() {
        return StabilityMetrics::neutral();
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| compute(aggregates)));
    match result {
        Ok(metrics) if metrics.is_finite() => metrics,
        Ok(metrics) => {
            warn!("Non-finite stability metrics {:?}, using neutral", metrics);
            StabilityMetrics::neutral()
        }
        Err(_) => {
            warn!("Stability synthesis panicked, using neutral");
            StabilityMetrics::neutral()
        }
    }
}

/// [`synthesize`] over an untrusted `[{subject, value}]` JSON payload.
pub fn synthesize_json(payload: &Value) -> StabilityMetrics {
    synthesize(&EmotionReading::parse_lenient(payload))
}

fn compute<T: EmotionMagnitude>(aggregates: &[T]) -> StabilityMetrics {
    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;
    let mut neutral_sum = 0.0;
    let mut classified = 0usize;

    for agg in aggregates {
        let Some(category) = EmotionCategory::classify(agg.subject()) else {
            debug!("Unclassified emotion subject {:?}", agg.subject());
            continue;
        };
        let value = sanitize_magnitude(agg.magnitude());
        classified += 1;
        match category {
            EmotionCategory::Positive => positive_sum += value,
            EmotionCategory::Negative => negative_sum += value,
            EmotionCategory::Neutral => neutral_sum += value,
        }
    }

    // Unclassified subjects still dilute the scores through `n`.
    let denominator = aggregates.len() as f64 * SCALE_MAX;
    let positive_score = positive_sum / denominator * SCALE_MAX;
    let negative_score = negative_sum / denominator * SCALE_MAX;
    let neutral_score = neutral_sum / denominator * SCALE_MAX;

    let ess = positive_score * POSITIVE_WEIGHT + neutral_score * NEUTRAL_WEIGHT
        - negative_score * NEGATIVE_WEIGHT;
    let psi = clamp_scale((ess + 100.0) / 2.0);

    let discipline = clamp_scale(psi + coupling_adjustment(psi));
    let tilt = clamp_scale(psi + coupling_adjustment(psi));
    let (discipline, tilt) = enforce_max_deviation(discipline, tilt);

    StabilityMetrics {
        emotional_state_score: ess,
        psychological_stability_index: psi,
        discipline_level: round2(discipline),
        tilt_control: round2(tilt),
        positive_score,
        negative_score,
        neutral_score,
        classified_count: classified,
        aggregate_count: aggregates.len(),
    }
}

/// Self-referential push: zero at both ends of the scale, largest mid-range.
pub fn coupling_adjustment(base: f64) -> f64 {
    base * COUPLING_FACTOR * (1.0 - base / SCALE_MAX)
}

/// Pulls the lower of the two values up to within [`MAX_DEVIATION`] of the
/// higher one. The higher value is never moved.
pub fn enforce_max_deviation(discipline: f64, tilt: f64) -> (f64, f64) {
    if (discipline - tilt).abs() <= MAX_DEVIATION {
        return (discipline, tilt);
    }
    if discipline > tilt {
        (discipline, discipline - MAX_DEVIATION)
    } else {
        (tilt - MAX_DEVIATION, tilt)
    }
}
