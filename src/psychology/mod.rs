//! Psychological metrics engine.
//!
//! Trade records go through [`aggregate`] to get a per-emotion buy/sell
//! leaning, and any list of `{subject, value}` magnitudes goes through
//! [`synthesize`] to get the coupled discipline level / tilt control pair.
//! Both are pure functions, safe to call from any number of threads.

pub mod aggregator;
pub mod synthesizer;
pub mod tags;
pub mod validation;

pub use aggregator::{aggregate, aggregate_json, EmotionAggregate, LEANING_THRESHOLD};
pub use synthesizer::{
    synthesize, synthesize_json, EmotionMagnitude, EmotionReading, StabilityMetrics,
    COUPLING_FACTOR, MAX_DEVIATION,
};
pub use tags::RawEmotionTags;
