pub mod emotion;
pub mod side;

pub use emotion::{Emotion, EmotionCategory};
pub use side::{Leaning, LeaningSide, TradeSide};
