//! Shared data models spanning the evaluator layers.

pub mod candle;
pub mod signal;

pub use candle::Candle;
pub use signal::{IndicatorSnapshot, NotificationPayload, Signal};
