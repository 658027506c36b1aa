//! Crossover decision rule.

use crate::models::{IndicatorSnapshot, Signal};

/// RSI ceiling for BUY signals: above this the move is already overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// RSI floor for SELL signals: below this the move is already oversold.
pub const RSI_OVERSOLD: f64 = 30.0;

/// Classify the latest indicator values.
///
/// - BUY when fast EMA > slow EMA and RSI < 70
/// - SELL when fast EMA < slow EMA and RSI > 30
/// - NONE otherwise, including exact EMA equality and any missing indicator
///
/// Strict inequalities only; a deterministic, pure function of its input.
pub fn decide(snapshot: &IndicatorSnapshot) -> Signal {
    let (fast, slow, rsi) = match (snapshot.fast_ema, snapshot.slow_ema, snapshot.rsi) {
        (Some(fast), Some(slow), Some(rsi)) => (fast, slow, rsi),
        _ => return Signal::None,
    };

    if fast > slow && rsi < RSI_OVERBOUGHT {
        Signal::Buy
    } else if fast < slow && rsi > RSI_OVERSOLD {
        Signal::Sell
    } else {
        Signal::None
    }
}
