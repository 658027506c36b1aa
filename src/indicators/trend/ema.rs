//! EMA (Exponential Moving Average) indicator

use crate::models::Candle;

/// Calculate the latest EMA value for a period over the closing prices.
///
/// The recurrence is seeded by a simple moving average over the first
/// `period` closes, then `ema = close * k + ema * (1 - k)` with
/// `k = 2 / (period + 1)` for the rest of the series.
///
/// Returns `None` when the series is shorter than `period`.
pub fn calculate_ema(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let k = 2.0 / (period as f64 + 1.0);

    let mut ema = closes[..period].iter().sum::<f64>() / period as f64;
    for close in &closes[period..] {
        ema = close * k + ema * (1.0 - k);
    }

    Some(ema)
}
