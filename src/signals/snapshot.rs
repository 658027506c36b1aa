//! Builds the latest indicator snapshot from a candle series.

use crate::indicators::momentum::calculate_rsi;
use crate::indicators::trend::calculate_ema;
use crate::models::{Candle, IndicatorSnapshot};

impl IndicatorSnapshot {
    /// Compute the latest fast EMA, slow EMA, and RSI for one series.
    ///
    /// Any indicator whose lookback exceeds the series length comes back as
    /// `None`; the decision rule maps that to no signal.
    pub fn from_candles(
        candles: &[Candle],
        fast_period: usize,
        slow_period: usize,
        rsi_period: usize,
    ) -> Self {
        Self {
            fast_ema: calculate_ema(candles, fast_period),
            slow_ema: calculate_ema(candles, slow_period),
            rsi: calculate_rsi(candles, rsi_period),
        }
    }
}
