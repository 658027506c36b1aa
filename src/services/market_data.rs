//! Market data provider interface.

use crate::models::Candle;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
}

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Fetch candles for a symbol over a lookback range at an interval.
    ///
    /// An empty series is a valid result (unknown symbol, closed market,
    /// provider-side error object); transport and decode failures are
    /// errors.
    async fn get_candles(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, MarketDataError>;
}
