//! Yahoo Finance v8 chart API provider.

use crate::models::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use chrono::DateTime;
use serde::Deserialize;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Fetches candles from `GET {base}/v8/finance/chart/{symbol}`.
pub struct YahooChartProvider {
    base_url: String,
    client: reqwest::Client,
}

impl YahooChartProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_client(DEFAULT_BASE_URL.to_string(), client)
    }

    /// Construct with an explicit base URL, used by tests to point the
    /// provider at a mock server.
    pub fn with_client(base_url: String, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

/// Parallel arrays indexed like `timestamp`; entries are null for exchange
/// gaps, so every field is an `Option`.
#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooChartProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let response = self
            .client
            .get(&url)
            .query(&[("range", range), ("interval", interval)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Yahoo reports symbol-level errors as a JSON error object, at times
        // under a non-2xx status. Those are a "no data" result, not a
        // transport failure.
        let parsed: ChartResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                if !status.is_success() {
                    return Err(MarketDataError::Status(status));
                }
                return Err(MarketDataError::Decode(e));
            }
        };

        if let Some(error) = parsed.chart.error {
            debug!(
                symbol = %symbol,
                code = error.code.as_deref().unwrap_or("unknown"),
                description = error.description.as_deref().unwrap_or(""),
                "chart API returned an error object, treating as empty series"
            );
            return Ok(Vec::new());
        }

        let Some(result) = parsed
            .chart
            .result
            .and_then(|results| results.into_iter().next())
        else {
            return Ok(Vec::new());
        };

        let timestamps = result.timestamp.unwrap_or_default();
        let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

        let mut candles = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            // Skip rows the exchange left empty.
            let (Some(open), Some(high), Some(low), Some(close)) = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
            ) else {
                continue;
            };
            let volume = quote.volume.get(i).copied().flatten().unwrap_or(0.0);

            let Some(timestamp) = DateTime::from_timestamp(ts, 0) else {
                continue;
            };

            candles.push(Candle::new(open, high, low, close, volume, timestamp));
        }

        candles.sort_by_key(|c| c.timestamp);

        debug!(
            symbol = %symbol,
            count = candles.len(),
            "fetched {} candles for {}",
            candles.len(),
            symbol
        );

        Ok(candles)
    }
}
