//! Runtime configuration loaded from the environment.

use std::env;
use std::time::Duration;

/// Evaluator configuration.
///
/// All values come from environment variables with fixed defaults
/// (BTC-USD, EMA 9/21, RSI 14, 1-day lookback at 15m candles).
/// `webhook_url` has no default: without it the evaluator skips the
/// entire run.
#[derive(Debug, Clone)]
pub struct Config {
    pub symbol: String,
    pub fast_period: usize,
    pub slow_period: usize,
    pub rsi_period: usize,
    pub lookback_range: String,
    pub candle_interval: String,
    pub webhook_url: Option<String>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: "BTC-USD".to_string(),
            fast_period: 9,
            slow_period: 21,
            rsi_period: 14,
            lookback_range: "1d".to_string(),
            candle_interval: "15m".to_string(),
            webhook_url: None,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults
    /// for anything missing or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout_secs: u64 = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout.as_secs());

        Self {
            symbol: env::var("SYMBOL").unwrap_or(defaults.symbol),
            fast_period: env_usize("EMA_FAST_PERIOD", defaults.fast_period),
            slow_period: env_usize("EMA_SLOW_PERIOD", defaults.slow_period),
            rsi_period: env_usize("RSI_PERIOD", defaults.rsi_period),
            lookback_range: env::var("LOOKBACK_RANGE").unwrap_or(defaults.lookback_range),
            candle_interval: env::var("CANDLE_INTERVAL").unwrap_or(defaults.candle_interval),
            webhook_url: env::var("WEBHOOK_URL").ok().filter(|u| !u.is_empty()),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Current deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
