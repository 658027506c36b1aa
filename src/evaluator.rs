//! Single-shot evaluation run: gate, fetch, compute, decide, notify.

use crate::config::Config;
use crate::models::{IndicatorSnapshot, NotificationPayload, Signal};
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use crate::services::webhook::{NotifyError, WebhookNotifier};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of one evaluation run.
///
/// Every path through the run maps to exactly one variant so that logs and
/// tests can tell "nothing to report" from "something went wrong". The
/// process exits 0 regardless.
#[derive(Debug)]
pub enum Outcome {
    /// No webhook URL configured; nothing ran at all.
    Skipped,
    /// The provider returned an empty series.
    NoData,
    /// The data fetch failed in transport or decoding.
    FetchFailed(MarketDataError),
    /// A signal fired but the webhook POST failed.
    NotifyFailed { signal: Signal, error: NotifyError },
    /// The run completed; NONE signals land here with no POST sent.
    Evaluated(Signal),
}

pub struct SignalEvaluator {
    config: Config,
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    notifier: Option<WebhookNotifier>,
}

impl SignalEvaluator {
    /// Build an evaluator from an explicit config and a data provider.
    ///
    /// The notifier is only constructed when a webhook URL is configured;
    /// its absence gates the whole run.
    pub fn new(
        config: Config,
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        client: reqwest::Client,
    ) -> Self {
        let notifier = config
            .webhook_url
            .clone()
            .map(|url| WebhookNotifier::new(url, client));
        Self {
            config,
            provider,
            notifier,
        }
    }

    /// Run one evaluation.
    pub async fn run(&self) -> Outcome {
        let Some(notifier) = &self.notifier else {
            info!("no webhook URL configured, skipping evaluation");
            return Outcome::Skipped;
        };

        let symbol = &self.config.symbol;
        let candles = match self
            .provider
            .get_candles(
                symbol,
                &self.config.lookback_range,
                &self.config.candle_interval,
            )
            .await
        {
            Ok(candles) => candles,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "candle fetch failed for {}", symbol);
                return Outcome::FetchFailed(e);
            }
        };

        if candles.is_empty() {
            debug!(symbol = %symbol, "no candles available for {}", symbol);
            return Outcome::NoData;
        }

        let snapshot = IndicatorSnapshot::from_candles(
            &candles,
            self.config.fast_period,
            self.config.slow_period,
            self.config.rsi_period,
        );

        let signal = crate::signals::decide(&snapshot);
        debug!(
            symbol = %symbol,
            fast_ema = ?snapshot.fast_ema,
            slow_ema = ?snapshot.slow_ema,
            rsi = ?snapshot.rsi,
            signal = signal.label(),
            "evaluated {} candles for {}",
            candles.len(),
            symbol
        );

        let Some(payload) = NotificationPayload::for_signal(signal, symbol) else {
            return Outcome::Evaluated(Signal::None);
        };

        info!(
            symbol = %symbol,
            signal = signal.label(),
            "{} signal for {}, notifying webhook",
            signal.label(),
            symbol
        );

        match notifier.notify(&payload).await {
            Ok(()) => Outcome::Evaluated(signal),
            Err(error) => {
                warn!(
                    symbol = %symbol,
                    signal = signal.label(),
                    error = %error,
                    "webhook notification failed for {}",
                    symbol
                );
                Outcome::NotifyFailed { signal, error }
            }
        }
    }
}
