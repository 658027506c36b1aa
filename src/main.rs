//! Vigia scanner
//!
//! Runs a single signal evaluation and exits 0. Periodic operation is
//! expected to come from an external scheduler (cron or similar).

use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use vigia::config::{get_environment, Config};
use vigia::evaluator::{Outcome, SignalEvaluator};
use vigia::logging;
use vigia::services::YahooChartProvider;

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    info!(environment = %get_environment(), symbol = %config.symbol, "starting vigia scanner");

    // Exit code is always 0; outcomes are distinguished in the logs only.
    let client = match reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "failed to build HTTP client");
            return;
        }
    };

    let provider = Arc::new(YahooChartProvider::new(client.clone()));
    let evaluator = SignalEvaluator::new(config, provider, client);

    match evaluator.run().await {
        Outcome::Skipped => info!("run skipped: no webhook configured"),
        Outcome::NoData => info!("run finished: no market data"),
        Outcome::FetchFailed(e) => warn!(error = %e, "run finished: fetch failed"),
        Outcome::NotifyFailed { signal, error } => warn!(
            signal = signal.label(),
            error = %error,
            "run finished: notification failed"
        ),
        Outcome::Evaluated(signal) => {
            info!(signal = signal.label(), "run finished: {}", signal.label())
        }
    }
}
