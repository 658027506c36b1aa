//! Outbound HTTP integrations: market data and webhook notification.

pub mod market_data;
pub mod webhook;
pub mod yahoo;

pub use market_data::{MarketDataError, MarketDataProvider};
pub use webhook::{NotifyError, WebhookNotifier};
pub use yahoo::YahooChartProvider;
