//! Webhook notifier: one fire-and-forget JSON POST per signal.

use crate::models::NotificationPayload;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("webhook returned status {0}")]
    Status(reqwest::StatusCode),
}

pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: String, client: reqwest::Client) -> Self {
        Self { url, client }
    }

    /// POST the payload to the configured webhook.
    ///
    /// No retry and no delivery tracking; a non-2xx response is surfaced as
    /// an error so the caller can log the outcome.
    pub async fn notify(&self, payload: &NotificationPayload) -> Result<(), NotifyError> {
        let response = self.client.post(&self.url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                status = %status,
                "webhook rejected notification with status {}",
                status
            );
            return Err(NotifyError::Status(status));
        }

        info!(mensaje = %payload.mensaje, "notification delivered");
        Ok(())
    }
}
