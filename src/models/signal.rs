use serde::{Deserialize, Serialize};

/// Classification produced by the decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    None,
}

impl Signal {
    /// Human-readable label used in notification text.
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::None => "NONE",
        }
    }
}

/// Latest value of each indicator over one candle series.
///
/// A field is `None` when the series was shorter than that indicator's
/// lookback. The decision rule treats missing values as "no signal" rather
/// than comparing against an undefined number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_ema: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow_ema: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
}

/// JSON body posted to the webhook: `{"mensaje": <text>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub mensaje: String,
}

impl NotificationPayload {
    /// Build the notification text for a non-NONE signal.
    pub fn for_signal(signal: Signal, symbol: &str) -> Option<Self> {
        let mensaje = match signal {
            Signal::Buy => format!("🟢 COMPRA: {} detectado por el Scanner automático.", symbol),
            Signal::Sell => format!("🔴 VENTA: {} detectado por el Scanner automático.", symbol),
            Signal::None => return None,
        };
        Some(Self { mensaje })
    }
}
