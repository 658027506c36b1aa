//! End-to-end evaluation runs against mocked chart and webhook servers.

use crate::test_utils::{
    breakdown_closes, build_evaluator, mock_chart, mock_webhook, recovery_closes,
};
use vigia::evaluator::Outcome;
use vigia::models::Signal;
use wiremock::MockServer;

#[tokio::test]
async fn buy_signal_posts_notification() {
    let chart = MockServer::start().await;
    let webhook = MockServer::start().await;
    mock_chart(&chart, &recovery_closes()).await;
    mock_webhook(&webhook, 200).await;

    let evaluator = build_evaluator(&chart, Some(format!("{}/webhook", webhook.uri())));
    let outcome = evaluator.run().await;

    assert!(matches!(outcome, Outcome::Evaluated(Signal::Buy)));

    let requests = webhook.received_requests().await.expect("webhook requests");
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8(requests[0].body.clone()).expect("utf8 body");
    assert!(body.contains("mensaje"));
    assert!(body.contains("BTC-USD"));
    assert!(body.contains("COMPRA"));
}

#[tokio::test]
async fn sell_signal_posts_notification() {
    let chart = MockServer::start().await;
    let webhook = MockServer::start().await;
    mock_chart(&chart, &breakdown_closes()).await;
    mock_webhook(&webhook, 200).await;

    let evaluator = build_evaluator(&chart, Some(format!("{}/webhook", webhook.uri())));
    let outcome = evaluator.run().await;

    assert!(matches!(outcome, Outcome::Evaluated(Signal::Sell)));

    let requests = webhook.received_requests().await.expect("webhook requests");
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8(requests[0].body.clone()).expect("utf8 body");
    assert!(body.contains("BTC-USD"));
    assert!(body.contains("VENTA"));
}

#[tokio::test]
async fn flat_series_decides_none_and_stays_quiet() {
    let chart = MockServer::start().await;
    let webhook = MockServer::start().await;
    mock_chart(&chart, &[100.0; 40]).await;
    mock_webhook(&webhook, 200).await;

    let evaluator = build_evaluator(&chart, Some(format!("{}/webhook", webhook.uri())));
    let outcome = evaluator.run().await;

    // Equal EMAs tie-break to NONE and nothing is posted.
    assert!(matches!(outcome, Outcome::Evaluated(Signal::None)));
    let requests = webhook.received_requests().await.expect("webhook requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn jump_without_pullbacks_is_filtered_as_overbought() {
    // Flat closes then one jump: the fast EMA crosses above the slow one,
    // but with no losing candle in the window the RSI saturates at 100 and
    // the overbought filter holds the signal back.
    let chart = MockServer::start().await;
    let webhook = MockServer::start().await;
    let mut closes = vec![10.0; 20];
    closes.push(20.0);
    mock_chart(&chart, &closes).await;
    mock_webhook(&webhook, 200).await;

    let evaluator = build_evaluator(&chart, Some(format!("{}/webhook", webhook.uri())));
    let outcome = evaluator.run().await;

    assert!(matches!(outcome, Outcome::Evaluated(Signal::None)));
    let requests = webhook.received_requests().await.expect("webhook requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn short_series_decides_none() {
    let chart = MockServer::start().await;
    let webhook = MockServer::start().await;
    // Enough for the fast EMA and RSI, short of the 21-period slow EMA.
    let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
    mock_chart(&chart, &closes).await;
    mock_webhook(&webhook, 200).await;

    let evaluator = build_evaluator(&chart, Some(format!("{}/webhook", webhook.uri())));
    let outcome = evaluator.run().await;

    assert!(matches!(outcome, Outcome::Evaluated(Signal::None)));
    let requests = webhook.received_requests().await.expect("webhook requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn missing_webhook_skips_everything() {
    let chart = MockServer::start().await;
    mock_chart(&chart, &recovery_closes()).await;

    let evaluator = build_evaluator(&chart, None);
    let outcome = evaluator.run().await;

    assert!(matches!(outcome, Outcome::Skipped));

    // The gate runs before the fetch: no chart request either.
    let requests = chart.received_requests().await.expect("chart requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn empty_chart_result_is_no_data() {
    let chart = MockServer::start().await;
    let webhook = MockServer::start().await;
    let body = serde_json::json!({ "chart": { "result": [], "error": null } });
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(body))
        .mount(&chart)
        .await;
    mock_webhook(&webhook, 200).await;

    let evaluator = build_evaluator(&chart, Some(format!("{}/webhook", webhook.uri())));
    let outcome = evaluator.run().await;

    assert!(matches!(outcome, Outcome::NoData));
    let requests = webhook.received_requests().await.expect("webhook requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn chart_server_error_is_fetch_failed() {
    let chart = MockServer::start().await;
    let webhook = MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(wiremock::ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&chart)
        .await;
    mock_webhook(&webhook, 200).await;

    let evaluator = build_evaluator(&chart, Some(format!("{}/webhook", webhook.uri())));
    let outcome = evaluator.run().await;

    assert!(matches!(outcome, Outcome::FetchFailed(_)));
    let requests = webhook.received_requests().await.expect("webhook requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn webhook_rejection_is_notify_failed() {
    let chart = MockServer::start().await;
    let webhook = MockServer::start().await;
    mock_chart(&chart, &recovery_closes()).await;
    mock_webhook(&webhook, 500).await;

    let evaluator = build_evaluator(&chart, Some(format!("{}/webhook", webhook.uri())));
    let outcome = evaluator.run().await;

    assert!(matches!(
        outcome,
        Outcome::NotifyFailed {
            signal: Signal::Buy,
            ..
        }
    ));
}

#[tokio::test]
async fn identical_data_evaluates_identically() {
    let chart = MockServer::start().await;
    let webhook = MockServer::start().await;
    mock_chart(&chart, &recovery_closes()).await;
    mock_webhook(&webhook, 200).await;

    let evaluator = build_evaluator(&chart, Some(format!("{}/webhook", webhook.uri())));
    let first = evaluator.run().await;
    let second = evaluator.run().await;

    assert!(matches!(first, Outcome::Evaluated(Signal::Buy)));
    assert!(matches!(second, Outcome::Evaluated(Signal::Buy)));
}
