use graphql_telemetry::{metrics_filter, Metrics};
use prometheus::Registry;

#[tokio::test]
async fn metrics_endpoint_serves_text_format() {
    let registry = Registry::new();
    let metrics = Metrics::register_on(&registry).unwrap();
    metrics.request_started.inc();
    metrics
        .time_to_handle_request
        .with_label_values(&["success"])
        .observe(3.0);

    let filter = metrics_filter(registry);
    let resp = warp::test::request().path("/metrics").reply(&filter).await;
    assert_eq!(resp.status(), 200);

    let body = String::from_utf8(resp.body().to_vec()).unwrap();
    assert!(body.contains("graphql_request_started_total 1"));
    assert!(body.contains("graphql_request_duration_ms_bucket{exit_status=\"success\",le=\"4\"} 1"));
}
