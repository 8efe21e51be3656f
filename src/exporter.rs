use prometheus::{Encoder, Registry, TextEncoder};
use warp::http::Response as HttpResponse;
use warp::hyper::StatusCode;
use warp::{Filter, Rejection, Reply};

/// `GET /metrics` exposition endpoint serving `registry` in the Prometheus
/// text format.
pub fn metrics_filter(
    registry: Registry,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("metrics").and(warp::get()).map({
        move || {
            let mut buffer = Vec::new();
            let encoder = TextEncoder::new();
            let metric_families = registry.gather();
            if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
                return HttpResponse::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(err.to_string().into_bytes())
                    .unwrap();
            }
            HttpResponse::builder()
                .status(StatusCode::OK)
                .body(buffer)
                .unwrap()
        }
    })
}
