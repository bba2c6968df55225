use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter_vec, Encoder, Histogram, IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static BACKEND_CALLS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "product_composite_backend_calls_total",
        "Outbound backend calls by backend and outcome",
        &["backend", "outcome"]
    )
    .expect("register backend_calls_total")
});

pub static DEGRADED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "product_composite_degraded_total",
        "Optional backend calls replaced by an empty result",
        &["backend"]
    )
    .expect("register degraded_total")
});

pub static AGGREGATE_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "product_composite_aggregate_requests_total",
        "Aggregate requests by outcome",
        &["outcome"]
    )
    .expect("register aggregate_requests_total")
});

pub static AGGREGATE_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "product_composite_aggregate_duration_seconds",
        "Aggregate assembly duration in seconds",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("register aggregate_duration")
});

pub fn record_backend_call(backend: &str, outcome: &str) {
    BACKEND_CALLS_TOTAL.with_label_values(&[backend, outcome]).inc();
}

pub fn record_degraded(backend: &str) {
    DEGRADED_TOTAL.with_label_values(&[backend]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_calls_show_up_in_encoded_output() {
        record_backend_call("product", "ok");
        record_degraded("review");
        let (status, body) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("product_composite_backend_calls_total"));
        assert!(body.contains("product_composite_degraded_total"));
    }
}
