use lazy_static::lazy_static;
use prometheus::{register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec};

lazy_static! {
    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total HTTP requests",
        &["method", "path", "status"]
    )
    .unwrap();

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .unwrap();

    // Business Metrics
    pub static ref DIVISIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "divisions_total",
        "Total divisions performed",
        &["outcome"]  // outcome: ok, failed
    )
    .unwrap();

    pub static ref ERROR_RESPONSES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "error_responses_total",
        "Total error responses sent, by error code",
        &["code"]
    )
    .unwrap();
}

/// Initialize all metrics (called on startup)
pub fn init_metrics() {
    // Force lazy_static initialization
    lazy_static::initialize(&HTTP_REQUESTS_TOTAL);
    lazy_static::initialize(&HTTP_REQUEST_DURATION_SECONDS);
    lazy_static::initialize(&DIVISIONS_TOTAL);
    lazy_static::initialize(&ERROR_RESPONSES_TOTAL);
}
