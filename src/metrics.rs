//! Request counters emitted through the `metrics` facade.
//!
//! The service only describes and increments counters; recording them is up
//! to whatever recorder the embedding environment installs. Without one the
//! macros are no-ops.

use metrics::{counter, describe_counter};

/// Total requests counter metric name.
pub const METRIC_REQUESTS: &str = "http_requests_total";

/// Register metric descriptions. Call once at startup.
pub fn init_metrics() {
    describe_counter!(
        METRIC_REQUESTS,
        "Total number of HTTP requests received, labeled by method and path"
    );
}

/// Count one request against a (method, path) pair.
pub fn inc_requests(method: &'static str, path: &'static str) {
    counter!(METRIC_REQUESTS, "method" => method, "path" => path).increment(1);
}
