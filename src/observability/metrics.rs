//! Request metrics.
//!
//! # Design Decisions
//! - Recording is cheap (atomic increments behind the metrics facade)
//! - The Prometheus exporter runs on its own address, off the demo API
//! - Route labels carry the request path; the demo surface is small
//!   and fixed, so cardinality stays bounded

use std::net::SocketAddr;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
///
/// Failure to bind is logged and otherwise ignored so the demo API can
/// still come up without its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Prometheus exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install Prometheus exporter"),
    }
}

/// Record one finished request.
pub fn record_request(method: &str, status: u16, route: &str, elapsed_ms: f64) {
    counter!(
        "showcase_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "route" => route.to_string()
    )
    .increment(1);

    histogram!("showcase_request_duration_ms", "route" => route.to_string())
        .record(elapsed_ms);
}
