//! Logging and Prometheus metrics setup.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Renders the current metric values in Prometheus text format.
pub type PrometheusHandle = metrics_exporter_prometheus::PrometheusHandle;

/// Counter incremented once per created product.
pub const PRODUCTS_CREATED_TOTAL: &str = "products_created_total";

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `info,tower_http=debug`.
/// Subsequent calls are no-ops.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = match format {
        LogFormat::Json => builder.json().with_target(false).try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
}

/// Make the `metrics` macros record into Prometheus and register the
/// catalog's counters.
///
/// No listener is started; `GET /metrics` serves the returned handle.
///
/// # Errors
/// Fails when the process already has a global recorder.
pub fn init_metrics() -> Result<PrometheusHandle, metrics_exporter_prometheus::BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    metrics::describe_counter!(PRODUCTS_CREATED_TOTAL, "Number of products created");
    Ok(handle)
}

/// [`init_metrics`] for `main`: a failed install yields `None`, which leaves
/// `/metrics` unrouted.
#[must_use]
pub fn init_metrics_handle() -> Option<Arc<PrometheusHandle>> {
    init_metrics().ok().map(Arc::new)
}
