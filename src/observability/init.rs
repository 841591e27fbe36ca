//! Tracing subscriber setup.

use super::file_writer::RotationPolicy;
use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "Bookfinder";
const SCOPE: &str = "bookfinder";

/// Installs the global subscriber exporting to `<data dir>/bookfinder-otlp.json`.
///
/// Never fails observably: if the data directory cannot be created, or a
/// subscriber is already installed, tracing simply stays off.
pub fn init_tracing(config: &Config) {
    init_tracing_in(config, &paths::get_data_dir());
}

/// Same as [`init_tracing`] with an explicit output directory.
pub fn init_tracing_in(config: &Config, data_dir: &Path) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let policy = RotationPolicy {
        max_bytes: config.trace_max_bytes,
        ..RotationPolicy::default()
    };

    let provider = tracer::create_tracer_provider(paths::trace_file(data_dir), policy, resource, SCOPE);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE));

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
