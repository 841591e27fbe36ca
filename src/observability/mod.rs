//! OpenTelemetry-based tracing with file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → bookfinder-otlp.json
//! ```
//!
//! - Spans are written as OTLP JSON, one document per line
//! - The file rotates at `trace_max_bytes` (default 10 MiB), keeping 3 backups
//! - The level comes from the `trace_level` option (default `info`)
//!
//! ```rust,no_run
//! use bookfinder::observability::init_tracing;
//! use bookfinder::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{RotationPolicy, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
pub use init::{init_tracing, init_tracing_in};
