//! Logging setup with optional OpenTelemetry export.

use opentelemetry::trace::TracerProvider;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::env;
use std::error::Error;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_SERVICE_NAME: &str = "hearth-server";

/// Providers that must be flushed before the process exits.
pub struct Telemetry {
    providers: Option<(SdkTracerProvider, SdkLoggerProvider)>,
}

impl Telemetry {
    pub fn shutdown(self) {
        if let Some((traces, logs)) = self.providers {
            if let Err(e) = traces.shutdown() {
                eprintln!("Failed to flush traces: {}", e);
            }
            if let Err(e) = logs.shutdown() {
                eprintln!("Failed to flush logs: {}", e);
            }
        }
    }
}

/// Whether something is listening at the collector address (quick TCP check).
fn is_reachable(endpoint: &str) -> bool {
    let host_port = endpoint
        .trim_start_matches("http://")
        .trim_start_matches("https://");

    host_port
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .map(|addr| TcpStream::connect_timeout(&addr, Duration::from_millis(100)).is_ok())
        .unwrap_or(false)
}

fn build_providers(
    endpoint: &str,
    service_name: &str,
) -> Result<(SdkTracerProvider, SdkLoggerProvider), Box<dyn Error + Send + Sync>> {
    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name.to_string())
        .build();

    let trace_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let trace_provider = SdkTracerProvider::builder()
        .with_batch_exporter(trace_exporter)
        .with_resource(resource.clone())
        .build();

    let log_exporter = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let log_provider = SdkLoggerProvider::builder()
        .with_batch_exporter(log_exporter)
        .with_resource(resource)
        .build();

    Ok((trace_provider, log_provider))
}

/// Initialize telemetry.
/// If OTEL_EXPORTER_OTLP_ENDPOINT is set and reachable, traces and logs are also
/// sent to the collector. Otherwise, only console logging is used.
pub fn init_telemetry() -> Telemetry {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    let service_name =
        env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());
    let endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();

    let (providers, status) = match endpoint {
        None => (
            None,
            "OTEL_EXPORTER_OTLP_ENDPOINT not set, using console logging only".to_string(),
        ),
        Some(endpoint) if !is_reachable(&endpoint) => (
            None,
            format!(
                "OpenTelemetry endpoint {} not reachable, using console logging only",
                endpoint
            ),
        ),
        Some(endpoint) => match build_providers(&endpoint, &service_name) {
            Ok(providers) => (
                Some(providers),
                format!(
                    "OpenTelemetry enabled, exporting traces and logs to {} as {}",
                    endpoint, service_name
                ),
            ),
            Err(e) => (
                None,
                format!(
                    "Failed to create OTLP exporters for {} ({}), using console logging only",
                    endpoint, e
                ),
            ),
        },
    };

    let otel_trace_layer = providers.as_ref().map(|(traces, _)| {
        let tracer = traces.tracer(DEFAULT_SERVICE_NAME);
        opentelemetry::global::set_tracer_provider(traces.clone());
        tracing_opentelemetry::layer().with_tracer(tracer)
    });
    let otel_log_layer = providers
        .as_ref()
        .map(|(_, logs)| OpenTelemetryTracingBridge::new(logs));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_trace_layer)
        .with(otel_log_layer)
        .init();

    tracing::info!("{}", status);

    Telemetry { providers }
}
