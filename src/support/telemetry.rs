//! Tracing initialization and HTTP span filtering

use axum::body::Body;
use axum::http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber for a service binary.
pub fn init_tracing(config: &LoggingConfig, service: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "{service}={level},alexandria={level},tower_http=debug",
            level = config.level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Span factory that keeps documentation traffic out of the traces.
#[derive(Debug, Clone, Copy)]
pub struct ApiMakeSpan;

const UNTRACED_PREFIXES: [&str; 2] = ["/swagger-ui", "/api-docs"];

impl MakeSpan<Body> for ApiMakeSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        let path = request.uri().path();
        if UNTRACED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
        {
            return Span::none();
        }
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
        )
    }
}

/// HTTP trace layer shared by the service binaries.
pub fn http_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, ApiMakeSpan> {
    TraceLayer::new_for_http().make_span_with(ApiMakeSpan)
}
