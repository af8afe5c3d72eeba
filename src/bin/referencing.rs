//! Alexandria referencing service entry point

use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use alexandria::config::AppConfig;
use alexandria::referencing::{
    api, ReferencingRepositories, ReferencingServices, ReferencingState,
};
use alexandria::support::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");
    telemetry::init_tracing(&config.logging, "alexandria_referencing");

    tracing::info!(
        "Starting Alexandria referencing v{}",
        env!("CARGO_PKG_VERSION")
    );

    let repositories = ReferencingRepositories::new();
    let services = ReferencingServices::new(&repositories);
    let server = config.referencing.server.clone();
    let state = ReferencingState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(state)
        .merge(api::openapi::create_openapi_router())
        .layer(telemetry::http_trace_layer())
        .layer(cors);

    let addr = SocketAddr::new(server.host.parse().expect("Invalid host address"), server.port);
    tracing::info!("Referencing listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
