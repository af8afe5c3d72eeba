//! Alexandria catalog service entry point

use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use alexandria::catalog::{api, autoload, CatalogRepositories, CatalogServices, CatalogState};
use alexandria::config::AppConfig;
use alexandria::support::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");
    telemetry::init_tracing(&config.logging, "alexandria_catalog");

    tracing::info!("Starting Alexandria catalog v{}", env!("CARGO_PKG_VERSION"));

    let repositories = CatalogRepositories::new();
    if config.catalog.autoload.enabled {
        autoload::load_catalog(&repositories, &config.catalog.autoload)
            .expect("Failed to load catalog seed data");
    }

    let services = CatalogServices::new(&repositories);
    let server = config.catalog.server.clone();
    let state = CatalogState {
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
    tracing::info!("Catalog listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
