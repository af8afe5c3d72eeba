//! Alexandria website entry point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use alexandria::config::AppConfig;
use alexandria::support::telemetry;
use alexandria::website::catalog_client::CatalogRestClient;
use alexandria::website::navigation::NavigationSessions;
use alexandria::website::{pages, WebsiteState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");
    telemetry::init_tracing(&config.logging, "alexandria_website");

    tracing::info!("Starting Alexandria website v{}", env!("CARGO_PKG_VERSION"));

    let catalog =
        CatalogRestClient::new(&config.website.catalog).expect("Failed to create catalog client");
    let sessions = NavigationSessions::new(Duration::from_secs(
        config.website.session.ttl_minutes * 60,
    ));
    let server = config.website.server.clone();
    let state = WebsiteState {
        config: Arc::new(config),
        catalog: Arc::new(catalog),
        sessions: Arc::new(sessions),
    };

    let app = pages::router(state).layer(telemetry::http_trace_layer());

    let addr = SocketAddr::new(server.host.parse().expect("Invalid host address"), server.port);
    tracing::info!("Website listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
