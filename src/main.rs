// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use citypulse::application::city_provider::CityProvider;
use citypulse::application::city_service::CityService;
use citypulse::application::dashboard_service::DashboardService;
use citypulse::infrastructure::backend_api::HttpCityProvider;
use citypulse::infrastructure::config::load_service_config;
use citypulse::presentation::app_state::AppState;
use citypulse::presentation::handlers::{
    city_summary, city_timeseries, dashboard_overview, health_check, list_cities,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_service_config()?;

    // Create provider (infrastructure layer)
    let provider: Arc<dyn CityProvider> =
        Arc::new(HttpCityProvider::new(config.backend.base_url.clone()));

    // Create services (application layer)
    let city_service = CityService::new(provider.clone());
    let dashboard_service = DashboardService::new(provider.clone());

    // Create application state
    let state = Arc::new(AppState {
        city_service,
        dashboard_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/api/v1/cities", get(list_cities))
        .route("/api/v1/cities/:name/summary", get(city_summary))
        .route("/api/v1/cities/:name/timeseries", get(city_timeseries))
        .route("/api/v1/dashboard", get(dashboard_overview))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.listen.parse()?;
    println!("Starting citypulse service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
