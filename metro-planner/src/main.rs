use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_planner::config::ServerConfig;
use metro_planner::network::Graph;
use metro_planner::stations::{load_line_orderings, load_stations};
use metro_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Station data is required; line sequences are optional
    let stations = match load_stations(&config.stations_file) {
        Ok(stations) => stations,
        Err(e) => {
            error!("error loading stations file: {e}");
            return ExitCode::FAILURE;
        }
    };
    let orderings = load_line_orderings(&config.line_sequences_file);

    let graph = Graph::build(
        &stations,
        &stations.line_memberships(),
        &orderings,
        &config.cost,
    );

    let state = AppState::new(stations, graph);
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Metro Route Planner listening on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET  /health               - Health check");
    info!("  GET  /api/stations/search  - Search stations by name");
    info!("  GET  /api/lines            - Stations by line");
    info!("  GET  /route                - Plan a route (?from=ID&to=ID)");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    info!("Goodbye!");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
