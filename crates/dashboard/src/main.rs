//! Clementine Dashboard - Internal back-office screens.
//!
//! This binary serves the dashboard shell on port 4100. Every screen is a
//! static placeholder in this snapshot; data binding to the API comes
//! later, area by area.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod config;
mod routes;

use tower_http::trace::TraceLayer;

use config::DashboardConfig;

#[tokio::main]
async fn main() {
    let config = DashboardConfig::from_env().expect("Failed to load configuration");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clementine_dashboard=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let app = routes::router().layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!("dashboard listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
