pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{delete, get};
use axum::Router;
use menu_core::config::Config;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(root: PathBuf, config: Config) -> Router {
    let app_state = state::AppState::new(root, config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Catalog
        .route("/api/catalog", get(routes::catalog::get_catalog))
        .route(
            "/api/catalog/{category}",
            get(routes::catalog::get_category).post(routes::catalog::add_option),
        )
        .route(
            "/api/catalog/{category}/{option}",
            delete(routes::catalog::remove_option),
        )
        // Suggestions
        .route(
            "/api/suggest/{category}",
            get(routes::suggest::suggest_category),
        )
        .route("/api/today", get(routes::suggest::today))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Serve the API on a pre-bound listener.
///
/// The caller binds first so it can report the actual port when `port = 0`
/// lets the OS pick one.
pub async fn serve_on(
    root: PathBuf,
    config: Config,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root, config);

    tracing::info!("menu API listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}/api/today");
        if let Err(e) = open::that(&url) {
            tracing::warn!("could not open browser: {e}");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
