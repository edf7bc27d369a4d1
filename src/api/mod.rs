// API layer module (adapters for controllers)

use axum::{routing::get, Router};

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod state;

pub use state::AppState;

use handlers::{albums, health};

/// Build the application router
///
/// Middleware (tracing, CORS) is layered on by the server so tests can
/// drive the bare routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/albums",
            get(albums::list_albums).post(albums::create_album),
        )
        .route(
            "/albums/:id",
            get(albums::get_album)
                .put(albums::update_album)
                .delete(albums::delete_album),
        )
        .with_state(state)
}
