//! Routing definitions for the shipment API.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Creates the main router with all routes and middleware.
///
/// ```ignore
/// let router = create_router(AppState::new(engine, db));
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/shipment",
            get(handlers::list_shipments).post(handlers::create_shipment),
        )
        .route("/shipment/{id}", get(handlers::get_shipment));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
