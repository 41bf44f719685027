//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Command routes sit at the root (`/startCombat`, `/playMusic`, ...)
//! next to the landing page, the manifest and the health check. The
//! WebSocket endpoint shares the same port.

pub mod announce;
pub mod docs;
pub mod dto;
pub mod extract;
pub mod handlers;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::ws::handler::ws_handler;

/// Builds the router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::command_routes())
        .merge(handlers::system_routes())
}

/// Builds the complete application: REST routes, `/ws`, and the
/// middleware stack, bound to `state`.
pub fn build_app(state: AppState) -> Router {
    let router = build_router().route("/ws", get(ws_handler));

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
    };

    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            announce::announce_public_url,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
