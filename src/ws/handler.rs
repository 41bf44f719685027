//! Axum WebSocket upgrade handler.

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::{IntoResponse, Response};

use super::connection::run_connection;
use crate::app_state::AppState;

/// `GET /ws` — Upgrade HTTP connection to a WebSocket listener.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    accept_listener(ws, &state)
}

/// Accepts an upgrade request as a new listener.
///
/// The listener joins the broadcast set before the handshake response is
/// sent, so no frame published after the client sees the upgrade is lost.
pub fn accept_listener(ws: WebSocketUpgrade, state: &AppState) -> Response {
    let frames = state.broadcaster.subscribe();
    let broadcaster = state.broadcaster.clone();

    ws.on_upgrade(move |socket| run_connection(socket, frames, broadcaster))
        .into_response()
}
