//! Universe and world mechanic commands.

use axum::Json;
use axum::extract::State;

use super::relay;
use crate::api::dto::AckResponse;
use crate::app_state::AppState;
use crate::domain::{Command, CommandBody};

/// `POST /setUniverseUI` — Set universe UI.
#[utoipa::path(
    post,
    path = "/setUniverseUI",
    tag = "World",
    summary = "Set universe UI",
    description = "Broadcasts `universeUIChanged` with `universe` and `styleTheme`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn set_universe_ui(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::SetUniverseUi, &body)
}

/// `POST /activateWorldMechanic` — Activate world mechanic.
#[utoipa::path(
    post,
    path = "/activateWorldMechanic",
    tag = "World",
    summary = "Activate world mechanic",
    description = "Broadcasts `worldMechanic` with `universe`, `event` and `payload`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn activate_world_mechanic(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::ActivateWorldMechanic, &body)
}
