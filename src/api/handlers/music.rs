//! Soundtrack commands.

use axum::Json;
use axum::extract::State;

use super::relay;
use crate::api::dto::AckResponse;
use crate::app_state::AppState;
use crate::domain::{Command, CommandBody};

/// `POST /playMusic` — Play music.
#[utoipa::path(
    post,
    path = "/playMusic",
    tag = "Music",
    summary = "Play music",
    description = "Broadcasts `musicPlay` with `src` and `fadeMs`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn play_music(State(state): State<AppState>, body: CommandBody) -> Json<AckResponse> {
    relay(&state, Command::PlayMusic, &body)
}

/// `POST /setMusicPhase` — Set music phase.
#[utoipa::path(
    post,
    path = "/setMusicPhase",
    tag = "Music",
    summary = "Set music phase",
    description = "Broadcasts `musicPhase` with `phase` and `src`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn set_music_phase(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::SetMusicPhase, &body)
}

/// `POST /layerMusic` — Layer music.
#[utoipa::path(
    post,
    path = "/layerMusic",
    tag = "Music",
    summary = "Layer music",
    description = "Broadcasts `musicLayer` with `action`, `layerId` and `src`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn layer_music(State(state): State<AppState>, body: CommandBody) -> Json<AckResponse> {
    relay(&state, Command::LayerMusic, &body)
}
