//! Cutscene, dialogue and character commands.

use axum::Json;
use axum::extract::State;

use super::relay;
use crate::api::dto::AckResponse;
use crate::app_state::AppState;
use crate::domain::{Command, CommandBody};

/// `POST /triggerCutscene` — Trigger cutscene.
#[utoipa::path(
    post,
    path = "/triggerCutscene",
    tag = "Narrative",
    summary = "Trigger cutscene",
    description = "Broadcasts `cutscene` with `text` and `art`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn trigger_cutscene(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::TriggerCutscene, &body)
}

/// `POST /playBanterLine` — Play banter line.
#[utoipa::path(
    post,
    path = "/playBanterLine",
    tag = "Narrative",
    summary = "Play banter line",
    description = "Broadcasts `banterLine` with `character` and `line`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn play_banter_line(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::PlayBanterLine, &body)
}

/// `POST /queueBanter` — Queue banter.
#[utoipa::path(
    post,
    path = "/queueBanter",
    tag = "Narrative",
    summary = "Queue banter",
    description = "Broadcasts `banterQueue` with `lines`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn queue_banter(State(state): State<AppState>, body: CommandBody) -> Json<AckResponse> {
    relay(&state, Command::QueueBanter, &body)
}

/// `POST /playVoiceLine` — Play voice line.
#[utoipa::path(
    post,
    path = "/playVoiceLine",
    tag = "Narrative",
    summary = "Play voice line",
    description = "Broadcasts `voiceLine` with `character`, `line` and `voiceId`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn play_voice_line(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::PlayVoiceLine, &body)
}

/// `POST /updateRelationship` — Update relationship.
#[utoipa::path(
    post,
    path = "/updateRelationship",
    tag = "Narrative",
    summary = "Update relationship",
    description = "Broadcasts `relationshipChanged` with `from`, `to` and `change`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn update_relationship(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::UpdateRelationship, &body)
}

/// `POST /setCharacterPortrait` — Set character portrait.
#[utoipa::path(
    post,
    path = "/setCharacterPortrait",
    tag = "Narrative",
    summary = "Set character portrait",
    description = "Broadcasts `portraitChanged` with `character`, `state`, `portraitUrl` and `expression`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn set_character_portrait(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::SetCharacterPortrait, &body)
}
