//! Combat encounter commands.

use axum::Json;
use axum::extract::State;

use super::relay;
use crate::api::dto::AckResponse;
use crate::app_state::AppState;
use crate::domain::{Command, CommandBody};

/// `POST /startCombat` — Start combat.
#[utoipa::path(
    post,
    path = "/startCombat",
    tag = "Combat",
    summary = "Start combat",
    description = "Broadcasts `combatStarted` with `party`, `enemies`, `universe` and `musicTheme`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn start_combat(State(state): State<AppState>, body: CommandBody) -> Json<AckResponse> {
    relay(&state, Command::StartCombat, &body)
}

/// `POST /endCombat` — End combat.
#[utoipa::path(
    post,
    path = "/endCombat",
    tag = "Combat",
    summary = "End combat",
    description = "Broadcasts `combatEnded` with an empty payload. The body is ignored.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn end_combat(State(state): State<AppState>, body: CommandBody) -> Json<AckResponse> {
    relay(&state, Command::EndCombat, &body)
}

/// `POST /updateBossPhase` — Update boss phase.
#[utoipa::path(
    post,
    path = "/updateBossPhase",
    tag = "Combat",
    summary = "Update boss phase",
    description = "Broadcasts `cutscene` with `text` when `pseudoCutsceneText` is truthy, then `bossPhaseChanged` with `phase` taken from `phaseNumber`.",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn update_boss_phase(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::UpdateBossPhase, &body)
}

/// `POST /playBattleIntroAnimation` — Play battle intro animation.
#[utoipa::path(
    post,
    path = "/playBattleIntroAnimation",
    tag = "Combat",
    summary = "Play battle intro animation",
    description = "Broadcasts `battleIntroAnimation` with `animationType` (default `x-slash`).",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn play_battle_intro_animation(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::PlayBattleIntroAnimation, &body)
}

/// `POST /storyTriggerCombat` — Start combat from story text.
#[utoipa::path(
    post,
    path = "/storyTriggerCombat",
    tag = "Combat",
    summary = "Start combat from story text",
    description = "Broadcasts `combatStartedFromStory` only when `storyText` contains `triggerPhrase` (default `Begin combat`, case-sensitive).",
    request_body = CommandBody,
    responses(
        (status = 200, description = "Command relayed", body = AckResponse),
    )
)]
pub async fn story_trigger_combat(
    State(state): State<AppState>,
    body: CommandBody,
) -> Json<AckResponse> {
    relay(&state, Command::StoryTriggerCombat, &body)
}
