//! REST endpoint handlers organized by concern.

pub mod combat;
pub mod music;
pub mod narrative;
pub mod system;
pub mod world;

use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::AckResponse;
use crate::app_state::AppState;
use crate::domain::{Command, CommandBody};

/// Executes a command and acknowledges it. Never fails.
fn relay(state: &AppState, command: Command, body: &CommandBody) -> Json<AckResponse> {
    state.relay.execute(command, body);
    Json(AckResponse::ok())
}

/// Composes the sixteen command routes.
pub fn command_routes() -> Router<AppState> {
    Router::new()
        .route(Command::StartCombat.path(), post(combat::start_combat))
        .route(Command::EndCombat.path(), post(combat::end_combat))
        .route(Command::UpdateBossPhase.path(), post(combat::update_boss_phase))
        .route(Command::TriggerCutscene.path(), post(narrative::trigger_cutscene))
        .route(Command::PlayBanterLine.path(), post(narrative::play_banter_line))
        .route(Command::QueueBanter.path(), post(narrative::queue_banter))
        .route(Command::PlayVoiceLine.path(), post(narrative::play_voice_line))
        .route(
            Command::UpdateRelationship.path(),
            post(narrative::update_relationship),
        )
        .route(Command::SetUniverseUi.path(), post(world::set_universe_ui))
        .route(
            Command::SetCharacterPortrait.path(),
            post(narrative::set_character_portrait),
        )
        .route(
            Command::PlayBattleIntroAnimation.path(),
            post(combat::play_battle_intro_animation),
        )
        .route(Command::PlayMusic.path(), post(music::play_music))
        .route(Command::SetMusicPhase.path(), post(music::set_music_phase))
        .route(Command::LayerMusic.path(), post(music::layer_music))
        .route(
            Command::ActivateWorldMechanic.path(),
            post(world::activate_world_mechanic),
        )
        .route(
            Command::StoryTriggerCombat.path(),
            post(combat::story_trigger_combat),
        )
}

/// System routes: landing page, manifest, health.
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(system::landing_handler))
        .route("/openapi.json", get(system::manifest_handler))
        .route("/health", get(system::health_handler))
}
