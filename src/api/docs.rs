//! Generated OpenAPI document.

use utoipa::OpenApi;

use super::dto::{AckResponse, HealthResponse};
use super::handlers::{combat, music, narrative, system, world};
use crate::domain::CommandBody;

/// OpenAPI description of every route, built from the handler annotations.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Scene Relay",
        description = "Accepts JSON commands over HTTP and re-emits them as `{event, payload}` frames to every WebSocket listener."
    ),
    paths(
        combat::start_combat,
        combat::end_combat,
        combat::update_boss_phase,
        combat::play_battle_intro_animation,
        combat::story_trigger_combat,
        narrative::trigger_cutscene,
        narrative::play_banter_line,
        narrative::queue_banter,
        narrative::play_voice_line,
        narrative::update_relationship,
        narrative::set_character_portrait,
        music::play_music,
        music::set_music_phase,
        music::layer_music,
        world::set_universe_ui,
        world::activate_world_mechanic,
        system::landing_handler,
        system::manifest_handler,
        system::health_handler,
    ),
    components(schemas(AckResponse, CommandBody, HealthResponse)),
    tags(
        (name = "Combat", description = "Combat encounter commands"),
        (name = "Narrative", description = "Cutscene, dialogue and character commands"),
        (name = "Music", description = "Soundtrack commands"),
        (name = "World", description = "Universe and world mechanic commands"),
        (name = "System", description = "Landing page, manifest and health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::Command;

    #[test]
    fn every_command_is_documented() {
        let doc = ApiDoc::openapi();
        for command in Command::ALL {
            assert!(
                doc.paths.paths.contains_key(command.path()),
                "{} missing from generated document",
                command.path()
            );
        }
    }

    #[test]
    fn command_body_schema_is_registered() {
        let Ok(doc) = serde_json::to_value(ApiDoc::openapi()) else {
            panic!("generated document should serialize");
        };
        assert!(doc["components"]["schemas"]["CommandBody"].is_object());
        assert!(doc["paths"]["/startCombat"]["post"]["requestBody"].is_object());
    }
}
