//! Event envelopes delivered to WebSocket listeners.
//!
//! Every broadcast is a single JSON text frame of the shape
//! `{"event": "<name>", "payload": {...}}`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Names of the events a listener can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelayEvent {
    /// A combat encounter started.
    CombatStarted,
    /// The current combat encounter ended.
    CombatEnded,
    /// Cutscene text (and optional art) should be shown.
    Cutscene,
    /// The boss moved to a new phase.
    BossPhaseChanged,
    /// A single banter line.
    BanterLine,
    /// A batch of banter lines to queue.
    BanterQueue,
    /// A voiced line.
    VoiceLine,
    /// Relationship between two characters changed.
    RelationshipChanged,
    /// Universe-specific UI theme changed.
    #[serde(rename = "universeUIChanged")]
    UniverseUiChanged,
    /// A character portrait changed.
    PortraitChanged,
    /// Battle intro animation should play.
    BattleIntroAnimation,
    /// Start a music track.
    MusicPlay,
    /// Switch the music phase.
    MusicPhase,
    /// Add or remove a music layer.
    MusicLayer,
    /// A world mechanic was activated.
    WorldMechanic,
    /// Story text contained the combat trigger phrase.
    CombatStartedFromStory,
}

impl RelayEvent {
    /// Returns the wire name of the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CombatStarted => "combatStarted",
            Self::CombatEnded => "combatEnded",
            Self::Cutscene => "cutscene",
            Self::BossPhaseChanged => "bossPhaseChanged",
            Self::BanterLine => "banterLine",
            Self::BanterQueue => "banterQueue",
            Self::VoiceLine => "voiceLine",
            Self::RelationshipChanged => "relationshipChanged",
            Self::UniverseUiChanged => "universeUIChanged",
            Self::PortraitChanged => "portraitChanged",
            Self::BattleIntroAnimation => "battleIntroAnimation",
            Self::MusicPlay => "musicPlay",
            Self::MusicPhase => "musicPhase",
            Self::MusicLayer => "musicLayer",
            Self::WorldMechanic => "worldMechanic",
            Self::CombatStartedFromStory => "combatStartedFromStory",
        }
    }
}

impl std::fmt::Display for RelayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged event ready to be fanned out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// Event name.
    pub event: RelayEvent,
    /// Event payload; always a JSON object.
    pub payload: Value,
}

impl Envelope {
    /// Creates an envelope from an event and its payload fields.
    #[must_use]
    pub fn new(event: RelayEvent, payload: Map<String, Value>) -> Self {
        Self {
            event,
            payload: Value::Object(payload),
        }
    }

    /// Serializes the envelope into a text frame.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serde_name_matches_as_str() {
        for event in [
            RelayEvent::CombatStarted,
            RelayEvent::UniverseUiChanged,
            RelayEvent::CombatStartedFromStory,
            RelayEvent::BattleIntroAnimation,
        ] {
            let Ok(name) = serde_json::to_value(event) else {
                panic!("event should serialize");
            };
            assert_eq!(name, json!(event.as_str()));
        }
    }

    #[test]
    fn universe_ui_keeps_upper_case() {
        assert_eq!(RelayEvent::UniverseUiChanged.to_string(), "universeUIChanged");
    }

    #[test]
    fn frame_has_event_and_payload() {
        let mut payload = Map::new();
        payload.insert("phase".to_string(), json!(2));
        let envelope = Envelope::new(RelayEvent::BossPhaseChanged, payload);
        let Ok(frame) = envelope.to_frame() else {
            panic!("envelope should serialize");
        };
        let Ok(parsed) = serde_json::from_str::<Value>(&frame) else {
            panic!("frame should be valid JSON");
        };
        assert_eq!(
            parsed,
            json!({ "event": "bossPhaseChanged", "payload": { "phase": 2 } })
        );
    }
}
