//! The fixed command table.
//!
//! Each [`Command`] corresponds to one `POST` route and knows how to turn a
//! [`CommandBody`] into the envelopes it emits. The mapping is pure; the
//! caller decides where the envelopes go.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::command_body::{CommandBody, is_truthy};
use super::envelope::{Envelope, RelayEvent};

/// Default for `animationType` on `playBattleIntroAnimation`.
pub const DEFAULT_ANIMATION_TYPE: &str = "x-slash";

/// Default for `triggerPhrase` on `storyTriggerCombat`.
pub const DEFAULT_TRIGGER_PHRASE: &str = "Begin combat";

/// A command accepted on one of the `POST` routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `POST /startCombat`
    StartCombat,
    /// `POST /endCombat`
    EndCombat,
    /// `POST /updateBossPhase`
    UpdateBossPhase,
    /// `POST /triggerCutscene`
    TriggerCutscene,
    /// `POST /playBanterLine`
    PlayBanterLine,
    /// `POST /queueBanter`
    QueueBanter,
    /// `POST /playVoiceLine`
    PlayVoiceLine,
    /// `POST /updateRelationship`
    UpdateRelationship,
    /// `POST /setUniverseUI`
    SetUniverseUi,
    /// `POST /setCharacterPortrait`
    SetCharacterPortrait,
    /// `POST /playBattleIntroAnimation`
    PlayBattleIntroAnimation,
    /// `POST /playMusic`
    PlayMusic,
    /// `POST /setMusicPhase`
    SetMusicPhase,
    /// `POST /layerMusic`
    LayerMusic,
    /// `POST /activateWorldMechanic`
    ActivateWorldMechanic,
    /// `POST /storyTriggerCombat`
    StoryTriggerCombat,
}

impl Command {
    /// Every command, in route-table order.
    pub const ALL: [Self; 16] = [
        Self::StartCombat,
        Self::EndCombat,
        Self::UpdateBossPhase,
        Self::TriggerCutscene,
        Self::PlayBanterLine,
        Self::QueueBanter,
        Self::PlayVoiceLine,
        Self::UpdateRelationship,
        Self::SetUniverseUi,
        Self::SetCharacterPortrait,
        Self::PlayBattleIntroAnimation,
        Self::PlayMusic,
        Self::SetMusicPhase,
        Self::LayerMusic,
        Self::ActivateWorldMechanic,
        Self::StoryTriggerCombat,
    ];

    /// Returns the route path of the command.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::StartCombat => "/startCombat",
            Self::EndCombat => "/endCombat",
            Self::UpdateBossPhase => "/updateBossPhase",
            Self::TriggerCutscene => "/triggerCutscene",
            Self::PlayBanterLine => "/playBanterLine",
            Self::QueueBanter => "/queueBanter",
            Self::PlayVoiceLine => "/playVoiceLine",
            Self::UpdateRelationship => "/updateRelationship",
            Self::SetUniverseUi => "/setUniverseUI",
            Self::SetCharacterPortrait => "/setCharacterPortrait",
            Self::PlayBattleIntroAnimation => "/playBattleIntroAnimation",
            Self::PlayMusic => "/playMusic",
            Self::SetMusicPhase => "/setMusicPhase",
            Self::LayerMusic => "/layerMusic",
            Self::ActivateWorldMechanic => "/activateWorldMechanic",
            Self::StoryTriggerCombat => "/storyTriggerCombat",
        }
    }

    /// Returns the command name (the path without the leading slash).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Maps a body to the envelopes this command emits, in emission order.
    #[must_use]
    pub fn envelopes(self, body: &CommandBody) -> Vec<Envelope> {
        match self {
            Self::StartCombat => single(
                RelayEvent::CombatStarted,
                body.pick(&["party", "enemies", "universe", "musicTheme"]),
            ),
            Self::EndCombat => single(RelayEvent::CombatEnded, Map::new()),
            Self::UpdateBossPhase => boss_phase(body),
            Self::TriggerCutscene => single(RelayEvent::Cutscene, body.pick(&["text", "art"])),
            Self::PlayBanterLine => {
                single(RelayEvent::BanterLine, body.pick(&["character", "line"]))
            }
            Self::QueueBanter => single(RelayEvent::BanterQueue, body.pick(&["lines"])),
            Self::PlayVoiceLine => single(
                RelayEvent::VoiceLine,
                body.pick(&["character", "line", "voiceId"]),
            ),
            Self::UpdateRelationship => single(
                RelayEvent::RelationshipChanged,
                body.pick(&["from", "to", "change"]),
            ),
            Self::SetUniverseUi => single(
                RelayEvent::UniverseUiChanged,
                body.pick(&["universe", "styleTheme"]),
            ),
            Self::SetCharacterPortrait => single(
                RelayEvent::PortraitChanged,
                body.pick(&["character", "state", "portraitUrl", "expression"]),
            ),
            Self::PlayBattleIntroAnimation => {
                let mut payload = Map::new();
                payload.insert(
                    "animationType".to_string(),
                    body.get_or("animationType", DEFAULT_ANIMATION_TYPE),
                );
                single(RelayEvent::BattleIntroAnimation, payload)
            }
            Self::PlayMusic => single(RelayEvent::MusicPlay, body.pick(&["src", "fadeMs"])),
            Self::SetMusicPhase => single(RelayEvent::MusicPhase, body.pick(&["phase", "src"])),
            Self::LayerMusic => single(
                RelayEvent::MusicLayer,
                body.pick(&["action", "layerId", "src"]),
            ),
            Self::ActivateWorldMechanic => single(
                RelayEvent::WorldMechanic,
                body.pick(&["universe", "event", "payload"]),
            ),
            Self::StoryTriggerCombat => story_trigger(body),
        }
    }
}

fn single(event: RelayEvent, payload: Map<String, Value>) -> Vec<Envelope> {
    vec![Envelope::new(event, payload)]
}

/// Optional cutscene first, then the phase change.
fn boss_phase(body: &CommandBody) -> Vec<Envelope> {
    let mut out = Vec::with_capacity(2);
    if body.is_truthy("pseudoCutsceneText") {
        let mut cutscene = Map::new();
        body.copy_into(&mut cutscene, "pseudoCutsceneText", "text");
        out.push(Envelope::new(RelayEvent::Cutscene, cutscene));
    }
    let mut phase = Map::new();
    body.copy_into(&mut phase, "phaseNumber", "phase");
    out.push(Envelope::new(RelayEvent::BossPhaseChanged, phase));
    out
}

fn story_trigger(body: &CommandBody) -> Vec<Envelope> {
    let phrase = body.get_or("triggerPhrase", DEFAULT_TRIGGER_PHRASE);
    let story = body.get("storyText");

    let matched =
        story_text(story).is_some_and(|text| text.contains(coerce_text(&phrase).as_ref()));
    if !matched {
        return Vec::new();
    }

    let mut payload = Map::new();
    if let Some(story) = story {
        payload.insert("storyText".to_string(), story.clone());
    }
    payload.insert("triggerPhrase".to_string(), phrase);
    single(RelayEvent::CombatStartedFromStory, payload)
}

/// Strings are searched as is and falsy values count as empty text. Other
/// values cannot be searched.
fn story_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(v) if is_truthy(v) => None,
        _ => Some(""),
    }
}

/// Loose string coercion. Arrays join their items with commas (`null`
/// items become empty) and objects render as `[object Object]`.
fn coerce_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null | Value::Bool(_) => Cow::Owned(value.to_string()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => Cow::Owned(f.to_string()),
            _ => Cow::Owned(n.to_string()),
        },
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    other => coerce_text(other).into_owned(),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}
