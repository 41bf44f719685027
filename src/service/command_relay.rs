//! Command relay: turns commands into envelopes and broadcasts them.

use crate::domain::{Broadcaster, Command, CommandBody};

/// Orchestration layer between the HTTP routes and the [`Broadcaster`].
///
/// Stateless: every call maps the body, broadcasts the resulting
/// envelopes in order, and forgets them.
#[derive(Debug, Clone)]
pub struct CommandRelay {
    broadcaster: Broadcaster,
}

impl CommandRelay {
    /// Creates a new `CommandRelay`.
    #[must_use]
    pub fn new(broadcaster: Broadcaster) -> Self {
        Self { broadcaster }
    }

    /// Returns a reference to the inner [`Broadcaster`].
    #[must_use]
    pub fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }

    /// Executes a command.
    ///
    /// Returns the total number of frames handed to listeners.
    pub fn execute(&self, command: Command, body: &CommandBody) -> usize {
        let envelopes = command.envelopes(body);
        let mut delivered = 0;
        for envelope in &envelopes {
            delivered += self.broadcaster.broadcast(envelope);
        }
        tracing::debug!(
            command = command.name(),
            envelopes = envelopes.len(),
            delivered,
            "command relayed"
        );
        delivered
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Frame;
    use serde_json::{Value, json};
    use tokio::sync::broadcast;

    fn relay() -> CommandRelay {
        CommandRelay::new(Broadcaster::new(16))
    }

    fn next_event(rx: &mut broadcast::Receiver<Frame>) -> Option<Value> {
        let frame = rx.try_recv().ok()?;
        let value: Value = serde_json::from_str(&frame).ok()?;
        value.get("event").cloned()
    }

    #[test]
    fn execute_without_listeners_delivers_nothing() {
        assert_eq!(relay().execute(Command::EndCombat, &CommandBody::empty()), 0);
    }

    #[test]
    fn boss_phase_with_text_broadcasts_two_frames_in_order() {
        let relay = relay();
        let mut rx = relay.broadcaster().subscribe();
        let body = CommandBody::from(json!({
            "phaseNumber": 2,
            "pseudoCutsceneText": "It awakens.",
        }));

        assert_eq!(relay.execute(Command::UpdateBossPhase, &body), 2);
        assert_eq!(next_event(&mut rx), Some(json!("cutscene")));
        assert_eq!(next_event(&mut rx), Some(json!("bossPhaseChanged")));
        assert_eq!(next_event(&mut rx), None);
    }

    #[test]
    fn unmatched_story_trigger_broadcasts_nothing() {
        let relay = relay();
        let mut rx = relay.broadcaster().subscribe();
        let body = CommandBody::from(json!({ "storyText": "The heroes arrive." }));

        assert_eq!(relay.execute(Command::StoryTriggerCombat, &body), 0);
        assert_eq!(next_event(&mut rx), None);
    }

    #[test]
    fn delivered_counts_every_listener() {
        let relay = relay();
        let _rx1 = relay.broadcaster().subscribe();
        let _rx2 = relay.broadcaster().subscribe();

        assert_eq!(relay.execute(Command::PlayMusic, &CommandBody::empty()), 2);
    }
}
