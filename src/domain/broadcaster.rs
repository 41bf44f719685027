//! Fan-out of event envelopes to every open listener.
//!
//! [`Broadcaster`] wraps a [`tokio::sync::broadcast`] channel of
//! pre-serialized text frames. Each WebSocket connection holds one
//! receiver for as long as it is open; dropping the receiver is how a
//! closing connection leaves the fan-out set.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::Envelope;

/// A serialized envelope shared by every receiver.
pub type Frame = Arc<str>;

/// Broadcast hub for serialized [`Envelope`]s.
///
/// Each envelope is serialized once, whatever the number of listeners.
/// When a listener's buffer of `capacity` frames is full, it skips the
/// oldest frames instead of slowing down the others.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    sender: broadcast::Sender<Frame>,
}

impl Broadcaster {
    /// Creates a new `Broadcaster` with the given per-listener capacity.
    ///
    /// A zero capacity is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Sends an envelope to every open listener.
    ///
    /// Returns the number of listeners the frame was handed to. With no
    /// listener the envelope is dropped.
    pub fn broadcast(&self, envelope: &Envelope) -> usize {
        let frame = match envelope.to_frame() {
            Ok(frame) => Frame::from(frame),
            Err(err) => {
                tracing::error!(
                    event = %envelope.event,
                    error = %err,
                    "failed to serialize envelope"
                );
                return 0;
            }
        };
        self.sender.send(frame).unwrap_or(0)
    }

    /// Registers a new listener that receives all future frames.
    ///
    /// Each WebSocket connection calls this once when it is accepted.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Frame> {
        self.sender.subscribe()
    }

    /// Returns the number of currently open listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
