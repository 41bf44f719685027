//! Service layer: command orchestration.
//!
//! [`CommandRelay`] maps commands to envelopes and emits them through the
//! [`super::domain::Broadcaster`].

pub mod command_relay;

pub use command_relay::CommandRelay;
