//! Domain layer: command bodies, the command table, envelopes, and the
//! broadcaster that fans envelopes out to listeners.

pub mod broadcaster;
pub mod command;
pub mod command_body;
pub mod envelope;

pub use broadcaster::{Broadcaster, Frame};
pub use command::Command;
pub use command_body::CommandBody;
pub use envelope::{Envelope, RelayEvent};
