//! WebSocket layer: listener upgrade and the per-connection send loop.
//!
//! Listeners connect at `/ws` or at `/` on the HTTP port and receive every
//! broadcast envelope as a JSON text frame.

pub mod connection;
pub mod handler;
