//! # scene-relay
//!
//! Stateless HTTP-to-WebSocket relay. Small JSON commands posted to fixed
//! routes are re-emitted as `{event, payload}` frames to every connected
//! WebSocket listener. Nothing is stored, acknowledged or retried.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients                 WebSocket listeners
//!     │                                ▲
//!     ├── REST Handlers (api/)         │
//!     │                                │
//!     ├── CommandRelay (service/)      ├── WS Handler (ws/)
//!     │                                │
//!     └── Command → Envelope ──► Broadcaster (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;
