//! Relay error types.
//!
//! Command routes never fail, so [`RelayError`] only covers startup and
//! serving: configuration, binding the listener, and server I/O.

/// Errors raised while starting or running the relay.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// An environment variable held an unusable value.
    #[error("invalid configuration: {key}={value:?}")]
    InvalidConfig {
        /// Variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: std::net::SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_names_key() {
        let err = RelayError::InvalidConfig {
            key: "PORT",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid configuration: PORT=\"abc\"");
    }
}
