//! One-shot announcement of the public base URL.
//!
//! Behind a proxy the relay cannot know its public address up front, so
//! the first request that carries a `Host` header is used to log it.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::HOST;
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

/// Scheme assumed when no `X-Forwarded-Proto` header is present.
const DEFAULT_PROTO: &str = "https";

/// Logs the public base URL once, from the first request with a `Host`.
#[derive(Debug, Default)]
pub struct PublicUrlAnnouncer {
    announced: AtomicBool,
}

impl PublicUrlAnnouncer {
    /// Creates an announcer that has not fired yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspects request headers and announces the base URL if this is the
    /// first request with a `Host` header.
    ///
    /// Returns the announced base URL, or `None` if nothing was logged.
    pub fn observe(&self, headers: &HeaderMap) -> Option<String> {
        let host = headers.get(HOST)?.to_str().ok()?;
        if self
            .announced
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }

        let proto = headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_PROTO);
        let base = format!("{proto}://{host}");
        tracing::info!(
            public_url = %base,
            openapi = %format!("{base}/openapi.json"),
            "public url detected"
        );
        Some(base)
    }

    /// Returns `true` once the base URL has been announced.
    #[must_use]
    pub fn has_announced(&self) -> bool {
        self.announced.load(Ordering::Acquire)
    }
}

/// Middleware feeding every request to the [`PublicUrlAnnouncer`].
pub async fn announce_public_url(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.announcer.has_announced() {
        let _ = state.announcer.observe(request.headers());
    }
    next.run(request).await
}
