//! Infallible extraction of [`CommandBody`] from requests.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;

use crate::domain::CommandBody;

impl<S> FromRequest<S> for CommandBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self::empty());
        }
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self::from_slice(&bytes)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "unreadable command body treated as empty");
                Ok(Self::empty())
            }
        }
    }
}

/// Returns `true` for `application/json` and any `+json` media type.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn json_content_types() {
        assert!(has_json_content_type(&with_content_type("application/json")));
        assert!(has_json_content_type(&with_content_type(
            "Application/JSON; charset=utf-8"
        )));
        assert!(has_json_content_type(&with_content_type("application/vnd.api+json")));
    }

    #[test]
    fn non_json_content_types() {
        assert!(!has_json_content_type(&HeaderMap::new()));
        assert!(!has_json_content_type(&with_content_type("text/plain")));
        assert!(!has_json_content_type(&with_content_type(
            "application/x-www-form-urlencoded"
        )));
    }
}
