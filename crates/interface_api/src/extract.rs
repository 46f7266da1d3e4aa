//! Request extractors
//!
//! Both extractors reject with [`ApiError::BadRequest`], so malformed input
//! always produces a JSON error body and never reaches the service.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use domain_slip::SlipId;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body
///
/// Unlike `axum::Json` this does not insist on a `Content-Type` header, and
/// every failure (unreadable body, bad syntax, wrong shape) is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

/// The `:id` path segment, parsed as a slip id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlipIdPath(pub SlipId);

#[async_trait]
impl<S> FromRequestParts<S> for SlipIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        parse_slip_id(&raw).map(SlipIdPath)
    }
}

/// Parses a decimal slip id
pub fn parse_slip_id(raw: &str) -> Result<SlipId, ApiError> {
    raw.parse::<SlipId>()
        .map_err(|e| ApiError::BadRequest(format!("invalid slip id {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slip_id() {
        assert_eq!(parse_slip_id("1").unwrap(), 1);
        assert_eq!(parse_slip_id("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn test_parse_slip_id_rejects_garbage() {
        for raw in ["x", "", "1.5", "1e3", "9223372036854775808"] {
            let err = parse_slip_id(raw).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(_)), "{raw} should be rejected");
        }
        assert_eq!(
            parse_slip_id("x").unwrap_err().message(),
            "invalid slip id \"x\": invalid digit found in string"
        );
    }
}
