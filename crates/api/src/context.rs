//! Per-request context handed to controllers.
//!
//! Controllers do not see the raw request; they see a [`RequestContext`]
//! holding the inbound headers. Handlers extract it from the request parts and
//! tests can build one by hand.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use labtrack_core::error::CoreError;

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub headers: HeaderMap,
}

impl RequestContext {
    pub fn new(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Raw `Authorization` header value, if present and valid ASCII.
    pub fn authorization(&self) -> Option<&str> {
        self.headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
    }

    /// The token part of `Authorization: Bearer <token>`.
    pub fn bearer_token(&self) -> Result<&str, CoreError> {
        let header = self
            .authorization()
            .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

        header
            .strip_prefix("Bearer ")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                )
            })
    }
}

/// Implemented by anything that carries a [`RequestContext`].
pub trait HasRequestContext {
    fn request_context(&self) -> &RequestContext;
    fn request_context_mut(&mut self) -> &mut RequestContext;
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestContext::new(parts.headers.clone()))
    }
}
