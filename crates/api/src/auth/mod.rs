//! Caller authentication.
//!
//! - [`jwt`] -- HS256 access-token generation and validation.
//! - [`authenticate`] -- resolves the [`Caller`] behind a request context.

pub mod jwt;

use labtrack_core::error::CoreError;
use labtrack_core::roles::Role;
use labtrack_core::types::DbId;

use crate::context::RequestContext;
use self::jwt::{validate_token, JwtConfig};

/// The authenticated identity behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: DbId,
    pub role: Role,
}

impl Caller {
    /// Reject with `Forbidden` unless the caller holds one of `allowed`.
    pub fn require_any(&self, allowed: &[Role]) -> Result<(), CoreError> {
        if allowed.contains(&self.role) {
            return Ok(());
        }
        let names: Vec<&str> = allowed.iter().map(|r| r.as_str()).collect();
        Err(CoreError::Forbidden(format!(
            "{} role required",
            names.join(" or ")
        )))
    }
}

/// Resolve the caller from the `Authorization: Bearer <token>` header.
pub fn authenticate(context: &RequestContext, config: &JwtConfig) -> Result<Caller, CoreError> {
    let token = context.bearer_token()?;

    let claims = validate_token(token, config)
        .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))?;

    let role: Role = claims
        .role
        .parse()
        .map_err(|_| CoreError::Unauthorized(format!("Unknown role in token: {}", claims.role)))?;

    tracing::debug!(user_id = claims.sub, %role, "Authenticated caller");

    Ok(Caller {
        user_id: claims.sub,
        role,
    })
}
