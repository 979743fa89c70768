//! Session Validator Port - token validation at the HTTP boundary.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates a bearer token into an authenticated user.
///
/// Keeps the HTTP middleware provider-agnostic: whether tokens come from
/// the hosted auth service or a test fixture, the middleware doesn't change.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
