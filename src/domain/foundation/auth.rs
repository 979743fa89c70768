//! Authentication types for the domain layer.
//!
//! These types represent an authenticated agent extracted from a validated
//! token. They have no provider dependencies - any token issuer can populate
//! them via the `SessionValidator` port.
//!
//! Every pipeline entry point requires a resolved user and agency; there is
//! no anonymous or cross-tenant operation.

use thiserror::Error;

use super::{AgencyId, UserId};

/// Authenticated agent extracted from a validated token.
///
/// This is a domain type with no provider dependencies. The `agency_id` is
/// the tenant boundary: every repository call is filtered by it.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// The agency (tenant) this user belongs to.
    pub agency_id: AgencyId,

    /// User's email address from the token claims.
    pub email: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// Typically called by the `SessionValidator` adapter after successfully
    /// validating a token.
    pub fn new(id: UserId, agency_id: AgencyId, email: impl Into<String>) -> Self {
        Self {
            id,
            agency_id,
            email: email.into(),
        }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// Token is valid but carries no agency claim, so no tenant can be resolved.
    #[error("Token has no agency claim")]
    MissingAgency,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}
