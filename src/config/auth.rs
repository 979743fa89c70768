//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration.
///
/// Tokens are HS256 JWTs issued by the hosted auth service; the shared
/// secret is all this backend needs to validate them.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// Shared secret for JWT signature verification
    pub jwt_secret: String,

    /// Expected token issuer (optional; skipped when unset)
    pub issuer: Option<String>,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if self.jwt_secret.len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        Ok(())
    }
}
