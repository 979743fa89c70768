//! JWT Session Validator - validates HS256 tokens from the hosted auth
//! service.
//!
//! Tokens carry `sub` (user id), `email`, and `agency_id` claims; the
//! agency claim is mandatory because every pipeline entry point is
//! tenant-scoped.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Claims expected in an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: String,
    /// User email.
    #[serde(default)]
    pub email: Option<String>,
    /// Tenant the user belongs to.
    #[serde(default)]
    pub agency_id: Option<String>,
    /// Expiry, seconds since epoch.
    pub exp: usize,
}

/// HS256 session validator.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    /// Creates a validator from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let claims = data.claims;
        let user_id = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
        let agency_id = claims
            .agency_id
            .as_deref()
            .ok_or(AuthError::MissingAgency)?
            .parse()
            .map_err(|_| AuthError::MissingAgency)?;

        Ok(AuthenticatedUser::new(
            user_id,
            agency_id,
            claims.email.unwrap_or_default(),
        ))
    }
}
