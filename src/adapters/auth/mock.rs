//! Mock session validator for tests.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Maps fixed token strings to users; everything else is rejected.
#[derive(Default)]
pub struct MockSessionValidator {
    users: HashMap<String, AuthenticatedUser>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token-to-user mapping.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.users.insert(token.into(), user);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.users
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AgencyId, UserId};

    #[tokio::test]
    async fn known_token_resolves() {
        let user = AuthenticatedUser::new(UserId::new(), AgencyId::new(), "a@example.com");
        let validator = MockSessionValidator::new().with_user("tok", user.clone());

        let resolved = validator.validate("tok").await.unwrap();
        assert_eq!(resolved.email, user.email);
    }

    #[tokio::test]
    async fn unknown_token_rejected() {
        let validator = MockSessionValidator::new();
        assert!(matches!(
            validator.validate("nope").await,
            Err(AuthError::InvalidToken)
        ));
    }
}
