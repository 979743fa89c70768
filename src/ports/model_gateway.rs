//! Model Gateway Port - interface to the external language model.
//!
//! The pipeline treats the model as a single-shot, non-streaming text
//! function: one prompt in, one text reply out. Implementations connect to
//! a hosted provider and translate its failures into [`ModelError`].
//!
//! No retries happen at this seam: a single model call is the unit of work,
//! and the orchestrator decides what each failure mode means for the user
//! (notably rate limiting, which becomes an in-band chat message rather
//! than an error).

use async_trait::async_trait;
use thiserror::Error;

/// Port for language model completions.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Issues one prompt and returns the model's text reply.
    async fn complete(&self, prompt: &str) -> Result<Completion, ModelError>;

    /// The model identifier requests are sent to.
    fn model_name(&self) -> &str;
}

/// A single non-streaming completion.
#[derive(Debug, Clone)]
pub struct Completion {
    /// The model's text reply.
    pub text: String,
    /// Model that generated the reply.
    pub model: String,
    /// Token usage when the provider reports it.
    pub usage: Option<TokenUsage>,
}

/// Token usage as reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Model provider errors.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Rate limited by the provider (HTTP 429).
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// API key missing or rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The provider rejected the request as malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider-side failure (5xx).
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Network failure reaching the provider.
    #[error("network error: {0}")]
    Network(String),

    /// The provider's response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl ModelError {
    /// True for rate-limit errors, which the orchestrator degrades into a
    /// friendly in-band message instead of a hard failure.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ModelError::RateLimited { .. })
    }
}
