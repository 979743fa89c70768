//! Model gateway adapters.

mod gemini;
mod mock;

pub use gemini::{GeminiConfig, GeminiGateway};
pub use mock::MockModelGateway;
