#![forbid(unsafe_code)]

//! Diagram-generation oracle.
//!
//! The service treats the hosted model as a black box: given a system prompt
//! and a user message it returns text (a diagram, or a refusal sentinel the
//! caller checks for). [`DiagramOracle`] is that seam; [`GeminiClient`] is the
//! production implementation, and tests substitute their own.

mod error;
mod gemini;

pub use error::{Error, Result};
pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};

use async_trait::async_trait;

/// Rough token estimate (~4 chars per token for the Gemini family), used when
/// the remote count is unavailable.
pub fn estimate_tokens(text: &str) -> u64 {
    (text.len() / 4) as u64
}

#[async_trait]
pub trait DiagramOracle: Send + Sync {
    /// Runs one generation call and returns the raw model text. The text may
    /// still carry markdown fences or the refusal sentinel; post-processing is
    /// the caller's job.
    async fn generate(&self, system_prompt: &str, user_message: &str) -> Result<String>;

    /// Counts (or estimates) the prompt tokens `text` would consume.
    async fn count_tokens(&self, text: &str) -> u64 {
        estimate_tokens(text)
    }
}
