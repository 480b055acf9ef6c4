//! `POST /modify`: apply natural-language edit instructions to a diagram.

use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use merrow_core::{
    SYSTEM_MODIFY_PROMPT, clean_invalid_class_statements, is_refusal, modify_user_message,
    strip_code_fences,
};
use serde::{Deserialize, Serialize};
use tracing::info;

const MAX_INSTRUCTIONS_LEN: usize = 1000;
const MAX_DIAGRAM_LEN: usize = 100_000;
const MAX_PROMPT_TOKENS: u64 = 50_000;

/// Bundled demo repos ship with curated diagrams; edits to them would be lost
/// on the next deploy.
const EXAMPLE_REPOS: [&str; 5] = [
    "fastapi",
    "streamlit",
    "flask",
    "api-analytics",
    "monkeytype",
];

#[derive(Debug, Deserialize)]
pub struct ModifyRequest {
    pub instructions: String,
    pub current_diagram: String,
    pub repo: String,
    pub username: String,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct ModifyResponse {
    pub diagram: String,
}

fn validate(req: &ModifyRequest) -> Result<(), ApiError> {
    if req.instructions.is_empty() || req.current_diagram.is_empty() {
        return Err(ApiError::Validation(
            "Instructions and/or current diagram are required".to_string(),
        ));
    }
    if req.instructions.len() > MAX_INSTRUCTIONS_LEN {
        return Err(ApiError::Validation(format!(
            "Instructions exceed maximum length of {MAX_INSTRUCTIONS_LEN} characters"
        )));
    }
    if req.current_diagram.len() > MAX_DIAGRAM_LEN {
        return Err(ApiError::Validation(format!(
            "Diagram exceeds maximum length of {MAX_DIAGRAM_LEN} characters"
        )));
    }
    if EXAMPLE_REPOS.contains(&req.repo.as_str()) {
        return Err(ApiError::Validation(
            "Example repos cannot be modified".to_string(),
        ));
    }
    Ok(())
}

pub async fn modify(
    State(state): State<AppState>,
    Json(req): Json<ModifyRequest>,
) -> Result<Json<ModifyResponse>, ApiError> {
    validate(&req)?;

    let user_message =
        modify_user_message(&req.instructions, &req.explanation, &req.current_diagram);
    let prompt_tokens = state.oracle.count_tokens(&user_message).await;
    if prompt_tokens > MAX_PROMPT_TOKENS {
        return Err(ApiError::Validation(format!(
            "Diagram and instructions exceed the prompt limit of {MAX_PROMPT_TOKENS} tokens"
        )));
    }

    info!(repo = %req.repo, username = %req.username, prompt_tokens, "modifying diagram");
    let raw = state
        .oracle
        .generate(SYSTEM_MODIFY_PROMPT, &user_message)
        .await?;
    if is_refusal(&raw) {
        return Err(ApiError::BadInstructions);
    }

    let diagram = clean_invalid_class_statements(&strip_code_fences(&raw));
    Ok(Json(ModifyResponse { diagram }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use selkie::DiagramOracle;
    use std::sync::Arc;

    enum MockReply {
        Text(&'static str),
        Overloaded,
    }

    struct MockOracle {
        reply: MockReply,
        tokens: Option<u64>,
    }

    #[async_trait]
    impl DiagramOracle for MockOracle {
        async fn generate(&self, _system_prompt: &str, _user_message: &str) -> selkie::Result<String> {
            match self.reply {
                MockReply::Text(text) => Ok(text.to_string()),
                MockReply::Overloaded => Err(selkie::Error::Overloaded),
            }
        }

        async fn count_tokens(&self, text: &str) -> u64 {
            match self.tokens {
                Some(n) => n,
                None => selkie::estimate_tokens(text),
            }
        }
    }

    fn state_with(reply: MockReply, tokens: Option<u64>) -> State<AppState> {
        State(AppState {
            oracle: Arc::new(MockOracle { reply, tokens }),
        })
    }

    fn request() -> ModifyRequest {
        ModifyRequest {
            instructions: "color node A".to_string(),
            current_diagram: "graph TD\nA-->B".to_string(),
            repo: "some/repo".to_string(),
            username: "tester".to_string(),
            explanation: "A calls B".to_string(),
        }
    }

    #[tokio::test]
    async fn fenced_output_is_stripped_and_sanitized() {
        let reply = MockReply::Text(
            "```mermaid\ngraph TD\nsubgraph API\nA-->B\nend\nclass API,A fill:#f9f\nclass A fill:#bbf\n```",
        );
        let Json(resp) = modify(state_with(reply, None), Json(request())).await.unwrap();
        assert_eq!(
            resp.diagram,
            "graph TD\nsubgraph API\nA-->B\nend\nclass A fill:#bbf"
        );
    }

    #[tokio::test]
    async fn refusal_sentinel_becomes_bad_instructions() {
        let reply = MockReply::Text("BAD_INSTRUCTIONS");
        let err = modify(state_with(reply, None), Json(request()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadInstructions));
    }

    #[tokio::test]
    async fn overloaded_oracle_is_reported_as_such() {
        let err = modify(state_with(MockReply::Overloaded, None), Json(request()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Overloaded));
    }

    #[tokio::test]
    async fn empty_fields_are_rejected() {
        let mut req = request();
        req.instructions = String::new();
        let err = modify(state_with(MockReply::Text("x"), None), Json(req))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(msg) if msg.contains("required")));
    }

    #[tokio::test]
    async fn oversized_instructions_are_rejected() {
        let mut req = request();
        req.instructions = "x".repeat(MAX_INSTRUCTIONS_LEN + 1);
        let err = modify(state_with(MockReply::Text("x"), None), Json(req))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(msg) if msg.contains("maximum length")));
    }

    #[tokio::test]
    async fn example_repos_cannot_be_modified() {
        let mut req = request();
        req.repo = "fastapi".to_string();
        let err = modify(state_with(MockReply::Text("x"), None), Json(req))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(msg) if msg.contains("Example repos")));
    }

    #[tokio::test]
    async fn prompt_over_the_token_limit_is_rejected() {
        let err = modify(
            state_with(MockReply::Text("x"), Some(MAX_PROMPT_TOKENS + 1)),
            Json(request()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(msg) if msg.contains("token")));
    }
}
