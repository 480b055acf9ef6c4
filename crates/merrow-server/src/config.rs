use std::env;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
}

#[derive(Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub api_key: String,
    pub model: String,
}

impl ServerConfig {
    /// Reads configuration from the environment (after `.env` has been
    /// loaded). Only the API key is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let bind_addr =
            env::var("MERROW_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let model = env::var("MERROW_MODEL").unwrap_or_else(|_| selkie::DEFAULT_MODEL.to_string());

        Ok(Self {
            bind_addr,
            api_key,
            model,
        })
    }
}
