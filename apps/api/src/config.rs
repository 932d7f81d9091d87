use anyhow::{Context, Result};

const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_LLM_MAX_TOKENS: u32 = 300;

/// Application configuration loaded from environment variables.
/// Every variable is optional. No LLM credential is configured here:
/// callers supply their own key with each delegated analysis.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_max_tokens: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            llm_api_url: lookup("LLM_API_URL").unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
            llm_model: lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            llm_max_tokens: match lookup("LLM_MAX_TOKENS") {
                Some(raw) => raw
                    .parse::<u32>()
                    .with_context(|| format!("LLM_MAX_TOKENS must be a positive integer, got '{raw}'"))?,
                None => DEFAULT_LLM_MAX_TOKENS,
            },
        })
    }
}
