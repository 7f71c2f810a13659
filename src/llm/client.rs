use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Provider response contained no choices")]
    EmptyResponse,

    #[error("Malformed model response: {0}")]
    Malformed(String),
}

/// Seam over the generative-text provider so handlers can be exercised
/// against a scripted model in tests.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a single user-role prompt and return the first choice's text.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Chat-completions client for an OpenAI-compatible API.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build a client from OPENAI_API_KEY, honoring OPENAI_BASE_URL if set.
    pub fn from_env() -> Result<Self, env::VarError> {
        let api_key = env::var("OPENAI_API_KEY")?;

        let mut client = Self::new(api_key);
        if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
            client.base_url = base_url.trim_end_matches('/').to_string();
        }
        Ok(client)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl ModelClient for OpenAiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = model, prompt_len = prompt.len()))]
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        debug!("Sending chat completion request");

        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        info!(response_len = content.len(), "Received chat completion");
        Ok(content)
    }
}
