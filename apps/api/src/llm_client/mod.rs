/// Completion Client — the single point of entry for all LLM calls in Compass.
///
/// ARCHITECTURAL RULE: No other module may call the OpenRouter API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: mistralai/mistral-7b-instruct (hardcoded — do not make configurable
/// to prevent drift). Temperature and token budget are fixed constants, not
/// derived from input.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// The model used for all LLM calls in Compass.
pub const MODEL: &str = "mistralai/mistral-7b-instruct";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 4000;
const APP_TITLE: &str = "Compass Career API";
/// Transport-level ceiling on a single completion round-trip.
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("completion returned no content")]
    EmptyContent,
}

/// A composed prompt ready to send: one system message and one user message.
/// Built by the Prompt Builder; the client owns the rest of the wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
}

/// Seam for the outbound completion call. The production implementation is
/// [`OpenRouterClient`]; tests substitute recording doubles.
///
/// One attempt per call — retry policy, if any, belongs to the caller.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn send(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// The OpenRouter chat-completions client used in production.
///
/// The API key is sent only as the bearer header; it is never logged and
/// never embedded in error values.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    referer: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, referer: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            referer,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn send(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(OPENROUTER_API_URL)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            // Prefer the provider's {error:{message}} envelope when present
            let message = serde_json::from_str::<ProviderError>(&body_text)
                .map(|e| e.error.message)
                .unwrap_or(body_text);
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ChatResponse = response.json().await?;

        if let Some(usage) = &envelope.usage {
            debug!(
                "Completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        envelope
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)
    }
}
