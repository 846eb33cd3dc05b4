//! # tempo-llm
//!
//! Text classifier gateway for Tempo.
//!
//! Sends a prompt to any OpenAI-compatible `/chat/completions` endpoint with
//! low-temperature, short-answer generation and returns the sanitized answer.
//! Alternate providers (DeepSeek, local gateways, ...) are reached by
//! changing `base_url` and `model` in [`LlmConfig`].

mod error;
mod sanitize;

pub use error::LlmError;
pub use sanitize::sanitize_response;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tempo_config::LlmConfig;

/// Prompt used by [`ChatClient::test_connection`].
const CONNECTION_TEST_PROMPT: &str = "Hello, this is a connection test. Please respond with 'OK'.";

/// Connection tests get a shorter ceiling than classification calls.
const CONNECTION_TEST_TIMEOUT: Duration = Duration::from_secs(15);

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Trimmed content of the first choice, if any.
    fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Chat-completion client used as the text classifier.
pub struct ChatClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    system_prompt: String,
}

impl ChatClient {
    /// Create a client whose every request carries `config.timeout_secs` as ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tempo/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::info!(model = %config.model, base_url = %config.base_url, "classifier client initialized");

        Ok(Self {
            http,
            url: config.completions_url(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            system_prompt: config.system_prompt.clone(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the model to classify `prompt` and return its cleaned answer.
    ///
    /// Every failure (timeout, transport, non-success status, missing or
    /// empty content) is logged and collapses to `None`.
    pub async fn classify(&self, prompt: &str) -> Option<String> {
        tracing::info!(model = %self.model, "sending classification request");

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: Some(1.0),
            frequency_penalty: Some(0.0),
            presence_penalty: Some(0.0),
        };

        match self.complete(&request, None).await {
            Ok(Some(raw)) => {
                tracing::info!(raw = %raw, "model raw response");
                let cleaned = sanitize_response(&raw);
                if cleaned.is_empty() {
                    tracing::warn!("model response was empty after cleanup");
                    None
                } else {
                    tracing::info!(result = %cleaned, "model classification result");
                    Some(cleaned)
                }
            }
            Ok(None) => {
                tracing::warn!("model returned empty response");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "classification request failed");
                None
            }
        }
    }

    /// Send a trivial prompt to verify the key, model, and endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] on timeout, transport, or status failure, and
    /// [`LlmError::Parse`] when the endpoint answers without content.
    pub async fn test_connection(&self) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: CONNECTION_TEST_PROMPT,
            }],
            max_tokens: 10,
            temperature: 0.0,
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
        };

        let raw = self
            .complete(&request, Some(CONNECTION_TEST_TIMEOUT))
            .await?
            .ok_or_else(|| LlmError::Parse("empty response".to_string()))?;
        let reply = sanitize_response(&raw);
        tracing::info!(%reply, "classifier connection test successful");
        Ok(reply)
    }

    async fn complete(
        &self,
        request: &ChatRequest<'_>,
        timeout: Option<Duration>,
    ) -> Result<Option<String>, LlmError> {
        let mut builder = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await.map_err(LlmError::from_transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let body: ChatResponse = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout
            } else {
                LlmError::Parse(e.to_string())
            }
        })?;
        Ok(body.first_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_serializes_generation_bounds() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            max_tokens: 50,
            temperature: 0.5,
            top_p: Some(1.0),
            frequency_penalty: None,
            presence_penalty: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 50);
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["top_p"], 1.0);
        assert!(json.get("frequency_penalty").is_none());
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn first_content_takes_first_choice() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Work \n"}},{"message":{"content":"Rest"}}]}"#,
        )
        .unwrap();
        assert_eq!(body.first_content().as_deref(), Some("Work"));
    }

    #[test]
    fn missing_or_blank_content_is_none() {
        for raw in [
            r#"{"choices":[]}"#,
            r#"{}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
            r#"{"choices":[{"message":{"content":"   "}}]}"#,
        ] {
            let body: ChatResponse = serde_json::from_str(raw).unwrap();
            assert!(body.first_content().is_none(), "{raw}");
        }
    }

    #[test]
    fn client_uses_completions_url() {
        let client = ChatClient::new(&LlmConfig {
            base_url: "http://localhost:11434/v1/".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.url, "http://localhost:11434/v1/chat/completions");
        assert_eq!(client.model(), "gpt-4o-mini");
    }
}
