//! Ollama text generator.
//!
//! Calls the OpenAI-compatible chat completions endpoint
//! (`POST /v1/chat/completions`) with a single user message. Transport
//! failures, non-success statuses, a missing first choice, and
//! empty/whitespace-only content all surface as
//! [`Error::GenerationFailure`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Generator;
use crate::config::GenerationConfig;
use crate::error::{Error, Result};

pub struct OllamaGenerator {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
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
    content: String,
}

impl OllamaGenerator {
    pub fn new(config: &GenerationConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }
}

impl Generator for OllamaGenerator {
    fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.endpoint);
        let response = self
            .client
            .post(&url)
            .json(&ChatRequest {
                model: &self.model,
                messages: vec![ChatMessage {
                    role: "user",
                    content: prompt,
                }],
            })
            .send()
            .map_err(|e| Error::GenerationFailure(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::GenerationFailure(format!(
                "generation endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body: ChatResponse = response
            .json()
            .map_err(|e| Error::GenerationFailure(format!("malformed chat response: {e}")))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::GenerationFailure("chat response had no choices".into()))?;

        if content.trim().is_empty() {
            return Err(Error::GenerationFailure("model returned empty text".into()));
        }

        tracing::debug!(model = %self.model, chars = content.len(), "generated text");
        Ok(content)
    }
}
