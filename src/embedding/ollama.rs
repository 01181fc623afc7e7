//! Ollama embedding provider.
//!
//! Calls the Ollama embeddings endpoint (`POST /api/embeddings`) over
//! blocking HTTP. Any transport, status, or parse failure surfaces as
//! [`Error::EmbeddingFailure`]; a vector of the wrong length is a
//! configuration problem and surfaces as [`Error::DimensionMismatch`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Embedder;
use crate::config::EmbeddingConfig;
use crate::error::{Error, Result};

pub struct OllamaEmbedder {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    embedding: Vec<f32>,
}

impl OllamaEmbedder {
    pub fn new(config: &EmbeddingConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            dimensions: config.dimensions,
        })
    }
}

impl Embedder for OllamaEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/api/embeddings", self.endpoint);
        let response = self
            .client
            .post(&url)
            .json(&EmbeddingsRequest {
                model: &self.model,
                prompt: text,
            })
            .send()
            .map_err(|e| Error::EmbeddingFailure(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::EmbeddingFailure(format!(
                "embedding endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body: EmbeddingsResponse = response
            .json()
            .map_err(|e| Error::EmbeddingFailure(format!("malformed embedding response: {e}")))?;

        if body.embedding.len() != self.dimensions {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions,
                actual: body.embedding.len(),
            });
        }

        tracing::debug!(model = %self.model, len = text.len(), "embedded text");
        Ok(body.embedding)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
