//! Prompt-to-text generation pipeline.
//!
//! Provides the [`Generator`] trait and an Ollama-backed implementation
//! speaking the OpenAI-compatible chat completions API. Created via
//! [`create_generator`] from configuration.

pub mod ollama;

use crate::config::GenerationConfig;
use crate::error::Result;

/// Trait for generating text from a prompt.
///
/// Implementations may block on network latency. An empty or malformed
/// upstream response is a [`GenerationFailure`], never an empty string.
///
/// [`GenerationFailure`]: crate::error::Error::GenerationFailure
pub trait Generator: Send + Sync {
    /// Generate text for a single prompt.
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Create a generator from config. `timeout` bounds each HTTP call to
/// the upstream model.
///
/// Currently only `"ollama"` is supported.
pub fn create_generator(
    config: &GenerationConfig,
    timeout: std::time::Duration,
) -> anyhow::Result<Box<dyn Generator>> {
    match config.provider.as_str() {
        "ollama" => Ok(Box::new(ollama::OllamaGenerator::new(config, timeout)?)),
        other => anyhow::bail!("unknown generation provider: {other}. Supported: ollama"),
    }
}
