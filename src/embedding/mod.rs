//! Text-to-vector embedding pipeline.
//!
//! Provides the [`Embedder`] trait and an Ollama-backed implementation.
//! The provider is created via [`create_provider`] from configuration.
//! Vectors are raw model output; normalization happens at the index
//! boundary, not here.

pub mod ollama;

use crate::config::EmbeddingConfig;
use crate::error::Result;

/// Trait for embedding text into fixed-length vectors.
///
/// Implementations must return vectors of exactly [`dimensions`] length
/// and should be deterministic enough for reproducible ranking (same
/// text → same vector within a session). All methods are synchronous and
/// may block on network latency.
///
/// [`dimensions`]: Embedder::dimensions
pub trait Embedder: Send + Sync {
    /// Embed a single text string into a vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Number of dimensions this provider produces.
    fn dimensions(&self) -> usize;
}

/// Create an embedding provider from config. `timeout` bounds each HTTP
/// call to the upstream model.
///
/// Currently only `"ollama"` is supported.
pub fn create_provider(
    config: &EmbeddingConfig,
    timeout: std::time::Duration,
) -> anyhow::Result<Box<dyn Embedder>> {
    match config.provider.as_str() {
        "ollama" => Ok(Box::new(ollama::OllamaEmbedder::new(config, timeout)?)),
        other => anyhow::bail!("unknown embedding provider: {other}. Supported: ollama"),
    }
}
