//! Crate-wide error taxonomy.
//!
//! Every core operation is all-or-nothing: any failure after validation
//! leaves the mission store and the vector index exactly as they were
//! before the call. No variant is retried internally; all surface to the
//! caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A vector's length does not match the index dimension. This is a
    /// configuration or programming error, not a runtime condition.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A mission with the same title (case-insensitive) already exists.
    /// Recoverable — the caller can pick a different title.
    #[error("a mission titled \"{0}\" already exists")]
    DuplicateTitle(String),

    /// Mission titles must contain at least one non-whitespace character.
    #[error("mission title must not be empty")]
    InvalidTitle,

    /// The embedding service failed — transient upstream error, nothing
    /// was mutated.
    #[error("embedding request failed: {0}")]
    EmbeddingFailure(String),

    /// The generation service failed or returned an empty/malformed
    /// response — transient upstream error, nothing was mutated.
    #[error("generation request failed: {0}")]
    GenerationFailure(String),

    /// A pure-lookup search was issued against an empty store. Distinct
    /// from the generation path, where an empty store just means empty
    /// context.
    #[error("no missions available to search")]
    NoRecordsAvailable,

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
