//! Semantic mission log — embedding-backed search and retrieval-augmented
//! mission generation.
//!
//! Missioneer keeps a small collection of free-text mission records
//! (`title` + `description`) in a JSON file and supports retrieval by
//! *meaning*: every record is embedded into a fixed-length vector and
//! indexed in an in-memory exact inner-product index, so queries rank
//! records by cosine similarity rather than keyword overlap. New missions
//! can also be generated: the query's nearest neighbors are retrieved and
//! fed as context to a local LLM, and the result is durably appended.
//!
//! # Architecture
//!
//! - **Storage**: a single JSON file, rewritten whole on every mutation
//!   with a temp-file + rename so a crash never corrupts it
//! - **Index**: brute-force inner-product search over L2-normalized
//!   vectors — exact cosine ranking, rebuilt from storage at startup
//! - **Embeddings / generation**: Ollama (`nomic-embed-text` and
//!   `llama3.2` by default), behind traits so tests run with stubs
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`error`] — The crate-wide error taxonomy
//! - [`index`] — Exact inner-product vector index over unit vectors
//! - [`embedding`] — Text-to-vector provider trait and Ollama implementation
//! - [`generation`] — Prompt-to-text generator trait and Ollama implementation
//! - [`mission`] — Core engine: records, storage, catalog, and generation pipeline

pub mod config;
pub mod embedding;
pub mod error;
pub mod generation;
pub mod index;
pub mod mission;
