//! Core mission engine: records, durable storage, the catalog that keeps
//! the store and vector index in lockstep, and the retrieval-augmented
//! generation pipeline.

pub mod catalog;
pub mod generate;
pub mod storage;
pub mod types;

pub use catalog::{MissionCatalog, ScoredMission};
pub use generate::GeneratedMission;
pub use types::Mission;
