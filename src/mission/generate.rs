//! Retrieval-augmented mission generation.
//!
//! A linear pipeline: embed the query, retrieve its nearest missions,
//! compose a prompt with the neighbors as context, generate a new
//! description, and durably append the result through the catalog's
//! write path. Every step before the append is side-effect free, so a
//! failed embedding or generation call leaves the catalog untouched.

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::mission::catalog::{MissionCatalog, ScoredMission};
use crate::mission::types::Mission;

/// Suffix appended to the query-derived title of a generated mission.
const TITLE_SUFFIX: &str = " Quest";

/// A freshly generated and appended mission.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedMission {
    pub id: usize,
    pub mission: Mission,
}

impl MissionCatalog {
    /// Generate a new mission related to `query`, conditioned on its
    /// `context_k` nearest existing missions, and append it.
    ///
    /// An empty catalog is not an error here — generation just proceeds
    /// with empty context. A duplicate derived title fails the whole
    /// operation with [`DuplicateTitle`]; no alternate title is tried.
    ///
    /// [`DuplicateTitle`]: crate::error::Error::DuplicateTitle
    pub fn generate_mission(&mut self, query: &str, context_k: usize) -> Result<GeneratedMission> {
        let neighbors = if self.is_empty() {
            Vec::new()
        } else {
            self.neighbors(query, context_k)?
        };

        let prompt = compose_prompt(&neighbors, query);
        let generated = self.generator.generate(&prompt)?;

        let title = derive_title(query);
        let id = self.add_mission(title, generated.trim())?;

        info!(id, context = neighbors.len(), "mission generated");
        Ok(GeneratedMission {
            id,
            mission: self.missions[id].clone(),
        })
    }
}

/// Deterministic prompt template. Context lines appear in retrieval rank
/// order; the exact wording is presentation, the ordering is contract.
fn compose_prompt(neighbors: &[ScoredMission], query: &str) -> String {
    let context = neighbors
        .iter()
        .map(|n| n.mission.embedding_text())
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Based on the following missions:\n{context}\n\n\
         Generate a new mission related to: {query}.\n\
         Provide a short title and a detailed description.\n"
    )
}

/// Title for a generated mission: the query with its first character
/// uppercased and the rest lowercased, plus a fixed suffix.
fn derive_title(query: &str) -> String {
    let mut chars = query.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    };
    format!("{capitalized}{TITLE_SUFFIX}")
}
