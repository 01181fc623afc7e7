//! The mission catalog — single choke point for every read and write
//! over the {mission store, vector index} pair.
//!
//! [`MissionCatalog`] owns the ordered mission sequence, the vector
//! index, and the embedder/generator/storage collaborators. It enforces
//! the positional-correspondence invariant: at every quiescent point
//! `index.len() == missions.len()`, and vector `i` is the normalized
//! embedding of mission `i`'s embedding text. Nothing else may insert
//! into either structure.
//!
//! Mutations take `&mut self` and reads take `&self`, so a catalog
//! shared behind an `RwLock` gets exactly the required discipline:
//! serialized writers, concurrent readers, and no reader ever observes
//! a half-applied mutation.

use serde::Serialize;
use tracing::{info, warn};

use crate::embedding::Embedder;
use crate::error::{Error, Result};
use crate::generation::Generator;
use crate::index::VectorIndex;
use crate::mission::storage::MissionStorage;
use crate::mission::types::Mission;

/// A search hit: the mission, its positional id, and its cosine score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMission {
    pub id: usize,
    pub score: f32,
    pub mission: Mission,
}

pub struct MissionCatalog {
    pub(crate) missions: Vec<Mission>,
    pub(crate) index: VectorIndex,
    pub(crate) embedder: Box<dyn Embedder>,
    pub(crate) generator: Box<dyn Generator>,
    pub(crate) storage: Box<dyn MissionStorage>,
}

impl MissionCatalog {
    /// Load the mission sequence from storage and rebuild the vector
    /// index from it. Run once at startup.
    pub fn open(
        storage: Box<dyn MissionStorage>,
        embedder: Box<dyn Embedder>,
        generator: Box<dyn Generator>,
    ) -> Result<Self> {
        let missions = storage.load()?;
        let index = VectorIndex::new(embedder.dimensions());
        let mut catalog = Self {
            missions,
            index,
            embedder,
            generator,
            storage,
        };
        catalog.rebuild()?;
        info!(count = catalog.missions.len(), "mission catalog ready");
        Ok(catalog)
    }

    /// Clear the index and re-embed every mission in order. The index
    /// never persists across restarts; this is how it comes back.
    pub fn rebuild(&mut self) -> Result<()> {
        self.index.clear();
        for mission in &self.missions {
            let embedding = self.embedder.embed(&mission.embedding_text())?;
            self.index.add(&embedding)?;
        }
        Ok(())
    }

    /// Validate, embed, persist, and index a new mission. Returns its
    /// positional id.
    ///
    /// The embedding is computed *before* anything is mutated — it is
    /// the only fallible external call, and running it first keeps the
    /// operation all-or-nothing. If persistence fails, the in-memory
    /// append is rolled back and the index is never touched.
    pub fn add_mission(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<usize> {
        let mission = Mission::new(title, description);

        if mission.title.trim().is_empty() {
            return Err(Error::InvalidTitle);
        }
        let lowered = mission.title.to_lowercase();
        if self.missions.iter().any(|m| m.title.to_lowercase() == lowered) {
            return Err(Error::DuplicateTitle(mission.title));
        }

        let embedding = self.embedder.embed(&mission.embedding_text())?;
        if embedding.len() != self.index.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.index.dimensions(),
                actual: embedding.len(),
            });
        }

        let id = self.missions.len();
        self.missions.push(mission);
        if let Err(e) = self.storage.save(&self.missions) {
            self.missions.pop();
            return Err(e);
        }

        // Dimension was checked above, so this cannot fail.
        self.index.add(&embedding)?;

        info!(id, title = %self.missions[id].title, "mission appended");
        Ok(id)
    }

    /// Semantic search: embed `text`, rank every mission by cosine
    /// similarity, return the top `k`.
    ///
    /// Searching an empty catalog is an explicit-lookup failure
    /// ([`Error::NoRecordsAvailable`]) — distinct from the generation
    /// path, which treats an empty catalog as empty context.
    pub fn search(&self, text: &str, k: usize) -> Result<Vec<ScoredMission>> {
        if self.missions.is_empty() {
            return Err(Error::NoRecordsAvailable);
        }
        self.neighbors(text, k)
    }

    /// Shared retrieval path for [`search`](Self::search) and the
    /// generation pipeline: no empty-store check, ids without a backing
    /// mission are dropped rather than failing the whole lookup.
    pub(crate) fn neighbors(&self, text: &str, k: usize) -> Result<Vec<ScoredMission>> {
        let query = self.embedder.embed(text)?;
        let hits = self.index.search(&query, k)?;

        let mut results = Vec::with_capacity(hits.len());
        for (id, score) in hits {
            match self.missions.get(id) {
                Some(mission) => results.push(ScoredMission {
                    id,
                    score,
                    mission: mission.clone(),
                }),
                None => warn!(id, "index returned id with no backing mission; dropped"),
            }
        }
        Ok(results)
    }

    /// All missions in insertion (= id) order. No side effects.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Number of vectors currently indexed. Equal to [`len`](Self::len)
    /// whenever no mutation is in flight.
    #[allow(dead_code)] // exercised by the integration tests
    pub fn index_len(&self) -> usize {
        self.index.len()
    }
}
