#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use missioneer::embedding::Embedder;
use missioneer::error::{Error, Result};
use missioneer::generation::Generator;
use missioneer::mission::storage::MissionStorage;
use missioneer::mission::{Mission, MissionCatalog};

/// Small dimension so test vectors stay readable.
pub const TEST_DIM: usize = 16;

/// Deterministic text → vector stub: bytes hashed into buckets. The same
/// text always maps to the same vector, so a query equal to a record's
/// embedding text scores 1.0 against it. Empty text maps to the zero
/// vector.
pub struct StubEmbedder {
    dim: usize,
}

impl StubEmbedder {
    pub fn new() -> Self {
        Self { dim: TEST_DIM }
    }
}

impl Embedder for StubEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(stub_embedding(text, self.dim))
    }

    fn dimensions(&self) -> usize {
        self.dim
    }
}

/// The vector [`StubEmbedder`] produces for `text`.
pub fn stub_embedding(text: &str, dim: usize) -> Vec<f32> {
    let mut v = vec![0.0f32; dim];
    for (i, b) in text.bytes().enumerate() {
        v[(b as usize).wrapping_mul(31).wrapping_add(i) % dim] += 1.0;
    }
    v
}

/// Embedder that always fails, for atomicity tests.
pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(Error::EmbeddingFailure("injected embedding failure".into()))
    }

    fn dimensions(&self) -> usize {
        TEST_DIM
    }
}

/// Embedder that returns vectors of the wrong length.
pub struct WrongDimEmbedder;

impl Embedder for WrongDimEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(vec![1.0; TEST_DIM + 1])
    }

    fn dimensions(&self) -> usize {
        TEST_DIM
    }
}

/// Generator returning a fixed canned response. Records every prompt it
/// receives so tests can assert on context assembly.
#[derive(Clone)]
pub struct StubGenerator {
    response: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The most recent prompt passed to [`Generator::generate`].
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl Generator for StubGenerator {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// Generator that always fails, for atomicity tests.
pub struct FailingGenerator;

impl Generator for FailingGenerator {
    fn generate(&self, _prompt: &str) -> Result<String> {
        Err(Error::GenerationFailure("injected generation failure".into()))
    }
}

/// In-memory storage with an injectable save failure. Cloning shares the
/// underlying state, so a test can keep a handle while the catalog owns
/// another.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<MemoryStorageInner>,
}

#[derive(Default)]
struct MemoryStorageInner {
    missions: Mutex<Vec<Mission>>,
    fail_saves: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missions(missions: Vec<Mission>) -> Self {
        let storage = Self::default();
        *storage.inner.missions.lock().unwrap() = missions;
        storage
    }

    /// Make every subsequent save fail until called again with `false`.
    pub fn fail_saves(&self, fail: bool) {
        self.inner.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// What is currently persisted.
    pub fn saved(&self) -> Vec<Mission> {
        self.inner.missions.lock().unwrap().clone()
    }
}

impl MissionStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Mission>> {
        Ok(self.saved())
    }

    fn save(&self, missions: &[Mission]) -> Result<()> {
        if self.inner.fail_saves.load(Ordering::SeqCst) {
            return Err(Error::Io(std::io::Error::other("injected save failure")));
        }
        *self.inner.missions.lock().unwrap() = missions.to_vec();
        Ok(())
    }
}

/// Catalog over the given storage with the stub embedder and a canned
/// generator response.
pub fn open_catalog(storage: MemoryStorage) -> MissionCatalog {
    MissionCatalog::open(
        Box::new(storage),
        Box::new(StubEmbedder::new()),
        Box::new(StubGenerator::new("A generated mission description.")),
    )
    .unwrap()
}

pub fn sample_missions() -> Vec<Mission> {
    vec![
        Mission::new("Defend the Village", "Hold the gate until dawn."),
        Mission::new("Escort the Merchant", "See the caravan safely to port."),
        Mission::new("Chart the Caves", "Map the flooded tunnels below the keep."),
    ]
}
