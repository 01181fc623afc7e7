//! Terminal commands over the mission catalog.

mod add;
mod generate;
mod list;
mod search;

pub use add::add;
pub use generate::generate;
pub use list::list;
pub use search::search;

use std::time::Duration;

use anyhow::Result;

use crate::config::MissioneerConfig;
use crate::mission::{storage::JsonFileStorage, MissionCatalog};

/// Open the catalog with the configured storage and providers.
pub fn open_catalog(config: &MissioneerConfig) -> Result<MissionCatalog> {
    let data_path = config.resolved_data_path();
    let storage = JsonFileStorage::new(&data_path);
    tracing::info!(data = %data_path.display(), "storage ready");

    let timeout = Duration::from_secs(config.retrieval.timeout_secs);
    let embedder = crate::embedding::create_provider(&config.embedding, timeout)?;
    let generator = crate::generation::create_generator(&config.generation, timeout)?;

    let catalog = MissionCatalog::open(Box::new(storage), embedder, generator)?;
    Ok(catalog)
}
