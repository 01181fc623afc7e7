use anyhow::Result;

use crate::config::MissioneerConfig;

/// Generate a new mission from the terminal and append it.
pub fn generate(config: &MissioneerConfig, query: &str) -> Result<()> {
    let mut catalog = super::open_catalog(config)?;

    let generated = catalog.generate_mission(query, config.retrieval.context_k)?;
    println!(
        "Mission generated with id {}: {}",
        generated.id, generated.mission.title
    );
    println!();
    println!("{}", generated.mission.description);
    Ok(())
}
