use anyhow::Result;

use crate::config::MissioneerConfig;

/// Print every mission in id order.
pub fn list(config: &MissioneerConfig) -> Result<()> {
    let catalog = super::open_catalog(config)?;

    if catalog.is_empty() {
        println!("No missions yet.");
        return Ok(());
    }

    for (id, mission) in catalog.missions().iter().enumerate() {
        println!("  {}. {}", id, mission.title);
        println!("     {}", mission.description);
        println!();
    }

    Ok(())
}
