use anyhow::Result;

use crate::config::MissioneerConfig;

/// Add a mission from the terminal.
pub fn add(config: &MissioneerConfig, title: &str, description: &str) -> Result<()> {
    let mut catalog = super::open_catalog(config)?;
    let id = catalog.add_mission(title, description)?;
    println!("Mission added with id {id}: {title}");
    Ok(())
}
