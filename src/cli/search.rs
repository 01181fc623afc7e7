use anyhow::Result;

use crate::config::MissioneerConfig;

/// Run a semantic search from the terminal.
pub fn search(config: &MissioneerConfig, query: &str, top_k: Option<usize>) -> Result<()> {
    let catalog = super::open_catalog(config)?;
    let k = top_k.unwrap_or(config.retrieval.default_top_k);

    let results = catalog.search(query, k)?;
    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!("Found {} result(s)\n", results.len());
    for (i, result) in results.iter().enumerate() {
        println!(
            "  {}. [{}] {} (score: {:.4})",
            i + 1,
            result.id,
            result.mission.title,
            result.score,
        );
        println!("     {}", result.mission.description);
        println!();
    }

    Ok(())
}
