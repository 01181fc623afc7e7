mod helpers;

use helpers::{open_catalog, sample_missions, MemoryStorage};
use missioneer::error::Error;

#[test]
fn empty_catalog_search_is_an_error() {
    let catalog = open_catalog(MemoryStorage::new());
    let err = catalog.search("anything", 3).unwrap_err();
    assert!(matches!(err, Error::NoRecordsAvailable));
}

#[test]
fn exact_text_query_ranks_that_mission_first() {
    let missions = sample_missions();
    let catalog = open_catalog(MemoryStorage::with_missions(missions.clone()));

    // Querying with mission 1's exact embedding text must put it on top
    // with cosine similarity 1.0.
    let results = catalog.search(&missions[1].embedding_text(), 3).unwrap();
    assert_eq!(results[0].id, 1);
    assert_eq!(results[0].mission.title, "Escort the Merchant");
    assert!((results[0].score - 1.0).abs() < 1e-5);
}

#[test]
fn every_vector_corresponds_to_its_mission() {
    let missions = sample_missions();
    let catalog = open_catalog(MemoryStorage::with_missions(missions.clone()));

    // Each mission's own embedding text must rank that mission first with
    // unit score — vector i really is the embedding of record i.
    for (i, mission) in missions.iter().enumerate() {
        let results = catalog.search(&mission.embedding_text(), 1).unwrap();
        assert_eq!(results[0].id, i);
        assert!((results[0].score - 1.0).abs() < 1e-5);
    }
}

#[test]
fn scores_come_back_in_descending_order() {
    let missions = sample_missions();
    let catalog = open_catalog(MemoryStorage::with_missions(missions.clone()));

    let results = catalog.search(&missions[0].embedding_text(), 3).unwrap();
    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "scores must be non-increasing: {} then {}",
            pair[0].score,
            pair[1].score
        );
    }
}

#[test]
fn search_respects_top_k() {
    let catalog = open_catalog(MemoryStorage::with_missions(sample_missions()));
    assert_eq!(catalog.search("tunnels", 2).unwrap().len(), 2);
    // k larger than the catalog is capped, not an error
    assert_eq!(catalog.search("tunnels", 50).unwrap().len(), 3);
}

#[test]
fn results_carry_the_backing_records() {
    let missions = sample_missions();
    let catalog = open_catalog(MemoryStorage::with_missions(missions.clone()));

    let results = catalog.search("flooded tunnels under the keep", 3).unwrap();
    for result in &results {
        assert_eq!(result.mission, missions[result.id]);
    }
}
