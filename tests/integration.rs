//! Integration tests for the catalog search engine.
//!
//! These exercise the public API end to end: the built-in corpus, the
//! acceptance corpus from the original demo, and the serialized result shape
//! the hosting UI consumes.

mod common;

use common::{acceptance_corpus, assert_ranked, CORPUS};
use labdex::{
    build_corpus, search, QueryResult, ValidatedCorpus, FACET_ALL, PAGE_SIZE, TOPICS,
};

// ============================================================================
// ACCEPTANCE SCENARIO (5 curated + 1800 filler)
// ============================================================================

#[test]
fn acceptance_empty_query_puts_curated_first() {
    let corpus = acceptance_corpus();
    let result = search(&corpus, "", FACET_ALL);

    assert_eq!(result.total, 1805);
    assert_eq!(result.items.len(), PAGE_SIZE);

    // All five curated entries lead, in base-rank-descending order, even
    // though filler base ranks reach 11. Score semantics, not raw base rank,
    // decide the page.
    let lead: Vec<u32> = result.items[..5].iter().map(|s| s.entry.id).collect();
    assert_eq!(lead, vec![1, 2, 3, 4, 5]);
    for scored in &result.items[..5] {
        assert!(scored.entry.is_curated());
    }
    assert!(!result.items[5].entry.is_curated());
    assert_ranked(&result.items);
}

#[test]
fn acceptance_facet_page_stays_inside_facet() {
    let corpus = acceptance_corpus();
    for facet in ["state", "rendering", "effects", "routing", "performance"] {
        let result = search(&corpus, "", facet);
        assert_eq!(result.total, 361); // 1 curated + 360 fillers per facet
        for scored in &result.items {
            assert_eq!(scored.entry.facet, facet);
        }
    }
}

// ============================================================================
// BUILT-IN CORPUS, END TO END
// ============================================================================

#[test]
fn built_corpus_validates_and_searches() {
    let validated = ValidatedCorpus::new(build_corpus()).expect("builder output is well formed");
    let result = search(&validated, "defer", FACET_ALL);
    assert!(result.total > 0);
    assert_ranked(&result.items);
}

#[test]
fn every_topic_has_a_canonical_entry_reachable_by_name() {
    // Searching a topic id finds at least its curated entry within the facet.
    for topic in TOPICS {
        let result = search(&CORPUS, topic.id, topic.id);
        assert!(
            result.items.iter().any(|s| s.entry.is_curated()),
            "no curated hit for topic {}",
            topic.id
        );
    }
}

#[test]
fn results_survive_corpus_drop() {
    let corpus = build_corpus();
    let result = search(&corpus, "lab", FACET_ALL);
    drop(corpus);
    // Items are copies-with-score, not references into the corpus.
    assert!(!result.items.is_empty());
    assert!(result.items[0].entry.title.starts_with("Lab"));
}

#[test]
fn repeated_calls_share_no_state() {
    // A no-match scan between two identical queries must not perturb them.
    let first = search(&CORPUS, "debounce", FACET_ALL);
    let _ = search(&CORPUS, "zzzqqqnomatch", FACET_ALL);
    let second = search(&CORPUS, "debounce", FACET_ALL);

    assert_eq!(first.total, second.total);
    let first_ids: Vec<u32> = first.items.iter().map(|s| s.entry.id).collect();
    let second_ids: Vec<u32> = second.items.iter().map(|s| s.entry.id).collect();
    assert_eq!(first_ids, second_ids);
}

// ============================================================================
// SERIALIZED RESULT SHAPE
// ============================================================================

#[test]
fn result_json_matches_consumer_contract() {
    let result = search(&CORPUS, "defer", "performance");
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert!(json["elapsedTimeMs"].as_f64().unwrap() >= 0.1);
    assert_eq!(json["total"].as_u64().unwrap() as usize, result.total);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), result.items.len());
    // Flattened entry fields and the score at the same level.
    assert!(items[0]["id"].is_u64());
    assert!(items[0]["score"].is_u64());
    assert!(items[0]["searchBlob"].is_string());
}

#[test]
fn result_json_round_trips() {
    let result = search(&CORPUS, "hydrate stream", FACET_ALL);
    let json = serde_json::to_string(&result).unwrap();
    let back: QueryResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.total, result.total);
    assert_eq!(back.items.len(), result.items.len());
    for (a, b) in back.items.iter().zip(&result.items) {
        assert_eq!(a.entry.id, b.entry.id);
        assert_eq!(a.score, b.score);
    }
}
