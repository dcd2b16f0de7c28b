//! Shared test utilities and fixtures.

#![allow(dead_code)]

use labdex::SearchEntry;
use std::sync::LazyLock;

// Re-export canonical test utilities from labdex::testing
pub use labdex::testing::{make_curated, make_filler};

/// The real built corpus, shared across test files.
pub static CORPUS: LazyLock<Vec<SearchEntry>> = LazyLock::new(labdex::build_corpus);

/// The concrete acceptance corpus: five curated entries with base ranks
/// 10 down to 6, plus 1800 generated fillers cycling ranks 1..=11.
pub fn acceptance_corpus() -> Vec<SearchEntry> {
    let facets = ["state", "rendering", "effects", "routing", "performance"];
    let mut corpus: Vec<SearchEntry> = facets
        .iter()
        .enumerate()
        .map(|(i, facet)| make_curated(i as u32 + 1, facet, 10 - i as u32))
        .collect();
    for i in 0..1800u32 {
        corpus.push(make_filler(
            i + 6,
            facets[i as usize % facets.len()],
            (i % 11) + 1,
        ));
    }
    corpus
}

/// Assert the documented total order on a result page: score descending,
/// then title length ascending, then id ascending.
pub fn assert_ranked(items: &[labdex::ScoredEntry]) {
    for pair in items.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.score >= b.score, "score order violated");
        if a.score == b.score {
            assert!(
                a.entry.title.len() <= b.entry.title.len(),
                "title-length tie-break violated"
            );
            if a.entry.title.len() == b.entry.title.len() {
                assert!(a.entry.id < b.entry.id, "id tie-break violated");
            }
        }
    }
}
