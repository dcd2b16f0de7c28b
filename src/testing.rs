//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::corpus::search_blob;
use crate::types::{Level, SearchEntry};

/// Create a generated-style filler entry with a consistent search blob.
///
/// The title embeds the facet, so a query for the facet id always matches.
/// Level defaults to `Intro`; tests that care about the difficulty bonus
/// override it explicitly.
pub fn make_filler(id: u32, facet: &str, base_rank: u32) -> SearchEntry {
    let title = format!("Lab {:04}: {}", id, facet);
    let summary = format!("Generated drill {} for the {} track.", id, facet);
    let tag_text = "memo cache stale".to_string();
    let blob = search_blob(&title, &summary, &tag_text);
    SearchEntry {
        id,
        title,
        summary,
        facet: facet.to_string(),
        level: Level::Intro,
        target_concept: None,
        tag_text,
        search_blob: blob,
        base_rank,
    }
}

/// Create a curated-style entry targeting its own facet as the concept.
pub fn make_curated(id: u32, facet: &str, base_rank: u32) -> SearchEntry {
    let title = format!("Guide to {}", facet);
    let summary = format!("The canonical walkthrough of {}.", facet);
    let tag_text = "guide canonical walkthrough".to_string();
    let blob = search_blob(&title, &summary, &tag_text);
    SearchEntry {
        id,
        title,
        summary,
        facet: facet.to_string(),
        level: Level::Intro,
        target_concept: Some(facet.to_string()),
        tag_text,
        search_blob: blob,
        base_rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_filler() {
        let entry = make_filler(42, "state", 7);
        assert_eq!(entry.id, 42);
        assert_eq!(entry.facet, "state");
        assert_eq!(entry.base_rank, 7);
        assert!(entry.target_concept.is_none());
        assert!(entry.search_blob.contains("state"));
    }

    #[test]
    fn test_make_curated() {
        let entry = make_curated(1, "routing", 10);
        assert!(entry.is_curated());
        assert_eq!(entry.target_concept.as_deref(), Some("routing"));
        assert!(entry.search_blob.contains("routing"));
    }

    #[test]
    fn test_helpers_produce_fresh_blobs() {
        let entry = make_filler(1, "effects", 3);
        let expected = search_blob(&entry.title, &entry.summary, &entry.tag_text);
        assert_eq!(entry.search_blob, expected);
    }
}
