// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the lab catalog.
//!
//! These types define how catalog entries, per-query scores, and result pages
//! fit together. The corpus is built once at startup and never mutated; every
//! query hands back copies, so nothing here needs interior mutability.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchEntry**: `id` is unique across the corpus and assigned in
//!   creation order. `base_rank >= 1`.
//!
//! - **SearchEntry.search_blob**: always the lowercase join of
//!   `title + " " + summary + " " + tag_text`. It is cached-derived, not an
//!   independent field - recomputing it must reproduce it byte for byte.
//!
//! - **SearchEntry.target_concept**: `Some` only for curated entries, and the
//!   referenced id must exist in the topic table.
//!
//! Rather than trusting yourself to remember these, run the corpus through
//! `ValidatedCorpus` from `verify` - it enforces all of them at construction.

use serde::{Deserialize, Serialize};

/// Difficulty label for a catalog entry.
///
/// Three fixed values. `Advanced` is the top label and the only one that
/// earns a scoring bonus on the query path.
///
/// **Gotcha**: the derived `Ord` follows declaration order (Intro <
/// Intermediate < Advanced), which happens to match difficulty. Don't rely
/// on it for scoring - the bonus lives in `scoring`, not here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Intro,
    Intermediate,
    Advanced,
}

impl Level {
    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Intro => "intro",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

/// One searchable entry in the lab catalog.
///
/// Immutable once built. Curated entries carry `target_concept = Some(topic
/// id)` so the hosting UI can route straight to the concept page; generated
/// filler entries carry `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    /// Unique positive id, assigned in creation order.
    pub id: u32,
    pub title: String,
    pub summary: String,
    /// Topic id this entry belongs to, drawn from the fixed topic table.
    pub facet: String,
    pub level: Level,
    /// Canonical topic id for direct navigation; curated entries only.
    #[serde(default)]
    pub target_concept: Option<String>,
    /// Free-form keyword string; only feeds the tag-diversity bonus.
    pub tag_text: String,
    /// Precomputed lowercase match surface: title + summary + tags.
    pub search_blob: String,
    /// Default ordering key when no query is active. Always >= 1.
    pub base_rank: u32,
}

impl SearchEntry {
    /// Whether this is a hand-curated canonical entry (vs. generated filler).
    #[inline]
    pub fn is_curated(&self) -> bool {
        self.target_concept.is_some()
    }
}

/// A catalog entry paired with its relevance score for one query.
///
/// Transient: created per query, never mutated afterwards, never persisted.
/// The entry is a copy - results don't alias back into the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredEntry {
    #[serde(flatten)]
    pub entry: SearchEntry,
    pub score: u32,
}

/// One page of ranked results plus the cost of computing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Ranked results, at most `search::PAGE_SIZE` of them.
    pub items: Vec<ScoredEntry>,
    /// How many entries passed the filter and scored above zero, pre-slice.
    pub total: usize,
    /// Measured cost of the scan + sort, clamped to a positive minimum.
    pub elapsed_time_ms: f64,
}
