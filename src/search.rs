// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking and filter engine: where the rubber meets the road.
//!
//! One call = one full scan of the corpus. There is no index, no cache, and
//! no partial work to cancel - that is the point. The engine exists to
//! demonstrate an expensive-but-deferrable computation, so the hosting layer
//! decides *when* to invoke it (debounce, defer, drop stale results); this
//! module only guarantees that each call is bounded, deterministic, and
//! reports its own cost.
//!
//! # Determinism
//!
//! The sort key is a total order: score descending, then title length
//! ascending, then id ascending. No two corpus entries share an id, so the
//! final tie-break always resolves and the output is identical regardless of
//! sort-algorithm stability.
//!
//! # Failure semantics
//!
//! Total over well-typed input. Empty corpus, whitespace query, facet that
//! matches nothing - all degrade to an empty (or default-ordered) result,
//! never an error.

use std::time::Instant;

use crate::scoring::score_entry;
use crate::topics::FACET_ALL;
use crate::types::{QueryResult, ScoredEntry, SearchEntry};
use crate::utils::normalize;

/// Hard cap on the number of items in one result page.
pub const PAGE_SIZE: usize = 24;

/// Floor for the reported elapsed time, in milliseconds.
///
/// Sub-resolution timings clamp here so callers never see a zero or negative
/// cost from a coarse clock.
pub const MIN_ELAPSED_MS: f64 = 0.1;

/// Parse a raw query into normalized, whitespace-separated tokens.
///
/// An empty return value means "no active query" - the caller falls back to
/// base-rank ordering rather than matching.
///
/// # Example
///
/// ```
/// let tokens = labdex::parse_query("  Deferred   Values ");
/// assert_eq!(tokens, vec!["deferred", "values"]);
/// ```
pub fn parse_query(raw_query: &str) -> Vec<String> {
    normalize(raw_query)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Scan the corpus and produce one ranked, bounded result page.
///
/// The facet pre-filter runs before scoring: entries outside the requested
/// facet are skipped entirely and never count toward `total`. `"all"` means
/// no restriction. Scoring and exclusion semantics live in
/// [`score_entry`](crate::score_entry).
///
/// `total` counts every entry that survived filter + scoring, before the
/// page cap; `items` is the top [`PAGE_SIZE`] slice of that ordering.
pub fn search(corpus: &[SearchEntry], raw_query: &str, facet: &str) -> QueryResult {
    let started = Instant::now();
    let tokens = parse_query(raw_query);

    let mut hits: Vec<ScoredEntry> = Vec::new();
    for entry in corpus {
        if facet != FACET_ALL && entry.facet != facet {
            continue;
        }
        if let Some(score) = score_entry(entry, &tokens) {
            hits.push(ScoredEntry {
                entry: entry.clone(),
                score,
            });
        }
    }

    // Total order: score desc, shorter title first, then id. The id leg makes
    // the result independent of sort stability.
    hits.sort_unstable_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.entry.title.len().cmp(&b.entry.title.len()))
            .then_with(|| a.entry.id.cmp(&b.entry.id))
    });

    let total = hits.len();
    hits.truncate(PAGE_SIZE);

    QueryResult {
        items: hits,
        total,
        elapsed_time_ms: elapsed_ms(started),
    }
}

/// Elapsed wall-clock time since `started`, clamped to [`MIN_ELAPSED_MS`].
///
/// `Instant` is monotonic, so the only artifact to guard against is a
/// measurement finer than the clamp floor.
fn elapsed_ms(started: Instant) -> f64 {
    let elapsed = started.elapsed().as_secs_f64() * 1000.0;
    elapsed.max(MIN_ELAPSED_MS)
}
