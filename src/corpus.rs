// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dataset builder: materializes the fixed lab catalog.
//!
//! Everything in here is a pure function of compile-time constants. No clock,
//! no randomness, no I/O - two calls to [`build_corpus`] produce byte-identical
//! output, which the determinism tests pin down. The hosting application calls
//! it once at startup and holds the result for the process lifetime.
//!
//! The corpus has two populations:
//!
//! - **Curated entries**, one per topic in declaration order. Hand-written
//!   title/summary/tags, `target_concept` set to the topic id, base rank
//!   stepping down from [`CURATED_RANK_START`] so the first-declared topic
//!   leads the default ordering.
//! - **Filler entries**, [`FILLER_COUNT`] of them, generated by cycling the
//!   topic table, a small keyword-group table, and a handful of modulus
//!   rules. They simulate a large searchable dataset; none of them is
//!   navigational.

use crate::topics::{Topic, TOPICS};
use crate::types::{Level, SearchEntry};

/// Number of generated filler entries.
pub const FILLER_COUNT: usize = 1800;

/// Base rank of the first-declared topic's curated entry; each later topic
/// gets one less.
pub const CURATED_RANK_START: u32 = 10;

/// Filler base ranks cycle `1..=FILLER_RANK_MODULUS`.
pub const FILLER_RANK_MODULUS: u32 = 11;

/// Hand-written copy for one curated entry. Kept parallel to `TOPICS`.
struct CuratedSeed {
    title: &'static str,
    summary: &'static str,
    tags: &'static str,
}

/// One seed per topic, in topic-declaration order.
const CURATED_SEEDS: &[CuratedSeed] = &[
    CuratedSeed {
        title: "Thinking in State",
        summary: "Why store shape drives component design, and how selectors keep renders honest.",
        tags: "store reducer selector signal",
    },
    CuratedSeed {
        title: "Rendering Under the Hood",
        summary: "From virtual tree diffs to commit phases: what actually happens on update.",
        tags: "diff commit tree fiber",
    },
    CuratedSeed {
        title: "Taming Side Effects",
        summary: "Subscriptions, timers, and fetches: sequencing external work without leaks.",
        tags: "cleanup subscribe fetch race",
    },
    CuratedSeed {
        title: "Routes, Guards, and Redirects",
        summary: "Declarative routing with nested outlets, lazy segments, and auth guards.",
        tags: "guard redirect nested lazy",
    },
    CuratedSeed {
        title: "Profiling Render Performance",
        summary: "Finding wasted renders with the profiler, then fixing them with memoization.",
        tags: "memo profiler flamegraph defer",
    },
];

/// Keyword groups cycled across filler entries. Small on purpose - the point
/// is repetition at scale, not realistic vocabulary.
const VOCAB_GROUPS: &[&[&str]] = &[
    &["memo", "cache", "stale", "invalidate"],
    &["fetch", "suspense", "fallback", "retry"],
    &["signal", "derive", "observe", "notify"],
    &["layout", "paint", "reflow", "composite"],
    &["debounce", "throttle", "defer", "batch"],
    &["hydrate", "stream", "partial", "islands"],
];

/// Build the complete corpus: curated entries first (topic order), then the
/// generated fillers, ids ascending from 1 in creation order.
pub fn build_corpus() -> Vec<SearchEntry> {
    let mut entries = Vec::with_capacity(TOPICS.len() + FILLER_COUNT);

    for (position, (topic, seed)) in TOPICS.iter().zip(CURATED_SEEDS).enumerate() {
        entries.push(curated_entry(position, topic, seed));
    }
    for i in 0..FILLER_COUNT {
        entries.push(filler_entry(i));
    }
    entries
}

fn curated_entry(position: usize, topic: &Topic, seed: &CuratedSeed) -> SearchEntry {
    SearchEntry {
        id: (position + 1) as u32,
        title: seed.title.to_string(),
        summary: seed.summary.to_string(),
        facet: topic.id.to_string(),
        level: curated_level(position),
        target_concept: Some(topic.id.to_string()),
        tag_text: seed.tags.to_string(),
        search_blob: search_blob(seed.title, seed.summary, seed.tags),
        base_rank: CURATED_RANK_START - position as u32,
    }
}

fn filler_entry(i: usize) -> SearchEntry {
    let topic = &TOPICS[i % TOPICS.len()];
    let group = VOCAB_GROUPS[i % VOCAB_GROUPS.len()];
    let title = format!("Lab {:04}: {}", i + 1, topic.name);
    let summary = filler_summary(i, topic, group);
    let tag_text = group.join(" ");
    let search_blob = search_blob(&title, &summary, &tag_text);

    SearchEntry {
        id: (TOPICS.len() + i + 1) as u32,
        title,
        summary,
        facet: topic.id.to_string(),
        level: filler_level(i),
        target_concept: None,
        tag_text,
        search_blob,
        base_rank: (i as u32 % FILLER_RANK_MODULUS) + 1,
    }
}

/// Curated difficulty ascends through the three labels, then stays at the top.
fn curated_level(position: usize) -> Level {
    match position {
        0 => Level::Intro,
        1 => Level::Intermediate,
        _ => Level::Advanced,
    }
}

/// Filler difficulty: every 5th entry is advanced, every 3rd remaining one is
/// intermediate, the rest are intro.
fn filler_level(i: usize) -> Level {
    if i % 5 == 0 {
        Level::Advanced
    } else if i % 3 == 0 {
        Level::Intermediate
    } else {
        Level::Intro
    }
}

/// Two fixed summary sentences, alternated by index parity.
fn filler_summary(i: usize, topic: &Topic, group: &[&str]) -> String {
    if i % 2 == 0 {
        format!(
            "Guided exercise on {} and {} drills inside the {} track.",
            group[0], group[1], topic.name
        )
    } else {
        format!(
            "Worked walkthrough of {} patterns, with notes on common pitfalls.",
            group[0]
        )
    }
}

/// The cached match surface: lowercase join of the fields it derives from.
///
/// This is the single definition both the builder and the verify layer use -
/// the blob must never diverge from its source fields.
pub fn search_blob(title: &str, summary: &str, tag_text: &str) -> String {
    format!("{} {} {}", title, summary, tag_text).to_lowercase()
}
