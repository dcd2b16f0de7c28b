//! Ranked in-memory search over a synthetic lab catalog.
//!
//! This crate is the compute core of a search-responsiveness demo: a fixed
//! corpus of ~1800 catalog entries, scanned in full on every query, scored
//! against free-text tokens plus a category facet, and sliced to a single
//! bounded result page. The scan reports its own elapsed time so the hosting
//! layer can show what it is deferring.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  topics.rs  │────▶│  corpus.rs   │────▶│  search.rs  │
//! │ (Topic table│     │(build_corpus,│     │  (search,   │
//! │  FACET_ALL) │     │ search_blob) │     │ parse_query)│
//! └─────────────┘     └──────────────┘     └──────┬──────┘
//!        │                   │                    │
//!        │                   ▼                    ▼
//!        │            ┌──────────────┐     ┌─────────────┐
//!        └───────────▶│  verify.rs   │     │ scoring.rs  │
//!                     │ (Validated-  │     │(score_entry,│
//!                     │  Corpus)     │     │  bonuses)   │
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use labdex::{build_corpus, search};
//!
//! let corpus = build_corpus();
//! let result = search(&corpus, "deferred rendering", "all");
//!
//! assert!(result.items.len() <= labdex::PAGE_SIZE);
//! assert!(result.elapsed_time_ms >= labdex::MIN_ELAPSED_MS);
//! ```
//!
//! # What this is not
//!
//! No persistence, no fuzzy matching, no inverted index, no cross-call
//! caching. Every call is a full scan on purpose - the cost being measured
//! is the feature.

// Module declarations
mod corpus;
mod scoring;
mod search;
pub mod testing;
mod topics;
mod types;
mod utils;
mod verify;

// Re-exports for public API
pub use corpus::{
    build_corpus, search_blob, CURATED_RANK_START, FILLER_COUNT, FILLER_RANK_MODULUS,
};
pub use scoring::{
    position_bonus, score_entry, tag_diversity, CURATED_BONUS, MAX_POSITION_BONUS,
    POSITION_DECAY_STEP, TAG_SIGNAL_PREFIX, TOKEN_MATCH_BONUS, TOP_LEVEL_BONUS,
};
pub use search::{parse_query, search, MIN_ELAPSED_MS, PAGE_SIZE};
pub use topics::{is_known_facet, topic_by_id, Topic, FACET_ALL, TOPICS};
pub use types::{Level, QueryResult, ScoredEntry, SearchEntry};
pub use utils::normalize;
pub use verify::{validate_facet, InvariantError, ValidatedCorpus};
