// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: corpus invariants checked once, up front.
//!
//! The engine itself is total - it never validates mid-scan, because every
//! input it accepts is defined to degrade gracefully. Contract violations
//! (a corpus not produced by the builder, a facet outside the known set) are
//! programmer errors, and they belong at the call boundary: validate at
//! construction, then trust the data forever after.
//!
//! | Check                  | Invariant                                        |
//! |------------------------|--------------------------------------------------|
//! | `DuplicateId`          | ids unique across the corpus                     |
//! | `ZeroBaseRank`         | `base_rank >= 1` (it doubles as a score)         |
//! | `UnknownFacet`         | every facet is in the topic table                |
//! | `UnknownConceptTarget` | curated targets reference a known topic          |
//! | `StaleSearchBlob`      | blob == lowercase join of its source fields      |

use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

use crate::corpus::search_blob;
use crate::topics::{is_known_facet, topic_by_id, FACET_ALL};
use crate::types::SearchEntry;

/// Error type for corpus invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Two entries share an id.
    DuplicateId { id: u32 },
    /// `base_rank` is zero; the empty-query path uses it as a score.
    ZeroBaseRank { id: u32 },
    /// Entry facet is not in the topic table.
    UnknownFacet { id: u32, facet: String },
    /// Curated entry targets a concept the topic table doesn't know.
    UnknownConceptTarget { id: u32, concept: String },
    /// Cached search blob diverged from the fields it derives from.
    StaleSearchBlob { id: u32 },
    /// A facet argument is neither a topic id nor the `"all"` wildcard.
    InvalidFacetArgument { facet: String },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::DuplicateId { id } => {
                write!(f, "duplicate entry id {}", id)
            }
            InvariantError::ZeroBaseRank { id } => {
                write!(f, "entry {} has base_rank 0", id)
            }
            InvariantError::UnknownFacet { id, facet } => {
                write!(f, "entry {} has unknown facet '{}'", id, facet)
            }
            InvariantError::UnknownConceptTarget { id, concept } => {
                write!(f, "entry {} targets unknown concept '{}'", id, concept)
            }
            InvariantError::StaleSearchBlob { id } => {
                write!(f, "entry {} has a search blob that no longer matches its fields", id)
            }
            InvariantError::InvalidFacetArgument { facet } => {
                write!(f, "'{}' is not a topic id or '{}'", facet, FACET_ALL)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// A corpus that passed every invariant check at construction.
///
/// Construction is the only place validation happens; afterwards the wrapper
/// derefs to a plain entry slice, so it plugs straight into `search`.
#[derive(Debug, Clone)]
pub struct ValidatedCorpus(Vec<SearchEntry>);

impl ValidatedCorpus {
    /// Validate a corpus, consuming it. Returns the first violation found,
    /// scanning in storage order.
    pub fn new(entries: Vec<SearchEntry>) -> Result<Self, InvariantError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(InvariantError::DuplicateId { id: entry.id });
            }
            if entry.base_rank == 0 {
                return Err(InvariantError::ZeroBaseRank { id: entry.id });
            }
            if topic_by_id(&entry.facet).is_none() {
                return Err(InvariantError::UnknownFacet {
                    id: entry.id,
                    facet: entry.facet.clone(),
                });
            }
            if let Some(concept) = &entry.target_concept {
                if topic_by_id(concept).is_none() {
                    return Err(InvariantError::UnknownConceptTarget {
                        id: entry.id,
                        concept: concept.clone(),
                    });
                }
            }
            let expected = search_blob(&entry.title, &entry.summary, &entry.tag_text);
            if entry.search_blob != expected {
                return Err(InvariantError::StaleSearchBlob { id: entry.id });
            }
        }
        Ok(ValidatedCorpus(entries))
    }

    /// The validated entries, in storage order.
    pub fn entries(&self) -> &[SearchEntry] {
        &self.0
    }
}

impl Deref for ValidatedCorpus {
    type Target = [SearchEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Check a facet argument at the call boundary: a known topic id or `"all"`.
///
/// The engine itself treats an unknown facet as matching nothing; this is
/// for surfaces (like the CLI) that want to reject the typo instead.
pub fn validate_facet(facet: &str) -> Result<(), InvariantError> {
    if is_known_facet(facet) {
        Ok(())
    } else {
        Err(InvariantError::InvalidFacetArgument {
            facet: facet.to_string(),
        })
    }
}
