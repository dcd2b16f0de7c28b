// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed topic table.
//!
//! Supplied to the engine by the hosting application; only `id` and `name`
//! matter for search. The accent color rides along because the original
//! catalog UI themes its topic chips with it, and keeping the table complete
//! means one source of truth instead of two.
//!
//! Declaration order is load-bearing: the dataset builder assigns curated
//! base ranks in this order, so reordering the table reorders the default
//! (no-query) result page.

/// One topic in the catalog: a facet value plus display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    /// Stable identifier, used as the facet value and concept target.
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Accent color for topic chips (hex, UI-only).
    pub accent: &'static str,
}

/// Wildcard facet value meaning "no category restriction".
pub const FACET_ALL: &str = "all";

/// The fixed topic set, in declaration order.
pub const TOPICS: &[Topic] = &[
    Topic {
        id: "state",
        name: "State Management",
        accent: "#61afef",
    },
    Topic {
        id: "rendering",
        name: "Rendering",
        accent: "#98c379",
    },
    Topic {
        id: "effects",
        name: "Side Effects",
        accent: "#e5c07b",
    },
    Topic {
        id: "routing",
        name: "Routing",
        accent: "#c678dd",
    },
    Topic {
        id: "performance",
        name: "Performance",
        accent: "#e06c75",
    },
];

/// Look up a topic by its id. Returns `None` for unknown ids and for the
/// `"all"` wildcard, which is not a topic.
pub fn topic_by_id(id: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.id == id)
}

/// Whether a facet string is valid as a filter argument: a known topic id
/// or the `"all"` wildcard.
pub fn is_known_facet(facet: &str) -> bool {
    facet == FACET_ALL || topic_by_id(facet).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_ids_are_unique() {
        for (i, a) in TOPICS.iter().enumerate() {
            for b in &TOPICS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn wildcard_is_not_a_topic() {
        assert!(topic_by_id(FACET_ALL).is_none());
        assert!(is_known_facet(FACET_ALL));
    }

    #[test]
    fn lookup_finds_every_topic() {
        for topic in TOPICS {
            assert_eq!(topic_by_id(topic.id), Some(topic));
            assert!(is_known_facet(topic.id));
        }
    }

    #[test]
    fn unknown_facet_rejected() {
        assert!(!is_known_facet("astrology"));
        assert!(!is_known_facet(""));
    }
}
