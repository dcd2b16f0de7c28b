// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind result ranking.
//!
//! Every bonus here is a small positive integer and the final score is their
//! plain sum. That makes the formula additive and unbounded - fine for
//! ranking, where only relative order matters, but never treat a score as a
//! calibrated confidence value.
//!
//! # The bonuses
//!
//! | Bonus          | Value                         | When it applies            |
//! |----------------|-------------------------------|----------------------------|
//! | Token match    | 20 per found token            | query path                 |
//! | Position       | `max(0, 20 - idx/12)`         | per found token            |
//! | Tag diversity  | sum of `char mod 3`, 18 chars | query path, >= 1 match     |
//! | Curated        | 15                            | both paths                 |
//! | Top difficulty | 6                             | query path                 |
//!
//! # Key invariant: curated dominance at rest
//!
//! With no query active the score is `base_rank + CURATED_BONUS` for curated
//! entries and bare `base_rank` for filler. Filler base ranks cycle 1..=11
//! and curated base ranks start at 10 and step down one per topic, so the
//! weakest curated entry still clears the strongest filler:
//!
//! ```text
//! (10 - topics + 1) + 15 > 11    for the 5-topic table: 6 + 15 = 21 > 11
//! ```
//!
//! The difficulty bonus stays OFF the no-query path. Curated difficulty
//! ascends then pins at the top label, so adding +6 there would reorder
//! curated entries away from base-rank order.
//!
//! The tag-diversity term is deliberately arbitrary but deterministic - it
//! rewards lexical variety in the tag text and participates in tie-breaking,
//! so its exact formula (char code mod 3 over the first 18 lowercase chars)
//! must not drift.

use crate::types::{Level, SearchEntry};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================
// These participate in tie-breaking that downstream consumers observe.
// Changing any of them reorders result pages.

/// Flat bonus for each query token found in the search blob.
pub const TOKEN_MATCH_BONUS: u32 = 20;

/// Ceiling of the position bonus (a match at offset 0 earns this).
pub const MAX_POSITION_BONUS: u32 = 20;

/// The position bonus loses one point per this many bytes of match offset.
pub const POSITION_DECAY_STEP: usize = 12;

/// How many leading chars of the lowercase tag text feed the diversity sum.
pub const TAG_SIGNAL_PREFIX: usize = 18;

/// Flat bonus for curated entries, applied on both query paths.
pub const CURATED_BONUS: u32 = 15;

/// Flat bonus for top-difficulty entries, query path only.
pub const TOP_LEVEL_BONUS: u32 = 6;

/// Position bonus for a substring match at `match_index`.
///
/// Earlier matches score higher: full `MAX_POSITION_BONUS` at the start of
/// the blob, decaying by one per `POSITION_DECAY_STEP` bytes, floored at 0.
#[inline]
pub fn position_bonus(match_index: usize) -> u32 {
    MAX_POSITION_BONUS.saturating_sub((match_index / POSITION_DECAY_STEP) as u32)
}

/// Tag-diversity bonus: sum of `char code mod 3` over the first
/// `TAG_SIGNAL_PREFIX` characters of the lowercase tag text.
///
/// A cheap, allocation-free-in-spirit proxy for lexical variety. Bounded by
/// `2 * TAG_SIGNAL_PREFIX = 36`.
pub fn tag_diversity(tag_text: &str) -> u32 {
    tag_text
        .to_lowercase()
        .chars()
        .take(TAG_SIGNAL_PREFIX)
        .map(|c| (c as u32) % 3)
        .sum()
}

/// Score one entry against a tokenized query.
///
/// Returns `None` when the entry is excluded: an active query where no token
/// matched. With an empty token list (no active query) every entry scores,
/// using `base_rank` as the base.
///
/// This is a pure function of its arguments - no corpus, no hidden state -
/// so it stays unit-testable on hand-built entries.
pub fn score_entry(entry: &SearchEntry, tokens: &[String]) -> Option<u32> {
    if tokens.is_empty() {
        let mut score = entry.base_rank;
        if entry.is_curated() {
            score += CURATED_BONUS;
        }
        return Some(score);
    }

    let mut score = 0u32;
    let mut matched = 0u32;
    for token in tokens {
        if let Some(index) = entry.search_blob.find(token.as_str()) {
            matched += 1;
            score += TOKEN_MATCH_BONUS + position_bonus(index);
        }
    }

    // Tokens that match nowhere contribute nothing; an entry where NO token
    // matched is excluded outright rather than ranked at zero.
    if matched == 0 {
        return None;
    }

    score += tag_diversity(&entry.tag_text);
    if entry.is_curated() {
        score += CURATED_BONUS;
    }
    if entry.level == Level::Advanced {
        score += TOP_LEVEL_BONUS;
    }
    Some(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{make_curated, make_filler};

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_position_bonus_decays() {
        assert_eq!(position_bonus(0), MAX_POSITION_BONUS);
        assert_eq!(position_bonus(11), MAX_POSITION_BONUS);
        assert_eq!(position_bonus(12), MAX_POSITION_BONUS - 1);
        assert_eq!(position_bonus(120), MAX_POSITION_BONUS - 10);
    }

    #[test]
    fn test_position_bonus_floors_at_zero() {
        // 20 * 12 = 240 is the last offset with any bonus left.
        assert_eq!(position_bonus(239), 1);
        assert_eq!(position_bonus(240), 0);
        assert_eq!(position_bonus(10_000), 0);
    }

    #[test]
    fn test_tag_diversity_formula() {
        // 'a' = 97 -> 1, 'b' = 98 -> 2, 'c' = 99 -> 0
        assert_eq!(tag_diversity("abc"), 3);
        // Case-insensitive: computed over the lowercase text.
        assert_eq!(tag_diversity("ABC"), 3);
    }

    #[test]
    fn test_tag_diversity_only_reads_prefix() {
        let short = "b".repeat(TAG_SIGNAL_PREFIX);
        let long = "b".repeat(TAG_SIGNAL_PREFIX + 50);
        assert_eq!(tag_diversity(&short), tag_diversity(&long));
        assert_eq!(tag_diversity(&short), 2 * TAG_SIGNAL_PREFIX as u32);
    }

    #[test]
    fn test_tag_diversity_bounded() {
        assert!(tag_diversity("zzzzzzzzzzzzzzzzzzzzzzzz") <= 2 * TAG_SIGNAL_PREFIX as u32);
        assert_eq!(tag_diversity(""), 0);
    }

    #[test]
    fn test_empty_query_uses_base_rank() {
        let filler = make_filler(1, "state", 9);
        assert_eq!(score_entry(&filler, &[]), Some(9));
    }

    #[test]
    fn test_empty_query_curated_gets_flat_bonus_only() {
        let mut curated = make_curated(1, "state", 10);
        curated.level = Level::Advanced;
        // No difficulty or tag bonus at rest - just base rank + curated.
        assert_eq!(score_entry(&curated, &[]), Some(10 + CURATED_BONUS));
    }

    #[test]
    fn test_no_token_matches_excludes() {
        let filler = make_filler(1, "state", 5);
        assert_eq!(score_entry(&filler, &tokens(&["zzzqqq"])), None);
    }

    #[test]
    fn test_partial_token_match_scores() {
        // One hit out of two tokens still scores; the miss just adds nothing.
        let entry = make_filler(1, "state", 5);
        let both = score_entry(&entry, &tokens(&["state"])).unwrap();
        let with_miss = score_entry(&entry, &tokens(&["state", "zzzqqq"])).unwrap();
        assert_eq!(both, with_miss);
    }

    #[test]
    fn test_match_bonus_includes_position() {
        let entry = make_filler(1, "state", 5);
        let index = entry.search_blob.find("state").unwrap();
        let expected =
            TOKEN_MATCH_BONUS + position_bonus(index) + tag_diversity(&entry.tag_text);
        assert_eq!(score_entry(&entry, &tokens(&["state"])), Some(expected));
    }

    #[test]
    fn test_curated_beats_equal_filler_on_query() {
        let curated = make_curated(1, "state", 10);
        let mut filler = make_filler(2, "state", 10);
        // Same text surface so token and tag contributions are identical.
        filler.title = curated.title.clone();
        filler.summary = curated.summary.clone();
        filler.tag_text = curated.tag_text.clone();
        filler.search_blob = curated.search_blob.clone();
        filler.level = curated.level;

        let q = tokens(&["state"]);
        let curated_score = score_entry(&curated, &q).unwrap();
        let filler_score = score_entry(&filler, &q).unwrap();
        assert_eq!(curated_score, filler_score + CURATED_BONUS);
    }

    #[test]
    fn test_top_level_bonus_on_query_path() {
        let base = make_filler(1, "state", 5);
        let mut advanced = base.clone();
        advanced.level = Level::Advanced;

        let q = tokens(&["state"]);
        let base_score = score_entry(&base, &q).unwrap();
        let advanced_score = score_entry(&advanced, &q).unwrap();
        assert_eq!(advanced_score, base_score + TOP_LEVEL_BONUS);
    }
}
