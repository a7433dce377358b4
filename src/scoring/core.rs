// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind title-first ranking.
//!
//! A record's score is the sum of every boost it qualifies for. The boosts
//! stack: an exact title match is also a prefix match, an all-terms match and
//! an any-term match, so it collects all four.
//!
//! | Signal                      | Default |
//! |-----------------------------|---------|
//! | title == query              | 1000    |
//! | title starts with query     | 700     |
//! | every term in title         | 600     |
//! | some term in title          | 300     |
//! | some term in description    | 30      |
//! | some term in excerpt        | 10      |
//! | shorter title               | 100 - len, floor 0 |
//! | earlier engine position     | 50 - idx, floor 0  |
//!
//! All comparisons run on [`normalize`]d text.

use crate::config::RankingConfig;
use crate::types::CandidateRecord;
use crate::util::{normalize, query_terms, strip_tags};

/// A trimmed, normalized query and its whitespace-split terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// The trimmed query as typed.
    pub raw: String,
    pub text: String,
    pub terms: Vec<String>,
}

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let text = normalize(&raw);
        let terms = query_terms(&text).into_iter().map(String::from).collect();
        Self { raw, text, terms }
    }

    fn any_term_in(&self, haystack: &str) -> bool {
        self.terms.iter().any(|t| haystack.contains(t.as_str()))
    }

    fn all_terms_in(&self, haystack: &str) -> bool {
        !self.terms.is_empty() && self.terms.iter().all(|t| haystack.contains(t.as_str()))
    }
}

/// Which boosts a record qualifies for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSignals {
    pub exact_title: bool,
    pub title_prefix: bool,
    pub all_terms_title: bool,
    pub any_term_title: bool,
    pub any_term_description: bool,
    pub any_term_excerpt: bool,
    /// Length of the normalized title in characters.
    pub title_chars: usize,
}

impl MatchSignals {
    pub fn detect(record: &CandidateRecord, query: &NormalizedQuery) -> Self {
        let title = normalize(record.title().unwrap_or(""));
        let description = normalize(record.description().unwrap_or(""));
        let excerpt = normalize(&strip_tags(record.excerpt()));

        Self {
            exact_title: title == query.text,
            title_prefix: title.starts_with(&query.text),
            all_terms_title: query.all_terms_in(&title),
            any_term_title: query.any_term_in(&title),
            any_term_description: query.any_term_in(&description),
            any_term_excerpt: query.any_term_in(&excerpt),
            title_chars: title.chars().count(),
        }
    }
}

/// Per-component score, kept apart so `explain` can show where points came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub exact_title: u32,
    pub title_prefix: u32,
    pub all_terms_title: u32,
    pub any_term_title: u32,
    pub any_term_description: u32,
    pub any_term_excerpt: u32,
    pub length_bonus: u32,
    pub order_bonus: u32,
}

impl ScoreBreakdown {
    /// Sum of every component, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        [
            self.any_term_description,
            self.any_term_excerpt,
            self.length_bonus,
            self.order_bonus,
        ]
        .into_iter()
        .fold(self.title_points(), u32::saturating_add)
    }

    /// Points earned from the title alone, tie-breaks excluded.
    pub fn title_points(&self) -> u32 {
        self.exact_title
            .saturating_add(self.title_prefix)
            .saturating_add(self.all_terms_title)
            .saturating_add(self.any_term_title)
    }
}

fn boost(hit: bool, points: u32) -> u32 {
    if hit {
        points
    } else {
        0
    }
}

/// Score a record at `index` in the engine's order, component by component.
pub fn score_breakdown(
    record: &CandidateRecord,
    query: &NormalizedQuery,
    index: usize,
    config: &RankingConfig,
) -> ScoreBreakdown {
    let signals = MatchSignals::detect(record, query);
    let boosts = &config.boosts;
    let title_chars = u32::try_from(signals.title_chars).unwrap_or(u32::MAX);
    let position = u32::try_from(index).unwrap_or(u32::MAX);

    ScoreBreakdown {
        exact_title: boost(signals.exact_title, boosts.exact_title),
        title_prefix: boost(signals.title_prefix, boosts.title_prefix),
        all_terms_title: boost(signals.all_terms_title, boosts.all_terms_title),
        any_term_title: boost(signals.any_term_title, boosts.any_term_title),
        any_term_description: boost(signals.any_term_description, boosts.any_term_description),
        any_term_excerpt: boost(signals.any_term_excerpt, boosts.any_term_excerpt),
        length_bonus: config.length_tiebreak.saturating_sub(title_chars),
        order_bonus: config.order_tiebreak.saturating_sub(position),
    }
}

/// Total score for a record at `index` in the engine's order.
pub fn score_record(
    record: &CandidateRecord,
    query: &NormalizedQuery,
    index: usize,
    config: &RankingConfig,
) -> u32 {
    score_breakdown(record, query, index, config).total()
}
