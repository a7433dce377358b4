// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored records get sorted and cut.
//!
//! Sort order is score descending, then position in the engine's order
//! ascending. The order tie-break is already part of the score, but it stops
//! contributing after position 50 and two records can still land on the same
//! total, so the explicit second key keeps the output deterministic.

use super::core::{score_record, NormalizedQuery};
use crate::config::RankingConfig;
use crate::types::{CandidateRecord, RankedResult};
use std::cmp::Ordering;

/// Compare two ranked results: higher score first, then earlier engine position.
pub fn compare_ranked(a: &RankedResult, b: &RankedResult) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index))
}

/// Score every record and sort. Nothing is dropped.
pub fn rank_all(
    records: Vec<CandidateRecord>,
    query: &NormalizedQuery,
    config: &RankingConfig,
) -> Vec<RankedResult> {
    let mut ranked: Vec<RankedResult> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let score = score_record(&record, query, index, config);
            RankedResult {
                record,
                index,
                score,
            }
        })
        .collect();
    ranked.sort_by(compare_ranked);
    ranked
}

/// Score, sort and keep the top `display_limit` results.
pub fn rank(
    records: Vec<CandidateRecord>,
    query: &NormalizedQuery,
    config: &RankingConfig,
) -> Vec<RankedResult> {
    let mut ranked = rank_all(records, query, config);
    ranked.truncate(config.display_limit);
    ranked
}
