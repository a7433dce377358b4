// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the re-ranking pass.
//!
//! Whatever the titles and query, the output must be sorted by score then
//! engine position, capped at the display limit, and an exact title match
//! must never sit below a record without any title match.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use titlerank::{rank, score_breakdown, CandidateRecord, NormalizedQuery, RankingConfig};

#[derive(Debug, Arbitrary)]
struct RankInput {
    query: String,
    records: Vec<(String, Option<String>, Option<String>)>,
    display_limit: u8,
}

fuzz_target!(|input: RankInput| {
    let display_limit = (input.display_limit as usize).max(1);
    let config = RankingConfig {
        display_limit,
        ..RankingConfig::default()
    };

    let records: Vec<CandidateRecord> = input
        .records
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, (title, description, excerpt))| {
            let mut record = CandidateRecord::new(format!("/{i}/"), title);
            record.meta.description = description;
            record.excerpt = excerpt;
            record
        })
        .collect();
    let count = records.len();

    let query = NormalizedQuery::new(&input.query);
    let ranked = rank(records, &query, &config);
    assert_eq!(ranked.len(), count.min(display_limit));

    for pair in ranked.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].index < pair[1].index)
        );
    }

    let mut seen_miss = false;
    for result in &ranked {
        let b = score_breakdown(&result.record, &query, result.index, &config);
        if b.title_points() == 0 {
            seen_miss = true;
        } else {
            assert!(!(seen_miss && b.exact_title > 0), "exact title ranked below a title miss");
        }
    }
});
