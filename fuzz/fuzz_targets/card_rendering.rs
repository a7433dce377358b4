// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for result card markup.
//!
//! Record fields come straight from the index and may contain anything. The
//! rendered card must never carry a raw `<` from them: every interpolated
//! value goes through the escaper.

#![no_main]

use libfuzzer_sys::fuzz_target;
use titlerank::{escape_html, CandidateRecord, RankingConfig, ResultCard};

fuzz_target!(|data: &[u8]| {
    let Ok(record) = serde_json::from_slice::<CandidateRecord>(data) else {
        return;
    };
    let card = ResultCard::from_record(&record, &RankingConfig::default());
    let html = card.to_html();

    assert!(card.preview.chars().count() <= 141);
    for field in [Some(&record.url), card.title.as_ref()].into_iter().flatten() {
        if field.contains('<') {
            assert!(html.contains(&escape_html(field)));
        }
    }
    for tag in &card.tags {
        assert!(html.contains(&escape_html(tag)));
    }
});
