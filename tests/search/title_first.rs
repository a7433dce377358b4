//! Title-first ordering over hand-built candidate lists.
//!
//! Candidates are fed straight to the ranker in a fixed engine order, so
//! every expected position below follows from the boost table alone.

use crate::common::make_record;
use titlerank::{rank, rank_all, score_record, CandidateRecord, NormalizedQuery, RankingConfig};

fn titles(results: &[titlerank::RankedResult]) -> Vec<String> {
    results
        .iter()
        .map(|r| r.record.title().unwrap_or("").to_string())
        .collect()
}

#[test]
fn test_exact_title_beats_earlier_body_match() {
    let mut body_only = make_record(0, "Weekly Notes");
    body_only.meta.description = Some("Mostly about rust this week".to_string());
    body_only.excerpt = Some("<mark>rust</mark> rust rust".to_string());
    let records = vec![body_only, make_record(1, "Rust")];

    let ranked = rank(records, &NormalizedQuery::new("rust"), &RankingConfig::default());
    assert_eq!(
        titles(&ranked),
        vec!["Rust", "Weekly Notes"],
        "Exact title match should outrank a body-only match listed first"
    );
}

#[test]
fn test_boost_tiers_order_titles() {
    // Engine order is the reverse of the expected ranking.
    let mut excerpt_only = make_record(0, "Notes");
    excerpt_only.excerpt = Some("rust".to_string());
    let records = vec![
        excerpt_only,
        make_record(1, "Rust and wasm together"),
        make_record(2, "Why wasm needs rust"),
        make_record(3, "Rust wasm"),
    ];

    let ranked = rank(
        records,
        &NormalizedQuery::new("rust wasm"),
        &RankingConfig::default(),
    );
    assert_eq!(
        titles(&ranked),
        vec![
            "Rust wasm",
            "Why wasm needs rust",
            "Rust and wasm together",
            "Notes",
        ],
        "Exact, then all-terms by length, then excerpt-only"
    );
}

#[test]
fn test_shorter_title_breaks_equal_boosts() {
    let records = vec![
        make_record(0, "Rust for embedded systems programmers"),
        make_record(1, "Rust for embedded"),
    ];
    let ranked = rank(records, &NormalizedQuery::new("embedded"), &RankingConfig::default());
    assert_eq!(ranked[0].record.title(), Some("Rust for embedded"));
}

#[test]
fn test_engine_order_breaks_identical_records() {
    let records: Vec<CandidateRecord> = (0..5).map(|i| make_record(i, "Rust")).collect();
    let ranked = rank_all(records, &NormalizedQuery::new("rust"), &RankingConfig::default());
    let indices: Vec<usize> = ranked.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4], "Ties must keep engine order");
    for pair in ranked.windows(2) {
        assert!(pair[0].score > pair[1].score, "Order bonus should separate clones");
    }
}

#[test]
fn test_order_bonus_vanishes_past_fifty() {
    let config = RankingConfig::default();
    let q = NormalizedQuery::new("rust");
    let record = make_record(0, "Rust");
    assert_eq!(
        score_record(&record, &q, 50, &config),
        score_record(&record, &q, 80, &config),
        "Order bonus floors at zero"
    );
}

#[test]
fn test_diacritics_match_both_ways() {
    let config = RankingConfig::default();
    let records = vec![make_record(0, "Cafe Society"), make_record(1, "Café")];

    let plain = rank(records.clone(), &NormalizedQuery::new("cafe"), &config);
    assert_eq!(plain[0].record.title(), Some("Café"));
    assert!(plain[0].score >= 2600, "Accented title should count as exact");

    let accented = rank(records, &NormalizedQuery::new("CAFÉ"), &config);
    assert_eq!(accented[0].record.title(), Some("Café"));
    assert_eq!(accented[0].score, plain[0].score);
}

#[test]
fn test_display_limit_caps_output() {
    let records: Vec<CandidateRecord> = (0..25)
        .map(|i| make_record(i, &format!("Post {i}")))
        .collect();
    let config = RankingConfig {
        display_limit: 7,
        ..RankingConfig::default()
    };
    assert_eq!(rank(records, &NormalizedQuery::new("post"), &config).len(), 7);
}

#[test]
fn test_title_always_dominates_body_signals() {
    // Best possible body-only record vs worst possible any-term title record.
    let config = RankingConfig::default();
    let q = NormalizedQuery::new("zig");

    let mut body = make_record(0, "");
    body.meta.title = None;
    body.meta.description = Some("zig".to_string());
    body.excerpt = Some("zig".to_string());
    let best_body = score_record(&body, &q, 0, &config);

    let long_title = format!("{} zig", "x".repeat(300));
    let worst_title = score_record(&make_record(0, &long_title), &q, 500, &config);

    assert!(
        worst_title > best_body,
        "title match {worst_title} should beat body-only {best_body}"
    );
}
