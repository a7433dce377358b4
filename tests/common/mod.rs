//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::PathBuf;
use titlerank::testing::{RecordingPanel, ScriptedEngine};
use titlerank::{CandidateRecord, MemoryEngine, RankingConfig, SearchPipeline};

// Re-export canonical test utilities from titlerank::testing
pub use titlerank::testing::make_record;

/// Path to the blog fixture (six posts, mixed metadata).
pub fn blog_fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/blog.json")
}

/// The blog fixture as records.
pub fn blog_records() -> Vec<CandidateRecord> {
    let raw = std::fs::read_to_string(blog_fixture_path()).expect("Failed to read blog fixture");
    serde_json::from_str(&raw).expect("Blog fixture is not valid JSON")
}

/// Pipeline over the blog fixture with a recording panel.
pub fn blog_pipeline() -> SearchPipeline<MemoryEngine, RecordingPanel> {
    SearchPipeline::new(
        MemoryEngine::new(blog_records()),
        RecordingPanel::default(),
        RankingConfig::default(),
    )
}

/// Pipeline whose engine returns `records` verbatim for any query.
pub fn scripted_pipeline(
    records: Vec<CandidateRecord>,
) -> SearchPipeline<ScriptedEngine, RecordingPanel> {
    SearchPipeline::new(
        ScriptedEngine::with_records(records),
        RecordingPanel::default(),
        RankingConfig::default(),
    )
}

/// Pull the rendered card hrefs out of panel HTML, in order.
pub fn hrefs(html: &str) -> Vec<String> {
    html.split("<a href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(String::from)
        .collect()
}
