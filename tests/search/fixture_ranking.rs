//! End-to-end ranking over the blog fixture.
//!
//! The in-memory engine reports hits in file order; these tests check that
//! the rendered card order reflects title-first scoring instead.

use crate::common::{blog_fixture_path, blog_pipeline, blog_records, hrefs};
use titlerank::{
    rank_all, MemoryEngine, NormalizedQuery, RankingConfig, SearchOutcome, SearchPipeline,
};
use titlerank::testing::RecordingPanel;

#[tokio::test]
async fn test_rust_query_ranks_exact_title_first() {
    let pipeline = blog_pipeline();
    let outcome = pipeline.search("rust").await.unwrap();
    assert_eq!(
        outcome,
        SearchOutcome::Rendered {
            candidates: 5,
            shown: 5
        }
    );

    let html = pipeline.panel().last().unwrap();
    assert_eq!(
        hrefs(&html),
        vec![
            "/posts/rust/",
            "/posts/learning-rust-ownership/",
            "/posts/async-rust-in-practice/",
            "/posts/untitled-draft/",
            "/pages/about/",
        ]
    );
}

#[tokio::test]
async fn test_unaccented_query_finds_accented_title() {
    let pipeline = blog_pipeline();
    pipeline.search("cafe").await.unwrap();
    let html = pipeline.panel().last().unwrap();
    assert_eq!(hrefs(&html), vec!["/posts/cafe-review/"]);
    assert!(html.contains("Café Review"), "Title keeps its accent when shown");
}

#[tokio::test]
async fn test_miss_renders_single_no_results_notice() {
    let pipeline = blog_pipeline();
    assert_eq!(pipeline.search("abc").await.unwrap(), SearchOutcome::NoResults);
    let html = pipeline.panel().last().unwrap();
    assert_eq!(html.matches("no-results").count(), 1);
    assert!(html.contains(r#"No results for "<strong>abc</strong>""#));
}

#[tokio::test]
async fn test_untitled_record_gets_placeholder() {
    let pipeline = blog_pipeline();
    pipeline.search("draft").await.unwrap();
    let html = pipeline.panel().last().unwrap();
    assert!(html.contains(r#"<h6 class="mb-1 text-primary">Untitled</h6>"#));
    assert!(
        html.contains("A draft that mentions rust once."),
        "Excerpt preview should be stripped of <mark>"
    );
}

#[tokio::test]
async fn test_preview_image_renders_two_sizes() {
    let pipeline = blog_pipeline();
    pipeline.search("ownership").await.unwrap();
    let html = pipeline.panel().last().unwrap();
    assert_eq!(html.matches(r#"src="/img/ownership.png""#).count(), 2);
    assert!(html.contains(r#"alt="Learning Rust Ownership""#));
}

#[tokio::test]
async fn test_fixture_file_loads_through_engine() {
    let engine = MemoryEngine::from_json_file(&blog_fixture_path()).unwrap();
    assert_eq!(engine.len(), 6);
    let pipeline = SearchPipeline::new(engine, RecordingPanel::default(), RankingConfig::default());
    assert!(matches!(
        pipeline.search("async").await.unwrap(),
        SearchOutcome::Rendered { shown: 1, .. }
    ));
}

#[test]
fn test_ranking_is_deterministic() {
    let query = NormalizedQuery::new("rust");
    let config = RankingConfig::default();
    let first = rank_all(blog_records(), &query, &config);
    for _ in 0..10 {
        assert_eq!(rank_all(blog_records(), &query, &config), first);
    }
}
