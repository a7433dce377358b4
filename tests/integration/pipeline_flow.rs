//! Keystroke-level behavior of the search pipeline.

use crate::common::{blog_pipeline, hrefs, make_record, scripted_pipeline};
use titlerank::testing::{RecordingPanel, ReversedLoadEngine, ScriptedEngine};
use titlerank::{CandidateRecord, RankingConfig, SearchOutcome, SearchPipeline};

#[tokio::test]
async fn test_typing_sequence() {
    let pipeline = blog_pipeline();

    assert_eq!(pipeline.search("r").await.unwrap(), SearchOutcome::EmptyState);
    assert!(!pipeline.session().is_ready(), "One character must not load the index");

    assert!(matches!(
        pipeline.search("ru").await.unwrap(),
        SearchOutcome::Rendered { .. }
    ));
    assert!(matches!(
        pipeline.search("rus").await.unwrap(),
        SearchOutcome::Rendered { .. }
    ));

    let renders = pipeline.panel().renders();
    assert_eq!(renders.len(), 4, "empty, spinner, results, results");
    assert!(renders[0].contains("Start typing to search…"));
    assert!(renders[1].contains("spinner-border"));
    assert!(renders[2].contains("list-group"));
    assert!(!renders[3].contains("spinner-border"));
    assert_eq!(pipeline.session().engine().init_calls(), 1);
}

#[tokio::test]
async fn test_clearing_input_restores_placeholder() {
    let pipeline = blog_pipeline();
    pipeline.search("rust").await.unwrap();
    assert_eq!(pipeline.search("   ").await.unwrap(), SearchOutcome::EmptyState);
    assert!(pipeline.panel().last().unwrap().contains("Start typing"));
}

#[tokio::test]
async fn test_panel_shown_warms_without_results() {
    let pipeline = blog_pipeline();
    pipeline.on_panel_shown().await.unwrap();
    assert!(pipeline.session().is_ready());
    assert!(pipeline.session().client().is_some());
    assert_eq!(pipeline.panel().renders().len(), 1);

    pipeline.on_panel_shown().await.unwrap();
    assert_eq!(pipeline.session().engine().init_calls(), 1);
}

#[tokio::test]
async fn test_markup_in_titles_is_escaped() {
    let mut record = make_record(0, "<script>alert(1)</script>");
    record.excerpt = Some("<script>x</script> script".to_string());
    let pipeline = scripted_pipeline(vec![record]);

    pipeline.search("script").await.unwrap();
    let html = pipeline.panel().last().unwrap();
    assert!(!html.contains("<script>"), "Raw script tag leaked into:\n{html}");
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_query_markup_is_escaped_in_no_results() {
    let pipeline = blog_pipeline();
    pipeline.search("<img onerror=x>").await.unwrap();
    let html = pipeline.panel().last().unwrap();
    assert!(html.contains("<strong>&lt;img onerror=x&gt;</strong>"));
}

#[tokio::test]
async fn test_few_hits_all_resolved() {
    let pipeline = scripted_pipeline(vec![make_record(0, "Rust"), make_record(1, "Rusty")]);
    let outcome = pipeline.search("rust").await.unwrap();
    assert_eq!(
        outcome,
        SearchOutcome::Rendered {
            candidates: 2,
            shown: 2
        }
    );
    assert_eq!(pipeline.session().engine().load_calls(), 2);
}

#[tokio::test]
async fn test_sixty_hits_fetch_fifty_show_ten() {
    let records: Vec<CandidateRecord> = (0..60)
        .map(|i| make_record(i, &format!("Post {i}")))
        .collect();
    let pipeline = scripted_pipeline(records);
    let outcome = pipeline.search("post").await.unwrap();
    assert_eq!(
        outcome,
        SearchOutcome::Rendered {
            candidates: 50,
            shown: 10
        }
    );
    assert_eq!(pipeline.session().engine().load_calls(), 50);
    let html = pipeline.panel().last().unwrap();
    assert_eq!(hrefs(&html).len(), 10);
    assert!(
        !hrefs(&html).iter().any(|h| h == "/doc/55/"),
        "Hits past the fetch limit are never shown"
    );
}

#[tokio::test]
async fn test_long_description_is_truncated() {
    let mut record = make_record(0, "Rust");
    record.meta.description = Some("a".repeat(200));
    let pipeline = scripted_pipeline(vec![record]);
    pipeline.search("rust").await.unwrap();
    let html = pipeline.panel().last().unwrap();
    assert!(html.contains(&format!("{}…", "a".repeat(140))));
    assert!(!html.contains(&"a".repeat(141)));
}

#[tokio::test]
async fn test_custom_limits_apply() {
    let records: Vec<CandidateRecord> = (0..30)
        .map(|i| make_record(i, &format!("Note {i}")))
        .collect();
    let config = RankingConfig {
        fetch_limit: 12,
        display_limit: 3,
        debounce_ms: 50,
        ..RankingConfig::default()
    };
    let pipeline = SearchPipeline::new(
        ScriptedEngine::with_records(records),
        RecordingPanel::default(),
        config,
    );
    assert_eq!(
        pipeline.search("note").await.unwrap(),
        SearchOutcome::Rendered {
            candidates: 12,
            shown: 3
        }
    );
    let call = pipeline.session().engine().last_query().unwrap();
    assert_eq!(call.debounce_ms, 50);
}

#[tokio::test]
async fn test_superseded_query_keeps_previous_panel() {
    let pipeline = SearchPipeline::new(
        ScriptedEngine::with_titles(&["Rust"]).superseded(),
        RecordingPanel::default(),
        RankingConfig::default(),
    );
    pipeline.session().ensure_ready().await.unwrap();
    assert_eq!(pipeline.search("rust").await.unwrap(), SearchOutcome::Superseded);
    assert!(pipeline.panel().renders().is_empty());
}

#[tokio::test]
async fn test_out_of_order_loads_keep_engine_positions() {
    // 45 loads also exercises the ordered-stream path of the join
    let records: Vec<CandidateRecord> = (0..45).map(|i| make_record(i, "Guide")).collect();
    let pipeline = SearchPipeline::new(
        ReversedLoadEngine::with_records(records),
        RecordingPanel::default(),
        RankingConfig::default(),
    );

    let outcome = pipeline.search("guide").await.unwrap();
    assert_eq!(
        outcome,
        SearchOutcome::Rendered {
            candidates: 45,
            shown: 10
        }
    );
    let completion = pipeline.session().engine().completion_order();
    assert_eq!(completion.first(), Some(&44), "Last hit should finish first");
    assert_eq!(completion.last(), Some(&0));

    let expected: Vec<String> = (0..10).map(|i| format!("/doc/{i}/")).collect();
    assert_eq!(
        hrefs(&pipeline.panel().last().unwrap()),
        expected,
        "Equal titles must rank by engine position, not load completion"
    );
}
