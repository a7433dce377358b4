use anyhow::{Context, Result};
use clap::Parser;
use std::cell::RefCell;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use titlerank::{
    extract_tags, rank, rank_all, score_breakdown, CandidateRecord, MemoryEngine, NormalizedQuery,
    RankingConfig, ResultsPanel, SearchOutcome, SearchPipeline,
};
use titlerank::render::UNTITLED;

mod cli;
use cli::display::{
    boost_cell, clip, pad_right, row, score_value, section_bot, section_mid, section_top,
    tag_list, themed, BOLD, GRAY, GREEN,
};
use cli::{Cli, Commands};

/// Keeps only the last render; the CLI never shows the spinner.
#[derive(Default)]
struct CapturePanel {
    last: RefCell<Option<String>>,
}

impl ResultsPanel for CapturePanel {
    fn show(&self, html: &str) {
        *self.last.borrow_mut() = Some(html.to_string());
    }
}

type CliPipeline = SearchPipeline<MemoryEngine, CapturePanel>;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TITLERANK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("failed to start async runtime")?;

    match cli.command {
        Commands::Rank {
            records,
            query,
            config,
            html,
        } => {
            let pipeline = load_pipeline(&records, config.as_deref())?;
            if html {
                runtime.block_on(print_html(&pipeline, &query))
            } else {
                runtime.block_on(print_ranking(&pipeline, &query))
            }
        }
        Commands::Explain {
            records,
            query,
            config,
        } => {
            let pipeline = load_pipeline(&records, config.as_deref())?;
            runtime.block_on(print_explain(&pipeline, &query))
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<RankingConfig> {
    let Some(path) = path else {
        return Ok(RankingConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    RankingConfig::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
}

fn load_pipeline(records: &Path, config: Option<&Path>) -> Result<CliPipeline> {
    let config = load_config(config)?;
    let engine = MemoryEngine::from_json_file(records)
        .with_context(|| format!("failed to load records from {}", records.display()))?;
    tracing::debug!(records = engine.len(), "loaded records");
    Ok(SearchPipeline::new(engine, CapturePanel::default(), config))
}

/// The exact markup the results panel would end up with.
async fn print_html(pipeline: &CliPipeline, query: &str) -> Result<()> {
    let outcome = pipeline.search(query).await?;
    if outcome == SearchOutcome::Superseded {
        return Ok(());
    }
    if let Some(html) = pipeline.panel().last.borrow().as_deref() {
        println!("{}", html);
    }
    Ok(())
}

/// Candidates for a query, or `None` when it is too short to run.
async fn candidates(
    pipeline: &CliPipeline,
    query: &NormalizedQuery,
) -> Result<Option<Vec<CandidateRecord>>> {
    if query.raw.chars().count() < pipeline.config().min_query_chars {
        println!(
            "{}",
            themed(
                GRAY,
                &[],
                &format!(
                    "query must be at least {} characters",
                    pipeline.config().min_query_chars
                )
            )
        );
        return Ok(None);
    }
    Ok(pipeline.fetch_candidates(&query.raw).await?)
}

async fn print_ranking(pipeline: &CliPipeline, query: &str) -> Result<()> {
    let query = NormalizedQuery::new(query);
    let Some(records) = candidates(pipeline, &query).await? else {
        return Ok(());
    };
    let fetched = records.len();
    let top = rank(records, &query, pipeline.config());

    section_top(&format!("RESULTS for \"{}\"", query.raw));
    if top.is_empty() {
        row(&format!("  No results for \"{}\"", query.raw));
    }
    for (position, result) in top.iter().enumerate() {
        let title = result.record.title().unwrap_or(UNTITLED);
        let tags = extract_tags(&result.record, pipeline.config());
        row(&format!(
            " {:>2}. {}  {}  {}",
            position + 1,
            score_value(result.score),
            pad_right(&themed(GREEN, &[BOLD], &clip(title, 40)), 40),
            tag_list(&tags)
        ));
        row(&format!(
            "          {}",
            themed(GRAY, &[], &clip(&result.record.url, 70))
        ));
    }
    section_mid(&format!("{} fetched, {} shown", fetched, top.len()));
    section_bot();
    Ok(())
}

async fn print_explain(pipeline: &CliPipeline, query: &str) -> Result<()> {
    let query = NormalizedQuery::new(query);
    let Some(records) = candidates(pipeline, &query).await? else {
        return Ok(());
    };
    let config = pipeline.config();

    section_top(&format!("SCORES for \"{}\" (normalized \"{}\")", query.raw, query.text));
    for result in rank_all(records, &query, config) {
        let b = score_breakdown(&result.record, &query, result.index, config);
        let title = result.record.title().unwrap_or(UNTITLED);
        row(&format!(
            " {}  #{:<2} {}",
            score_value(b.total()),
            result.index,
            clip(title, 60)
        ));
        row(&format!(
            "        {} {} {} {}",
            boost_cell("exact", b.exact_title),
            boost_cell("prefix", b.title_prefix),
            boost_cell("all", b.all_terms_title),
            boost_cell("any", b.any_term_title),
        ));
        row(&format!(
            "        {} {} {} {}",
            boost_cell("desc", b.any_term_description),
            boost_cell("excerpt", b.any_term_excerpt),
            boost_cell("len", b.length_bonus),
            boost_cell("order", b.order_bonus),
        ));
    }
    section_bot();
    Ok(())
}
