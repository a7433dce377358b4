//! Title-first re-ranking for client-side static-site search.
//!
//! A prebuilt index client (Pagefind in the browser, [`MemoryEngine`] natively)
//! answers free-text queries with candidates in its own relevance order. This
//! crate takes the first 50 of those, rescores them with title-weighted boosts,
//! keeps the top 10 and renders them as HTML cards.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  session.rs  │────▶│ pipeline.rs  │────▶│  render.rs   │
//! │ (lazy engine │     │ (debounced   │     │ (cards, empty│
//! │  init, once) │     │  query, rank)│     │  no-results) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        ▲                    │                    │
//!        │                    ▼                    ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  engine/     │     │  scoring/    │     │   tags.rs    │
//! │ (IndexEngine)│     │ (boosts,sort)│     │ (badges)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use titlerank::{MemoryEngine, RankingConfig, SearchPipeline};
//!
//! let engine = MemoryEngine::from_json_str(records_json)?;
//! let pipeline = SearchPipeline::new(engine, panel, RankingConfig::default());
//! let outcome = pipeline.search("café").await?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod runtime;
pub mod scoring;
pub mod session;
pub mod tags;
pub mod testing;
pub mod types;
pub mod util;

pub use config::{RankingConfig, TitleBoosts};
pub use engine::{IndexEngine, MemoryEngine};
pub use error::{ConfigError, EngineError};
pub use pipeline::{ResultsPanel, SearchOutcome, SearchPipeline};
pub use render::{empty_state_html, loading_html, no_results_html, results_html, ResultCard};
pub use scoring::ranking::{compare_ranked, rank, rank_all};
pub use scoring::{score_breakdown, score_record, MatchSignals, NormalizedQuery, ScoreBreakdown};
pub use session::IndexSession;
pub use tags::extract_tags;
pub use types::{CandidateRecord, QueryOptions, RankedResult, RecordFilters, RecordMeta, TagValue};
pub use util::{escape_html, normalize, strip_tags, truncate_preview};
