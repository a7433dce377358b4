// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-and-rank pipeline.
//!
//! One call to [`SearchPipeline::search`] per keystroke:
//!
//! ```text
//! trim ─▶ too short? ─▶ empty state
//!   │
//!   ▼
//! ensure ready (loading spinner on first use)
//!   │
//!   ▼
//! debounced query ─▶ superseded? ─▶ leave the panel alone
//!   │
//!   ▼
//! first 50 hits ─▶ resolve concurrently ─▶ score ─▶ sort ─▶ top 10 ─▶ render
//! ```
//!
//! Engine failures propagate to the caller untouched. The panel is only
//! written on the paths shown above, so a failed query leaves whatever was
//! there before (usually the spinner).

use crate::config::RankingConfig;
use crate::engine::IndexEngine;
use crate::error::EngineError;
use crate::render::{empty_state_html, loading_html, no_results_html, results_html};
use crate::scoring::ranking::rank;
use crate::scoring::NormalizedQuery;
use crate::session::IndexSession;
use crate::types::{CandidateRecord, QueryOptions};
use futures::future::try_join_all;
use tracing::{debug, trace};

/// Where rendered HTML goes. Each call replaces the panel's whole content.
pub trait ResultsPanel {
    fn show(&self, html: &str);
}

/// What a search call ended up doing to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query too short; the empty-state placeholder was shown.
    EmptyState,
    /// A newer query superseded this one; nothing was rendered.
    Superseded,
    /// The engine found nothing; the no-results notice was shown.
    NoResults,
    /// Cards were rendered.
    Rendered {
        /// Candidates resolved and scored.
        candidates: usize,
        /// Cards shown.
        shown: usize,
    },
}

impl SearchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyState => "empty",
            Self::Superseded => "superseded",
            Self::NoResults => "no-results",
            Self::Rendered { .. } => "rendered",
        }
    }
}

pub struct SearchPipeline<E, P> {
    session: IndexSession<E>,
    panel: P,
    config: RankingConfig,
}

impl<E: IndexEngine, P: ResultsPanel> SearchPipeline<E, P> {
    pub fn new(engine: E, panel: P, config: RankingConfig) -> Self {
        Self {
            session: IndexSession::new(engine),
            panel,
            config,
        }
    }

    pub fn session(&self) -> &IndexSession<E> {
        &self.session
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    pub fn show_empty_state(&self) {
        self.panel.show(&empty_state_html());
    }

    /// Panel just opened: reset it to the placeholder, then warm the engine.
    ///
    /// Warming never touches the panel, so a failure here only matters to the
    /// caller.
    pub async fn on_panel_shown(&self) -> Result<(), EngineError> {
        self.show_empty_state();
        self.session.ensure_ready().await
    }

    /// Run one query and render the outcome.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, EngineError> {
        let query = NormalizedQuery::new(query);

        if query.raw.chars().count() < self.config.min_query_chars {
            trace!(query = %query.raw, "query too short");
            self.show_empty_state();
            return Ok(SearchOutcome::EmptyState);
        }

        if !self.session.is_ready() {
            self.panel.show(&loading_html());
        }

        let Some(records) = self.fetch_candidates(&query.raw).await? else {
            debug!(query = %query.raw, "query superseded");
            return Ok(SearchOutcome::Superseded);
        };

        let candidates = records.len();
        let top = rank(records, &query, &self.config);
        debug!(query = %query.raw, candidates, shown = top.len(), "ranked results");

        if top.is_empty() {
            self.panel.show(&no_results_html(&query.raw));
            return Ok(SearchOutcome::NoResults);
        }

        self.panel.show(&results_html(&top, &self.config));
        Ok(SearchOutcome::Rendered {
            candidates,
            shown: top.len(),
        })
    }

    /// Query the engine and resolve the first `fetch_limit` hits, in engine order.
    ///
    /// `None` means the query was superseded. Does not touch the panel.
    pub async fn fetch_candidates(
        &self,
        query: &str,
    ) -> Result<Option<Vec<CandidateRecord>>, EngineError> {
        self.session.ensure_ready().await?;
        let engine = self
            .session
            .client()
            .ok_or_else(|| EngineError::Init("search engine not ready".to_string()))?;

        let Some(hits) = engine
            .debounced_search(query, &QueryOptions::default(), self.config.debounce_ms)
            .await?
        else {
            return Ok(None);
        };

        trace!(raw_hits = hits.len(), limit = self.config.fetch_limit, "resolving hits");
        let pending = hits
            .iter()
            .take(self.config.fetch_limit)
            .map(|hit| engine.load_record(hit));
        let records = try_join_all(pending).await?;
        Ok(Some(records))
    }
}
