//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fakes for the engine and the panel so every test
//! drives the pipeline the same way.

#![doc(hidden)]

use crate::engine::IndexEngine;
use crate::error::EngineError;
use crate::pipeline::ResultsPanel;
use crate::types::{CandidateRecord, QueryOptions};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};

/// Create a record with a title and a URL derived from its position.
pub fn make_record(id: usize, title: &str) -> CandidateRecord {
    CandidateRecord::new(format!("/doc/{}/", id), title)
}

/// Panel that keeps every render.
#[derive(Debug, Default)]
pub struct RecordingPanel {
    renders: RefCell<Vec<String>>,
}

impl RecordingPanel {
    pub fn renders(&self) -> Vec<String> {
        self.renders.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.renders.borrow().last().cloned()
    }
}

impl ResultsPanel for RecordingPanel {
    fn show(&self, html: &str) {
        self.renders.borrow_mut().push(html.to_string());
    }
}

/// Arguments of one `debounced_search` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCall {
    pub query: String,
    pub options: QueryOptions,
    pub debounce_ms: u32,
}

/// Engine that returns every record it holds for any query, in order.
///
/// Can be told to report queries as superseded or to fail them, and counts
/// every call it receives.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    records: Vec<CandidateRecord>,
    superseded: bool,
    fail_queries: bool,
    init_calls: Cell<usize>,
    search_calls: Cell<usize>,
    load_calls: Cell<usize>,
    last_query: RefCell<Option<QueryCall>>,
}

impl ScriptedEngine {
    pub fn with_records(records: Vec<CandidateRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn with_titles(titles: &[&str]) -> Self {
        Self::with_records(
            titles
                .iter()
                .enumerate()
                .map(|(i, t)| make_record(i, t))
                .collect(),
        )
    }

    /// Every query returns `None`.
    pub fn superseded(mut self) -> Self {
        self.superseded = true;
        self
    }

    /// Every query returns an error.
    pub fn failing_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls.get()
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.get()
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.get()
    }

    pub fn last_query(&self) -> Option<QueryCall> {
        self.last_query.borrow().clone()
    }
}

#[async_trait(?Send)]
impl IndexEngine for ScriptedEngine {
    type Hit = usize;

    async fn init(&self) -> Result<(), EngineError> {
        self.init_calls.set(self.init_calls.get() + 1);
        Ok(())
    }

    async fn debounced_search(
        &self,
        query: &str,
        options: &QueryOptions,
        debounce_ms: u32,
    ) -> Result<Option<Vec<usize>>, EngineError> {
        self.search_calls.set(self.search_calls.get() + 1);
        *self.last_query.borrow_mut() = Some(QueryCall {
            query: query.to_string(),
            options: options.clone(),
            debounce_ms,
        });
        if self.fail_queries {
            return Err(EngineError::Query("scripted failure".to_string()));
        }
        if self.superseded {
            return Ok(None);
        }
        Ok(Some((0..self.records.len()).collect()))
    }

    async fn load_record(&self, hit: &usize) -> Result<CandidateRecord, EngineError> {
        self.load_calls.set(self.load_calls.get() + 1);
        self.records.get(*hit).cloned().ok_or_else(|| EngineError::Record {
            url: format!("#{hit}"),
            details: "no such record".to_string(),
        })
    }
}

/// Engine whose record loads finish in reverse hit order.
///
/// `load_record` for hit `i` yields to the executor `n - i` times before
/// resolving, so the last hit completes first when loads run concurrently.
#[derive(Debug, Default)]
pub struct ReversedLoadEngine {
    records: Vec<CandidateRecord>,
    completed: RefCell<Vec<usize>>,
}

impl ReversedLoadEngine {
    pub fn with_records(records: Vec<CandidateRecord>) -> Self {
        Self {
            records,
            completed: RefCell::default(),
        }
    }

    /// Hits in the order their loads finished.
    pub fn completion_order(&self) -> Vec<usize> {
        self.completed.borrow().clone()
    }
}

#[async_trait(?Send)]
impl IndexEngine for ReversedLoadEngine {
    type Hit = usize;

    async fn init(&self) -> Result<(), EngineError> {
        Ok(())
    }

    async fn debounced_search(
        &self,
        _query: &str,
        _options: &QueryOptions,
        _debounce_ms: u32,
    ) -> Result<Option<Vec<usize>>, EngineError> {
        Ok(Some((0..self.records.len()).collect()))
    }

    async fn load_record(&self, hit: &usize) -> Result<CandidateRecord, EngineError> {
        for _ in 0..self.records.len().saturating_sub(*hit) {
            tokio::task::yield_now().await;
        }
        self.completed.borrow_mut().push(*hit);
        self.records.get(*hit).cloned().ok_or_else(|| EngineError::Record {
            url: format!("#{hit}"),
            details: "no such record".to_string(),
        })
    }
}

/// Engine whose first `n` initializations fail.
#[derive(Debug, Default)]
pub struct FlakyInitEngine {
    failures_left: Cell<usize>,
    init_calls: Cell<usize>,
}

impl FlakyInitEngine {
    pub fn failing_first(n: usize) -> Self {
        Self {
            failures_left: Cell::new(n),
            init_calls: Cell::new(0),
        }
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls.get()
    }
}

#[async_trait(?Send)]
impl IndexEngine for FlakyInitEngine {
    type Hit = usize;

    async fn init(&self) -> Result<(), EngineError> {
        self.init_calls.set(self.init_calls.get() + 1);
        let left = self.failures_left.get();
        if left > 0 {
            self.failures_left.set(left - 1);
            return Err(EngineError::Init("index fetch failed".to_string()));
        }
        Ok(())
    }

    async fn debounced_search(
        &self,
        _query: &str,
        _options: &QueryOptions,
        _debounce_ms: u32,
    ) -> Result<Option<Vec<usize>>, EngineError> {
        Ok(Some(Vec::new()))
    }

    async fn load_record(&self, hit: &usize) -> Result<CandidateRecord, EngineError> {
        Err(EngineError::Record {
            url: format!("#{hit}"),
            details: "no records".to_string(),
        })
    }
}
