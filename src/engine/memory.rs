// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory engine over a fixed list of records.
//!
//! Matches a record when any normalized query term occurs in its title,
//! description or stripped excerpt, and reports hits in corpus order. It has
//! no debounce timer, so it never reports a query as superseded.

use super::IndexEngine;
use crate::error::EngineError;
use crate::types::{CandidateRecord, QueryOptions};
use crate::util::{normalize, query_terms, strip_tags};
use async_trait::async_trait;
use std::cell::Cell;
use std::path::Path;

pub struct MemoryEngine {
    records: Vec<CandidateRecord>,
    initialized: Cell<bool>,
    init_calls: Cell<usize>,
}

impl MemoryEngine {
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        Self {
            records,
            initialized: Cell::new(false),
            init_calls: Cell::new(0),
        }
    }

    /// Load a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let records: Vec<CandidateRecord> =
            serde_json::from_str(json).map_err(|e| EngineError::Decode(e.to_string()))?;
        Ok(Self::new(records))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Init(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// How many times `init` ran.
    pub fn init_calls(&self) -> usize {
        self.init_calls.get()
    }

    fn matches(record: &CandidateRecord, terms: &[&str]) -> bool {
        let fields = [
            normalize(record.title().unwrap_or("")),
            normalize(record.description().unwrap_or("")),
            normalize(&strip_tags(record.excerpt())),
        ];
        terms
            .iter()
            .any(|term| fields.iter().any(|field| field.contains(*term)))
    }
}

#[async_trait(?Send)]
impl IndexEngine for MemoryEngine {
    type Hit = usize;

    async fn init(&self) -> Result<(), EngineError> {
        self.init_calls.set(self.init_calls.get() + 1);
        self.initialized.set(true);
        Ok(())
    }

    async fn debounced_search(
        &self,
        query: &str,
        _options: &QueryOptions,
        _debounce_ms: u32,
    ) -> Result<Option<Vec<usize>>, EngineError> {
        if !self.initialized.get() {
            return Err(EngineError::Query("engine not initialized".to_string()));
        }
        let normalized = normalize(query);
        let terms = query_terms(&normalized);
        let hits = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| Self::matches(record, &terms))
            .map(|(i, _)| i)
            .collect();
        Ok(Some(hits))
    }

    async fn load_record(&self, hit: &usize) -> Result<CandidateRecord, EngineError> {
        self.records.get(*hit).cloned().ok_or_else(|| EngineError::Record {
            url: format!("#{hit}"),
            details: "no such record".to_string(),
        })
    }
}
