// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index-query engine the ranker sits on top of.
//!
//! The engine owns the index, the query parser and the debounce window. The
//! ranker only needs three things from it: a one-time initialization, a
//! debounced query that may report itself superseded, and a way to resolve a
//! raw hit into its full record.
//!
//! In the browser this is the Pagefind client (see `runtime::wasm`). Natively
//! it is [`MemoryEngine`], used by the CLI and the tests.

mod memory;

pub use memory::MemoryEngine;

use crate::error::EngineError;
use crate::types::{CandidateRecord, QueryOptions};
use async_trait::async_trait;

/// Client-side search engine contract.
///
/// Not `Send`: the browser client is a JS object bound to the UI thread.
#[async_trait(?Send)]
pub trait IndexEngine {
    /// Raw match handle, resolved lazily through [`IndexEngine::load_record`].
    type Hit;

    /// Load and initialize the index. Callers make sure this runs once.
    async fn init(&self) -> Result<(), EngineError>;

    /// Run `query` after `debounce_ms` of quiet.
    ///
    /// Returns `Ok(None)` when a newer call superseded this one. Hits come
    /// back in the engine's own relevance order.
    async fn debounced_search(
        &self,
        query: &str,
        options: &QueryOptions,
        debounce_ms: u32,
    ) -> Result<Option<Vec<Self::Hit>>, EngineError>;

    /// Resolve one raw hit to its full record.
    async fn load_record(&self, hit: &Self::Hit) -> Result<CandidateRecord, EngineError>;
}
