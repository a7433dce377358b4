// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Failures from the index client are never caught by the ranker. They are
//! wrapped in [`EngineError`] and handed straight back to whoever started the
//! search.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("search engine failed to initialize: {0}")]
    Init(String),

    #[error("search query failed: {0}")]
    Query(String),

    #[error("failed to load result {url}: {details}")]
    Record { url: String, details: String },

    #[error("unexpected response from search engine: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ranking config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid ranking config: {0}")]
    Invalid(String),
}
