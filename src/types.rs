// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data structures for candidate records and ranked results.
//!
//! A [`CandidateRecord`] is what the index client hands back when a raw match
//! is resolved: URL, a metadata bag, a filter bag and a highlighted excerpt.
//! Records are created fresh for every query and dropped after rendering.
//!
//! The serde shape follows the index client's own JSON (`meta.preview_image`,
//! `filters.tags`), so fixtures and browser objects deserialize unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag field as the index emits it: one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    One(String),
    Many(Vec<String>),
}

/// Page metadata captured at index time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Free-form tags. A single string may hold several tags separated by `,` or `|`.
    pub tags: Option<TagValue>,
    pub preview_image: Option<String>,
}

/// Filter values attached to a page (`data-pagefind-filter`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFilters {
    pub tags: Option<TagValue>,
    pub tag: Option<TagValue>,
}

impl RecordFilters {
    /// `tags` wins whenever it is present, even when empty.
    pub fn tag_source(&self) -> Option<&TagValue> {
        self.tags.as_ref().or(self.tag.as_ref())
    }
}

/// One resolved search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub url: String,
    #[serde(default)]
    pub meta: RecordMeta,
    #[serde(default)]
    pub filters: RecordFilters,
    /// HTML fragment with match highlighting.
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl CandidateRecord {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            meta: RecordMeta {
                title: Some(title.into()),
                ..RecordMeta::default()
            },
            ..Self::default()
        }
    }

    /// Title if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(self.meta.title.as_deref())
    }

    /// Description if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        non_empty(self.meta.description.as_deref())
    }

    pub fn excerpt(&self) -> &str {
        self.excerpt.as_deref().unwrap_or("")
    }

    pub fn preview_image(&self) -> Option<&str> {
        non_empty(self.meta.preview_image.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A record annotated with its score and position in the engine's order.
///
/// Only lives for one ranking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedResult {
    pub record: CandidateRecord,
    /// Position in the engine's own relevance order (0-based).
    pub index: usize,
    pub score: u32,
}

/// Options forwarded with every query. The ranker always sends the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, Vec<String>>,
}
