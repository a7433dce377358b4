// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display-tag extraction.
//!
//! Tags come from two places: the page's `meta.tags` (a delimited string or a
//! list) and its tag filter. They are merged in that order, trimmed, and
//! de-duplicated case-insensitively with the first spelling kept. Generic
//! labels such as "post" or "pages" say nothing about the page and are dropped.

use crate::config::RankingConfig;
use crate::types::{CandidateRecord, TagValue};
use std::collections::HashSet;

/// Collects tags in first-seen order, skipping blanks, generics and repeats.
struct TagSet<'a> {
    config: &'a RankingConfig,
    seen: HashSet<String>,
    out: Vec<String>,
}

impl<'a> TagSet<'a> {
    fn new(config: &'a RankingConfig) -> Self {
        Self {
            config,
            seen: HashSet::new(),
            out: Vec::new(),
        }
    }

    fn add(&mut self, raw: &str) {
        let tag = raw.trim();
        if tag.is_empty() {
            return;
        }
        let key = tag.to_lowercase();
        if self.config.is_generic_tag(&key) || !self.seen.insert(key) {
            return;
        }
        self.out.push(tag.to_string());
    }

    fn add_all<'s>(&mut self, tags: impl IntoIterator<Item = &'s str>) {
        for tag in tags {
            self.add(tag);
        }
    }
}

/// Split the metadata tag field: a string is `,`/`|` delimited, a list is taken as-is.
fn meta_tags(value: &TagValue) -> Vec<&str> {
    match value {
        TagValue::One(s) => s.split([',', '|']).collect(),
        TagValue::Many(list) => list.iter().map(String::as_str).collect(),
    }
}

/// A filter value is never split: one string is one tag.
fn filter_tags(value: &TagValue) -> Vec<&str> {
    match value {
        TagValue::One(s) => vec![s.as_str()],
        TagValue::Many(list) => list.iter().map(String::as_str).collect(),
    }
}

/// Display tags for a record, metadata first, then filters.
pub fn extract_tags(record: &CandidateRecord, config: &RankingConfig) -> Vec<String> {
    let mut set = TagSet::new(config);
    if let Some(value) = &record.meta.tags {
        set.add_all(meta_tags(value));
    }
    if let Some(value) = record.filters.tag_source() {
        set.add_all(filter_tags(value));
    }
    set.out
}
