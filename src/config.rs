// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking configuration.
//!
//! Every number the ranker uses lives here. The defaults reproduce the stock
//! title-first behaviour; a JSON file (CLI) or a JS object (browser) can
//! override any subset of fields.
//!
//! # Title dominance
//!
//! An exact title match must beat a record whose title only contains one of
//! the terms, whatever else that record matched. With the defaults the worst
//! exact-title record scores at least 1000 + 700 + 600 + 300 = 2600 while the
//! best any-term record tops out at 300 + 30 + 10 + 100 + 50 = 490.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Additive boosts applied by the scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleBoosts {
    /// Normalized title equals the normalized query (default: 1000)
    #[serde(default = "default_exact_title")]
    pub exact_title: u32,
    /// Normalized title starts with the normalized query (default: 700)
    #[serde(default = "default_title_prefix")]
    pub title_prefix: u32,
    /// Every query term occurs in the title (default: 600)
    #[serde(default = "default_all_terms_title")]
    pub all_terms_title: u32,
    /// At least one query term occurs in the title (default: 300)
    #[serde(default = "default_any_term_title")]
    pub any_term_title: u32,
    /// At least one query term occurs in the description (default: 30)
    #[serde(default = "default_any_term_description")]
    pub any_term_description: u32,
    /// At least one query term occurs in the stripped excerpt (default: 10)
    #[serde(default = "default_any_term_excerpt")]
    pub any_term_excerpt: u32,
}

fn default_exact_title() -> u32 {
    1000
}
fn default_title_prefix() -> u32 {
    700
}
fn default_all_terms_title() -> u32 {
    600
}
fn default_any_term_title() -> u32 {
    300
}
fn default_any_term_description() -> u32 {
    30
}
fn default_any_term_excerpt() -> u32 {
    10
}

impl Default for TitleBoosts {
    fn default() -> Self {
        Self {
            exact_title: default_exact_title(),
            title_prefix: default_title_prefix(),
            all_terms_title: default_all_terms_title(),
            any_term_title: default_any_term_title(),
            any_term_description: default_any_term_description(),
            any_term_excerpt: default_any_term_excerpt(),
        }
    }
}

impl TitleBoosts {
    /// Does an exact-title hit outrank any record that only has `any_term_title`?
    pub fn preserves_title_dominance(&self, length_tiebreak: u32, order_tiebreak: u32) -> bool {
        let worst_exact = self
            .exact_title
            .saturating_add(self.title_prefix)
            .saturating_add(self.all_terms_title)
            .saturating_add(self.any_term_title);
        let best_partial = self
            .any_term_title
            .saturating_add(self.any_term_description)
            .saturating_add(self.any_term_excerpt)
            .saturating_add(length_tiebreak)
            .saturating_add(order_tiebreak);
        worst_exact > best_partial
    }
}

/// Knobs for the query-and-rank pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Trimmed queries shorter than this never reach the engine (default: 2)
    pub min_query_chars: usize,
    /// Debounce window forwarded to the engine, in milliseconds (default: 300)
    pub debounce_ms: u32,
    /// Raw matches resolved and scored per query (default: 50)
    pub fetch_limit: usize,
    /// Cards rendered per query (default: 10)
    pub display_limit: usize,
    /// Preview text length before the ellipsis (default: 140)
    pub preview_chars: usize,
    /// Shorter titles earn up to this many points (default: 100)
    pub length_tiebreak: u32,
    /// Earlier engine positions earn up to this many points (default: 50)
    pub order_tiebreak: u32,
    pub boosts: TitleBoosts,
    /// Labels never shown as tags, compared case-insensitively
    pub generic_tags: Vec<String>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            debounce_ms: 300,
            fetch_limit: 50,
            display_limit: 10,
            preview_chars: 140,
            length_tiebreak: 100,
            order_tiebreak: 50,
            boosts: TitleBoosts::default(),
            generic_tags: ["post", "posts", "page", "pages"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl RankingConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_query_chars == 0 {
            return Err(ConfigError::Invalid(
                "min_query_chars must be at least 1".to_string(),
            ));
        }
        if self.fetch_limit == 0 {
            return Err(ConfigError::Invalid(
                "fetch_limit must be at least 1".to_string(),
            ));
        }
        if self.display_limit == 0 {
            return Err(ConfigError::Invalid(
                "display_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Case-insensitive membership in [`Self::generic_tags`].
    pub fn is_generic_tag(&self, lowered: &str) -> bool {
        self.generic_tags
            .iter()
            .any(|g| g.to_lowercase() == lowered)
    }
}
