// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Accent-insensitive text normalization.
//!
//! Every comparison the ranker makes (title equality, title prefix, term
//! containment in title, description and excerpt) runs on normalized text, so
//! "Café" and "cafe" are the same word as far as ranking is concerned.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, NFD-decompose, drop combining marks.
///
/// - "Café" → "cafe"
/// - "tummalachērla" → "tummalacherla"
/// - "naïve" → "naive"
///
/// Whitespace is left alone. The title length tie-break is measured on this
/// output, so collapsing runs of spaces here would change scores.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Split an already-normalized query into its search terms.
///
/// Empty pieces never appear: runs of whitespace count as one separator.
pub fn query_terms(normalized_query: &str) -> Vec<&str> {
    normalized_query.split_whitespace().collect()
}
