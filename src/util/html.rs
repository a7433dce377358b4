// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML helpers for the result panel.
//!
//! Everything the panel shows is assembled as a string and written wholesale,
//! so every piece of record text goes through [`escape_html`] first. Excerpts
//! arrive as highlighted HTML fragments and are flattened with [`strip_tags`]
//! before they are matched against or previewed.

use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Escape the five HTML-significant characters.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Remove anything that looks like a markup tag, keeping the text between.
pub fn strip_tags(fragment: &str) -> String {
    TAG_PATTERN.replace_all(fragment, "").into_owned()
}

/// Trim and cut to at most `max_chars` characters, appending `…` when cut.
///
/// The cut text is trimmed again so the ellipsis never follows a space.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", trimmed[..cut].trim()),
        None => trimmed.to_string(),
    }
}
