// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML for the result panel.
//!
//! The panel is written wholesale on every render, so each function here
//! returns the complete markup for one panel state: empty, loading, no
//! results, or a list of result cards. Record text is escaped at the point it
//! is interpolated and nowhere else.

use crate::config::RankingConfig;
use crate::tags::extract_tags;
use crate::types::{CandidateRecord, RankedResult};
use crate::util::{escape_html, strip_tags, truncate_preview};

/// Shown for titleless records.
pub const UNTITLED: &str = "Untitled";

/// Everything a result card displays, in plain (unescaped) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub url: String,
    pub title: Option<String>,
    /// Description if present, otherwise the stripped excerpt; already truncated.
    pub preview: String,
    pub tags: Vec<String>,
    pub preview_image: Option<String>,
}

impl ResultCard {
    pub fn from_record(record: &CandidateRecord, config: &RankingConfig) -> Self {
        let source = match record.description() {
            Some(desc) => desc.to_string(),
            None => strip_tags(record.excerpt()),
        };
        Self {
            url: record.url.clone(),
            title: record.title().map(String::from),
            preview: truncate_preview(&source, config.preview_chars),
            tags: extract_tags(record, config),
            preview_image: record.preview_image().map(String::from),
        }
    }

    /// Escaped title, or the untitled placeholder.
    fn title_html(&self) -> String {
        match &self.title {
            Some(title) => escape_html(title),
            None => UNTITLED.to_string(),
        }
    }

    fn badges_html(&self) -> String {
        self.tags
            .iter()
            .map(|tag| {
                format!(
                    r#"<span class="badge rounded-pill text-bg-primary me-2 mb-2">{}</span>"#,
                    escape_html(tag)
                )
            })
            .collect()
    }

    fn aside_html(&self, title_html: &str) -> String {
        match &self.preview_image {
            Some(src) => {
                let src = escape_html(src);
                format!(
                    r#"
      <div class="d-flex flex-column align-items-end ms-sm-3 mt-3 mt-sm-0">
        <img src="{src}" alt="{title_html}"
             class="img-fluid rounded-3 d-sm-none"
             style="width:140px;height:auto;">
        <img src="{src}" alt="{title_html}"
             class="img-fluid rounded-3 d-none d-sm-block"
             style="width:180px;height:auto;">
        <i class="bi bi-arrow-right fs-4 text-primary mt-2 d-none d-sm-block"></i>
      </div>
    "#
                )
            }
            None => r#"
      <div class="text-primary d-none d-sm-flex align-items-center ms-sm-3 mt-sm-0 mt-3">
        <i class="bi bi-arrow-right fs-4"></i>
      </div>
    "#
            .to_string(),
        }
    }

    /// One `<a>` card.
    pub fn to_html(&self) -> String {
        let title = self.title_html();
        format!(
            r#"
      <a href="{url}" class="list-group-item list-group-item-action hover-border-primary card bg-body-tertiary rounded-3 shadow-sm border border-primary border-opacity-25 overflow-hidden position-relative p-3 mb-3">
        <div class="d-flex flex-column flex-sm-row align-items-start">
          <div class="flex-grow-1 pe-0 pe-sm-2">
            <div class="mb-2 d-flex flex-wrap align-items-center">{badges}</div>
            <h6 class="mb-1 text-primary">{title}</h6>
            <p class="mb-0 small text-secondary">{preview}</p>
          </div>
          {aside}
        </div>
      </a>"#,
            url = escape_html(&self.url),
            badges = self.badges_html(),
            title = title,
            preview = escape_html(&self.preview),
            aside = self.aside_html(&title),
        )
    }
}

/// Placeholder shown before the user has typed enough.
pub fn empty_state_html() -> String {
    r#"
    <div class="text-muted text-center py-4">
      <i class="bi bi-search fs-1 d-block mb-3"></i>
      Start typing to search…
    </div>"#
        .to_string()
}

/// Spinner shown while the index client loads.
pub fn loading_html() -> String {
    r#"
      <div class="text-center py-4">
        <div class="spinner-border text-primary" role="status" aria-hidden="true"></div>
        <div class="mt-2 text-secondary">Loading search…</div>
      </div>"#
        .to_string()
}

/// Notice echoing the (escaped) query back.
pub fn no_results_html(query: &str) -> String {
    format!(
        r#"
      <div class="alert alert-warning no-results mb-0" role="alert">
        No results for "<strong>{}</strong>"
      </div>"#,
        escape_html(query)
    )
}

/// The full result list.
pub fn results_html(results: &[RankedResult], config: &RankingConfig) -> String {
    let mut html = String::from(r#"<div class="list-group">"#);
    for result in results {
        let card = ResultCard::from_record(&result.record, config);
        html.push_str(&card.to_html());
    }
    html.push_str("</div>");
    html
}
