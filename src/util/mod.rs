// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by scoring, tag extraction and rendering.
//!
//! Normalization for accent-insensitive matching, and the small set of HTML
//! operations the panel needs: escaping, tag stripping, preview truncation.

pub mod html;
pub mod normalize;

pub use html::{escape_html, strip_tags, truncate_preview};
pub use normalize::{normalize, query_terms};
