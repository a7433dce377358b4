// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser runtime bindings.
//!
//! The WASM module wraps the Pagefind client in an [`IndexEngine`](crate::engine::IndexEngine),
//! writes into the results element, and exports the same entry points the
//! page's markup calls: `installSearch`, `openSearch`, `performSearch`.

#[cfg(feature = "wasm")]
pub mod wasm;
