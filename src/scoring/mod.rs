// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidate records get their numbers.
//!
//! The engine's own order is only a starting point. Each record is rescored
//! with title-weighted boosts and re-sorted; title matches dominate
//! everything the description, excerpt and tie-breaks can add.

mod core;
pub mod ranking;

pub use self::core::*;
