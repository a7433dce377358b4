// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the titlerank command-line interface.
//!
//! Two subcommands, both run over a JSON file of resolved records: `rank` to
//! see what the search panel would show for a query, and `explain` to see
//! where every candidate's points came from.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "titlerank",
    about = "Title-first re-ranking for static-site search results",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank records for a query and show the top results
    Rank {
        /// JSON array of records (url, meta, filters, excerpt)
        records: PathBuf,

        /// Search query
        query: String,

        /// JSON ranking config; omitted fields keep their defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the exact HTML the results panel would receive
        #[arg(long)]
        html: bool,
    },

    /// Show the per-boost score breakdown for every candidate
    Explain {
        /// JSON array of records (url, meta, filters, excerpt)
        records: PathBuf,

        /// Search query
        query: String,

        /// JSON ranking config; omitted fields keep their defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
