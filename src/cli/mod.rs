// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the labdex command-line interface.
//!
//! Three subcommands: `search` runs a ranked query against the built-in
//! catalog and reports the measured scan time (the whole point of the demo),
//! `topics` lists the facet table, and `stats` summarizes corpus
//! composition. The search command can repeat a query to show the timing
//! spread an interactive caller would be deferring.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "labdex",
    about = "Ranked in-memory search over a synthetic lab catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and display the ranked result page
    Search {
        /// Free-text query; empty falls back to base-rank ordering
        #[arg(default_value = "")]
        query: String,

        /// Facet filter: a topic id, or "all" for no restriction
        #[arg(short, long, default_value = "all")]
        facet: String,

        /// Print the raw result as JSON instead of the formatted page
        #[arg(long)]
        json: bool,

        /// Run the query this many times and report the timing spread
        #[arg(long, default_value = "1")]
        repeat: usize,
    },

    /// List the topic table (facet ids, display names, accents)
    Topics,

    /// Show corpus composition: per-facet, per-level, curated counts
    Stats,
}
