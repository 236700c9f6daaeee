// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sift command-line interface.
//!
//! Four subcommands: `index` builds a persistent index from a corpus,
//! `inspect` prints the shape of a persisted index, `search` runs the
//! interactive query loop, and `eval` scores the engine against human
//! relevance judgements.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use sift::query::DEFAULT_NUM_RESULTS;

#[derive(Parser)]
#[command(
    name = "sift",
    about = "TF-IDF text search over JSON corpora",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// The two corpus layouts the acquisition stage understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CorpusFormat {
    /// One JSON array of {"id", "init_text"} records
    Wiki,
    /// JSON Lines with {"_id", "text"} and optional "title"
    Jsonl,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a search index from a document corpus
    Index {
        /// Input corpus file
        #[arg(short, long)]
        corpus: String,

        /// Corpus file layout
        #[arg(short, long, value_enum, default_value_t = CorpusFormat::Jsonl)]
        format: CorpusFormat,

        /// Output index file (line-delimited JSON)
        #[arg(short, long)]
        output: String,
    },

    /// Inspect a persisted index file
    Inspect {
        /// Path to index file
        file: String,
    },

    /// Interactive query loop; terminates on empty input
    Search {
        /// Path to index file
        index: String,

        /// Corpus file, used only to show titles next to doc ids
        corpus: Option<String>,

        /// Corpus layout when a corpus is given
        #[arg(short, long, value_enum, default_value_t = CorpusFormat::Jsonl)]
        format: CorpusFormat,

        /// JSON Lines thesaurus for query expansion
        #[arg(short, long)]
        synonyms: Option<String>,

        /// Maximum number of results per query
        #[arg(short, long, default_value_t = DEFAULT_NUM_RESULTS)]
        limit: usize,
    },

    /// Run test queries and sum their human relevance scores
    Eval {
        /// Path to index file
        index: String,

        /// JSON Lines file of test queries
        queries: String,

        /// TSV of (query-id, doc-id, relevance) judgements
        judgements: String,

        /// JSON Lines thesaurus for query expansion
        #[arg(short, long)]
        synonyms: Option<String>,

        /// Maximum number of results per test query
        #[arg(short, long, default_value = "100")]
        limit: usize,
    },
}
