// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query pipeline: from a raw query string to ranked doc ids.
//!
//! The pipeline owns a frozen, loaded index and an expander. Each query is
//! tokenized with the same tokenizer the index was built with (anything
//! else would miss every key), expanded with whatever alternatives the
//! thesaurus knows, and handed to the matcher. Once constructed, the
//! pipeline is all reads: callers may share it freely across queries.

use crate::expand::{read_thesaurus, ThesaurusExpander};
use crate::index::InvertedIndex;
use crate::jsonl::read_index;
use crate::search::search;
use crate::tokenizer::tokenize;
use crate::types::{Query, SearchResults};
use std::io;
use std::path::Path;

/// Default result count for interactive queries.
pub const DEFAULT_NUM_RESULTS: usize = 10;

pub struct QueryPipeline {
    index: InvertedIndex,
    expander: ThesaurusExpander,
}

impl QueryPipeline {
    pub fn new(index: InvertedIndex, expander: ThesaurusExpander) -> Self {
        QueryPipeline { index, expander }
    }

    /// Load a persisted index, and a thesaurus when one is given. No
    /// thesaurus means every query runs unexpanded.
    pub fn load(
        index_path: impl AsRef<Path>,
        thesaurus_path: Option<&Path>,
    ) -> io::Result<Self> {
        let index = read_index(index_path)?;
        let expander = match thesaurus_path {
            Some(path) => read_thesaurus(path)?,
            None => ThesaurusExpander::new(),
        };
        Ok(QueryPipeline::new(index, expander))
    }

    /// Tokenize and expand a raw query string into the structured form.
    pub fn parse(&self, query_string: &str, num_results: usize) -> Query {
        let terms = tokenize(query_string);
        let alternatives = self.expander.expand(&terms);
        Query {
            terms,
            alternatives,
            num_results,
        }
    }

    /// Run one query to completion.
    pub fn run(&self, query_string: &str, num_results: usize) -> SearchResults {
        let query = self.parse(query_string, num_results);
        search(&self.index, &query)
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}
