// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query expansion from a thesaurus.
//!
//! The expander is a plain term-to-synonyms map. At query time it projects
//! the tokenized query onto that map: terms with no known alternatives are
//! simply absent from the result, which the matcher treats as an empty
//! group extension. The thesaurus file is JSON Lines, one
//! `{"term": ..., "syns": [...]}` record per line; records with an empty
//! synonym list are dropped at load time so lookups never see them.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Per-term alternatives source backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct ThesaurusExpander {
    term_alternatives: HashMap<String, Vec<String>>,
}

impl ThesaurusExpander {
    pub fn new() -> Self {
        ThesaurusExpander::default()
    }

    pub fn from_map(term_alternatives: HashMap<String, Vec<String>>) -> Self {
        ThesaurusExpander { term_alternatives }
    }

    /// Record alternatives for a term. Empty lists are ignored so that
    /// "no alternatives" and "an empty entry" stay indistinguishable.
    pub fn add_alternatives(&mut self, term: impl Into<String>, alternatives: Vec<String>) {
        if !alternatives.is_empty() {
            self.term_alternatives.insert(term.into(), alternatives);
        }
    }

    pub fn alternatives_for(&self, term: &str) -> &[String] {
        self.term_alternatives
            .get(term)
            .map_or(&[], Vec::as_slice)
    }

    /// Map each query term that has alternatives to its synonym list.
    /// Terms without an entry are left out.
    pub fn expand(&self, terms: &[String]) -> HashMap<String, Vec<String>> {
        let mut alternatives = HashMap::new();
        for term in terms {
            if let Some(syns) = self.term_alternatives.get(term) {
                alternatives.insert(term.clone(), syns.clone());
            }
        }
        alternatives
    }

    pub fn len(&self) -> usize {
        self.term_alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.term_alternatives.is_empty()
    }
}

#[derive(Deserialize)]
struct ThesaurusRecord {
    term: String,
    syns: Vec<String>,
}

/// Load a JSON Lines thesaurus. Lines whose `syns` list is empty are
/// skipped.
pub fn read_thesaurus(path: impl AsRef<Path>) -> io::Result<ThesaurusExpander> {
    let file = File::open(path)?;
    let mut expander = ThesaurusExpander::new();
    for (offset, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: ThesaurusRecord = serde_json::from_str(&line).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("thesaurus line {}: {}", offset + 1, err),
            )
        })?;
        expander.add_alternatives(record.term, record.syns);
    }
    Ok(expander)
}
