// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document acquisition.
//!
//! Two corpus layouts are supported, matching the datasets the engine is
//! used with:
//!
//! - a single JSON array of `{"id", "init_text"}` records, and
//! - JSON Lines, one `{"_id", "text"}` object per line with an optional
//!   `"title"` carried through for result display.
//!
//! Both produce a [`Corpus`]: an insertion-ordered collection of
//! [`InputDocument`]s with id lookup. Inserting a duplicate id replaces the
//! earlier document, mirroring a keyed store.

use crate::types::InputDocument;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// In-memory document collection, the output of text acquisition.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<InputDocument>,
    by_id: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Corpus::default()
    }

    /// Add a document, replacing any earlier one with the same id.
    pub fn insert(&mut self, doc: InputDocument) {
        match self.by_id.get(&doc.doc_id) {
            Some(&slot) => self.docs[slot] = doc,
            None => {
                self.by_id.insert(doc.doc_id.clone(), self.docs.len());
                self.docs.push(doc);
            }
        }
    }

    pub fn get(&self, doc_id: &str) -> Option<&InputDocument> {
        self.by_id.get(doc_id).map(|&slot| &self.docs[slot])
    }

    /// Documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &InputDocument> {
        self.docs.iter()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl<'corpus> IntoIterator for &'corpus Corpus {
    type Item = &'corpus InputDocument;
    type IntoIter = std::slice::Iter<'corpus, InputDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

#[derive(Deserialize)]
struct WikiRecord {
    id: String,
    init_text: String,
}

#[derive(Deserialize)]
struct JsonLinesRecord {
    #[serde(rename = "_id")]
    id: String,
    text: String,
    #[serde(default)]
    title: Option<String>,
}

/// Read a corpus stored as one JSON array of `{"id", "init_text"}` records.
pub fn read_wiki_json(path: impl AsRef<Path>) -> io::Result<Corpus> {
    let file = File::open(path)?;
    let records: Vec<WikiRecord> = serde_json::from_reader(BufReader::new(file))
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, format!("corpus: {}", err)))?;

    let mut corpus = Corpus::new();
    for record in records {
        corpus.insert(InputDocument::new(record.id, record.init_text));
    }
    Ok(corpus)
}

/// Read a corpus stored as JSON Lines with `_id`/`text`/optional `title`.
pub fn read_jsonl(path: impl AsRef<Path>) -> io::Result<Corpus> {
    let file = File::open(path)?;
    let mut corpus = Corpus::new();
    for (offset, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: JsonLinesRecord = serde_json::from_str(&line).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("corpus line {}: {}", offset + 1, err),
            )
        })?;
        corpus.insert(InputDocument {
            doc_id: record.id,
            text: record.text,
            title: record.title,
        });
    }
    Ok(corpus)
}
