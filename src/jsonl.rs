// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk index format: line-delimited JSON.
//!
//! A persisted index is a UTF-8 text file with one JSON value per line. The
//! first line is a header carrying the document count; every following line
//! is one term record:
//!
//! ```text
//! {"number_of_documents": 3}
//! {"term": "alpha", "documents_count": 2, "index": {"A": 0.25, "B": 0.6666666666666666}}
//! {"term": "beta",  "documents_count": 2, "index": {"A": 0.5,  "B": 0.3333333333333333}}
//! ```
//!
//! Terms are written in lexicographic order and doc ids sorted within each
//! record, so rebuilding the same corpus produces a byte-identical file.
//! Readers additionally accept the older list-shaped postings,
//! `"index": [{"doc_id": "A", "tf": 0.25}, ...]`, with identical semantics.
//!
//! Writing truncates and rewrites the whole file; reading loads it fully.
//! Malformed content surfaces as `io::ErrorKind::InvalidData` carrying the
//! offending line number, and the partially-read index is discarded by the
//! caller along with the error.

use crate::index::{InvertedIndex, Postings};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// First line of every index file.
#[derive(Debug, Serialize, Deserialize)]
struct Header {
    number_of_documents: usize,
}

/// One line per indexed term.
#[derive(Debug, Serialize, Deserialize)]
struct TermRecord {
    term: String,
    documents_count: usize,
    index: PostingsShape,
}

/// The two accepted postings encodings. The map keyed by doc id is what we
/// write; the pair list is the legacy shape kept readable.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum PostingsShape {
    ByDocId(BTreeMap<String, f64>),
    Pairs(Vec<PostingPair>),
}

#[derive(Debug, Serialize, Deserialize)]
struct PostingPair {
    doc_id: String,
    tf: f64,
}

impl PostingsShape {
    fn into_postings(self) -> Postings {
        match self {
            PostingsShape::ByDocId(map) => map.into_iter().collect(),
            PostingsShape::Pairs(pairs) => pairs
                .into_iter()
                .map(|pair| (pair.doc_id, pair.tf))
                .collect(),
        }
    }
}

fn malformed(line_number: usize, err: &serde_json::Error) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("index file line {}: {}", line_number, err),
    )
}

/// Persist `index` to `path`, replacing whatever was there.
pub fn write_index(index: &InvertedIndex, path: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    let header = Header {
        number_of_documents: index.num_documents(),
    };
    serde_json::to_writer(&mut out, &header)?;
    out.write_all(b"\n")?;

    let mut terms: Vec<&str> = index.terms().collect();
    terms.sort_unstable();
    for term in terms {
        // postings_for is total over terms(); the empty fallback never fires
        // for a well-formed index.
        let postings = index.postings_for(term).cloned().unwrap_or_default();
        let record = TermRecord {
            term: term.to_string(),
            documents_count: index.doc_frequency_of(term),
            index: PostingsShape::ByDocId(postings.into_iter().collect()),
        };
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Load an index previously produced by [`write_index`] (or by the legacy
/// list-shaped writer).
pub fn read_index(path: impl AsRef<Path>) -> io::Result<InvertedIndex> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header_line = lines.next().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "index file is missing its header line")
    })??;
    let header: Header =
        serde_json::from_str(&header_line).map_err(|err| malformed(1, &err))?;

    let mut postings: HashMap<String, Postings> = HashMap::new();
    let mut doc_frequency: HashMap<String, usize> = HashMap::new();
    for (offset, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: TermRecord =
            serde_json::from_str(&line).map_err(|err| malformed(offset + 2, &err))?;
        doc_frequency.insert(record.term.clone(), record.documents_count);
        postings.insert(record.term, record.index.into_postings());
    }

    Ok(InvertedIndex::from_parts(
        header.number_of_documents,
        postings,
        doc_frequency,
    ))
}
