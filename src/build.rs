// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch indexing pipeline.
//!
//! Runs the build phase end to end: every corpus document is tokenized,
//! folded into a fresh [`InvertedIndex`], and the result is persisted as a
//! line-delimited JSON file. The CLI entry point wraps the fold in a
//! progress bar so large corpora don't look hung; [`index_corpus`] is the
//! bare pipeline for library callers and tests.

use crate::corpus::Corpus;
use crate::index::InvertedIndex;
use crate::jsonl::write_index;
use crate::tokenizer::tokenize;
use crate::types::{InputDocument, TransformedDocument};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;

/// Tokenize one document, binding the token stream to its id.
pub fn transform_document(doc: &InputDocument) -> TransformedDocument {
    TransformedDocument {
        doc_id: doc.doc_id.clone(),
        tokens: tokenize(&doc.text),
    }
}

/// Build an in-memory index over every document in the corpus.
pub fn index_corpus(corpus: &Corpus) -> InvertedIndex {
    let mut index = InvertedIndex::new();
    for doc in corpus {
        index.add_document(&transform_document(doc));
    }
    index
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<9} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .expect("progress template")
    .progress_chars("━━╸")
}

/// Index `corpus` with a progress bar and persist the result to
/// `index_path`. Returns the built index so callers can keep serving from
/// memory.
pub fn run_build(corpus: &Corpus, index_path: impl AsRef<Path>) -> io::Result<InvertedIndex> {
    let bar = ProgressBar::new(corpus.len() as u64);
    bar.set_style(progress_style());
    bar.set_prefix("Indexing");

    let mut index = InvertedIndex::new();
    for doc in corpus {
        index.add_document(&transform_document(doc));
        bar.inc(1);
    }
    bar.finish_with_message(format!(
        "{} documents, {} terms",
        index.num_documents(),
        index.term_count()
    ));

    write_index(&index, index_path)?;
    Ok(index)
}
