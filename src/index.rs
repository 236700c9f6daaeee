//! Inverted index construction and lookup.
//!
//! The index maps each term to the documents containing it, with the term
//! frequency already computed, so query-time work is pure map lookups plus
//! an IDF multiply. Postings are dictionaries keyed by doc id: candidate
//! intersection and synonym union in the matcher operate on key sets, which
//! is what makes the alternatives-aware search affordable.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NON_EMPTY**: every term present in `postings` has at least one entry.
//! 2. **TF_RANGE**: every stored frequency is in `(0, 1]`.
//! 3. **DOC_FREQ_CORRECT**: `doc_frequency[t] == postings[t].len()` for every
//!    term ever added.
//! 4. **DOC_COUNT_BOUND**: `num_documents >= doc_frequency[t]` for every term.
//!
//! The index is built by repeated [`InvertedIndex::add_document`] calls and
//! then frozen: at query time everything is a read.

use crate::scoring::term_frequency;
use crate::types::TransformedDocument;
use std::collections::HashMap;

/// Per-term postings: doc id to stored term frequency.
pub type Postings = HashMap<String, f64>;

/// The inverted index, final output of the indexing process and the only
/// data the query process consults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    num_documents: usize,
    postings: HashMap<String, Postings>,
    doc_frequency: HashMap<String, usize>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Reassemble an index from already-validated parts (the codec's read
    /// path). `doc_frequency` carries the persisted per-term counts.
    pub(crate) fn from_parts(
        num_documents: usize,
        postings: HashMap<String, Postings>,
        doc_frequency: HashMap<String, usize>,
    ) -> Self {
        InvertedIndex {
            num_documents,
            postings,
            doc_frequency,
        }
    }

    /// Fold one tokenized document into the index.
    ///
    /// Each distinct term gets its document count bumped and a postings entry
    /// `count / doc_len`. Documents tokenizing to nothing are skipped whole;
    /// adding the same `doc_id` twice is outside the contract (the second add
    /// overwrites the tf entries but still bumps the counters).
    pub fn add_document(&mut self, doc: &TransformedDocument) {
        if doc.tokens.is_empty() {
            return;
        }
        let mut term_counts: HashMap<&str, usize> = HashMap::new();
        for token in &doc.tokens {
            *term_counts.entry(token.as_str()).or_insert(0) += 1;
        }

        self.num_documents += 1;
        for (term, count) in term_counts {
            *self.doc_frequency.entry(term.to_string()).or_insert(0) += 1;
            self.postings
                .entry(term.to_string())
                .or_default()
                .insert(doc.doc_id.clone(), term_frequency(count, doc.tokens.len()));
        }
    }

    /// Count of documents added (or recorded in the file header).
    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Total (term, document) pairs across all postings.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(|postings| postings.len()).sum()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// The postings dictionary for `term`, if the term occurs anywhere.
    pub fn postings_for(&self, term: &str) -> Option<&Postings> {
        self.postings.get(term)
    }

    /// Number of distinct documents containing `term`; zero for unknown terms.
    pub fn doc_frequency_of(&self, term: &str) -> usize {
        self.doc_frequency.get(term).copied().unwrap_or(0)
    }

    /// Iterate over all indexed terms in unspecified order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }
}

/// Check that an index satisfies the module invariants (debug assertion).
#[cfg(any(debug_assertions, test))]
#[allow(dead_code)]
pub fn check_index_well_formed(index: &InvertedIndex) -> bool {
    for (term, postings) in &index.postings {
        // NON_EMPTY
        if postings.is_empty() {
            return false;
        }
        // TF_RANGE
        if postings.values().any(|&tf| tf <= 0.0 || tf > 1.0) {
            return false;
        }
        // DOC_FREQ_CORRECT
        if index.doc_frequency_of(term) != postings.len() {
            return false;
        }
        // DOC_COUNT_BOUND
        if index.num_documents < postings.len() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, tokens: &[&str]) -> TransformedDocument {
        TransformedDocument {
            doc_id: id.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample_index() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        index.add_document(&doc("A", &["alpha", "beta", "beta", "gamma"]));
        index.add_document(&doc("B", &["alpha", "alpha", "beta"]));
        index.add_document(&doc("C", &["gamma", "delta"]));
        index
    }

    #[test]
    fn counts_documents_and_frequencies() {
        let index = sample_index();
        assert_eq!(index.num_documents(), 3);
        assert_eq!(index.doc_frequency_of("alpha"), 2);
        assert_eq!(index.doc_frequency_of("beta"), 2);
        assert_eq!(index.doc_frequency_of("gamma"), 2);
        assert_eq!(index.doc_frequency_of("delta"), 1);
        assert_eq!(index.doc_frequency_of("zeta"), 0);
    }

    #[test]
    fn stores_normalized_term_frequencies() {
        let index = sample_index();
        let beta = index.postings_for("beta").unwrap();
        assert_eq!(beta["A"], 0.5); // 2 of 4 tokens
        assert_eq!(beta["B"], 1.0 / 3.0);
        let alpha = index.postings_for("alpha").unwrap();
        assert_eq!(alpha["A"], 0.25);
        assert_eq!(alpha["B"], 2.0 / 3.0);
    }

    #[test]
    fn unknown_term_has_no_postings() {
        let index = sample_index();
        assert!(!index.contains_term("zeta"));
        assert!(index.postings_for("zeta").is_none());
    }

    #[test]
    fn empty_document_is_skipped() {
        let mut index = InvertedIndex::new();
        index.add_document(&doc("E", &[]));
        assert_eq!(index.num_documents(), 0);
        assert_eq!(index.term_count(), 0);
    }

    #[test]
    fn posting_count_sums_all_pairs() {
        let index = sample_index();
        // alpha:2 + beta:2 + gamma:2 + delta:1
        assert_eq!(index.posting_count(), 7);
        assert_eq!(index.term_count(), 4);
    }

    #[test]
    fn built_index_is_well_formed() {
        assert!(check_index_well_formed(&sample_index()));
        assert!(check_index_well_formed(&InvertedIndex::new()));
    }
}
