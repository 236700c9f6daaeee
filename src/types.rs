// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search engine.
//!
//! These types trace the two pipelines end to end: acquisition produces
//! [`InputDocument`]s, tokenization turns each into a [`TransformedDocument`],
//! indexing folds those into the inverted index, and at query time a parsed
//! [`Query`] comes in and [`SearchResults`] go out.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **InputDocument**: `doc_id` is unique within a corpus and opaque to the
//!   engine. It is only ever used as a map key.
//!
//! - **TransformedDocument**: `tokens.len()` is the document length that term
//!   frequencies are normalized by. It counts duplicates.
//!
//! - **Query**: `alternatives` may carry keys that never occur in `terms`;
//!   the matcher ignores them. A term with no entry behaves exactly like a
//!   term with an empty alternatives list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw document representation as produced by the text acquisition stage.
///
/// `title` is display metadata only; it never participates in indexing or
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDocument {
    pub doc_id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl InputDocument {
    pub fn new(doc_id: impl Into<String>, text: impl Into<String>) -> Self {
        InputDocument {
            doc_id: doc_id.into(),
            text: text.into(),
            title: None,
        }
    }
}

/// Document representation after tokenization, the input to the indexing
/// stage. Token order is preserved here but not in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformedDocument {
    pub doc_id: String,
    pub tokens: Vec<String>,
}

/// Structured query representation consumed by the matcher.
///
/// `terms` is the tokenized query in input order. `alternatives` maps a term
/// to synonym tokens, any one of which satisfies that term's slot in the
/// conjunction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub terms: Vec<String>,
    pub alternatives: HashMap<String, Vec<String>>,
    pub num_results: usize,
}

impl Query {
    /// A query with no expansion data.
    pub fn plain(terms: Vec<String>, num_results: usize) -> Self {
        Query {
            terms,
            alternatives: HashMap::new(),
            num_results,
        }
    }

    /// Alternatives for `term`, empty when none were supplied.
    pub fn alternatives_for(&self, term: &str) -> &[String] {
        self.alternatives.get(term).map_or(&[], Vec::as_slice)
    }
}

/// Ranked search output: doc ids in descending score order, at most
/// `num_results` of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub result_doc_ids: Vec<String>,
}

impl SearchResults {
    pub fn empty() -> Self {
        SearchResults::default()
    }

    pub fn is_empty(&self) -> bool {
        self.result_doc_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.result_doc_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternatives_for_missing_term_is_empty() {
        let query = Query::plain(vec!["word".to_string()], 10);
        assert!(query.alternatives_for("word").is_empty());
        assert!(query.alternatives_for("absent").is_empty());
    }

    #[test]
    fn alternatives_for_returns_supplied_list() {
        let mut alternatives = HashMap::new();
        alternatives.insert(
            "covid".to_string(),
            vec!["coronavirus".to_string(), "covid-19".to_string()],
        );
        let query = Query {
            terms: vec!["covid".to_string()],
            alternatives,
            num_results: 10,
        };
        assert_eq!(
            query.alternatives_for("covid"),
            ["coronavirus".to_string(), "covid-19".to_string()]
        );
    }

    #[test]
    fn input_document_parses_without_title() {
        let doc: InputDocument =
            serde_json::from_str(r#"{"doc_id": "a1", "text": "some text"}"#).unwrap();
        assert_eq!(doc.doc_id, "a1");
        assert_eq!(doc.title, None);
    }
}
