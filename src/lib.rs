//! TF-IDF text search over JSON corpora.
//!
//! This crate is a small, self-contained search engine: a batch indexing
//! pipeline that folds a document corpus into a persistent inverted index,
//! and a query pipeline that ranks matching documents, optionally expanding
//! each term with synonyms. Matching is *conjunctive with alternatives*:
//! every query term must be satisfied, but any listed synonym of a term can
//! satisfy it.
//!
//! # Architecture
//!
//! ```text
//! indexing:                            querying:
//! ┌───────────┐   ┌───────────┐        ┌───────────┐   ┌───────────┐
//! │ corpus.rs │──▶│tokenizer.rs│──┐    │tokenizer.rs│──▶│ expand.rs │
//! │ (sources) │   │ (tokens)  │   │    │  (terms)  │    │ (synonyms)│
//! └───────────┘   └───────────┘   ▼    └───────────┘    └─────┬─────┘
//!                          ┌───────────┐                      ▼
//!                          │ index.rs  │◀──lookups──────┌───────────┐
//!                          │ (postings)│                │ search.rs │
//!                          └─────┬─────┘                │ (matcher) │
//!                                ▼                      └───────────┘
//!                          ┌───────────┐
//!                          │ jsonl.rs  │  line-delimited JSON on disk
//!                          └───────────┘
//! ```
//!
//! The index is built single-threaded, persisted, then loaded and treated
//! as read-only; every query-time operation is a pure read.
//!
//! # Usage
//!
//! ```ignore
//! use sift::{index_corpus, read_jsonl, QueryPipeline, ThesaurusExpander};
//!
//! let corpus = read_jsonl("corpus.jsonl")?;
//! let index = index_corpus(&corpus);
//! let pipeline = QueryPipeline::new(index, ThesaurusExpander::new());
//! let results = pipeline.run("coronavirus response", 10);
//! ```

// Module declarations
pub mod build;
pub mod corpus;
pub mod eval;
pub mod expand;
pub mod index;
pub mod jsonl;
pub mod query;
pub mod scoring;
pub mod search;
pub mod tokenizer;
pub mod types;

// Re-exports for public API
pub use build::{index_corpus, run_build, transform_document};
pub use corpus::{read_jsonl, read_wiki_json, Corpus};
pub use eval::{run_eval, EvalEntry};
pub use expand::{read_thesaurus, ThesaurusExpander};
pub use index::InvertedIndex;
pub use jsonl::{read_index, write_index};
pub use query::{QueryPipeline, DEFAULT_NUM_RESULTS};
pub use scoring::{inverse_document_frequency, term_frequency};
pub use search::search;
pub use tokenizer::tokenize;
pub use types::{InputDocument, Query, SearchResults, TransformedDocument};
