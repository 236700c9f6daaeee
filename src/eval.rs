// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance evaluation harness.
//!
//! Scores the engine against human judgements: run every test query through
//! the query pipeline, look up each returned doc id in the judgement table,
//! and sum the relevance values. Documents the assessors never rated count
//! as zero. Queries live in a JSON Lines file
//! (`{"_id": "...", "metadata": {"query": "..."}}`); judgements are TSV
//! rows of `query_id doc_id relevance` with a header line.

use crate::query::QueryPipeline;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One judged (query, document) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalEntry {
    pub query_id: u64,
    pub doc_id: String,
    pub relevance: i64,
}

#[derive(Deserialize)]
struct QueryRecord {
    #[serde(rename = "_id")]
    id: String,
    metadata: QueryMetadata,
}

#[derive(Deserialize)]
struct QueryMetadata {
    query: String,
}

fn invalid(line_number: usize, what: &str, detail: impl std::fmt::Display) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("{} line {}: {}", what, line_number, detail),
    )
}

/// Read test queries as `(query_id, query_string)` pairs in file order.
pub fn read_queries(path: impl AsRef<Path>) -> io::Result<Vec<(u64, String)>> {
    let file = File::open(path)?;
    let mut queries = Vec::new();
    for (offset, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: QueryRecord =
            serde_json::from_str(&line).map_err(|err| invalid(offset + 1, "queries", err))?;
        let id = record
            .id
            .parse::<u64>()
            .map_err(|err| invalid(offset + 1, "queries", err))?;
        queries.push((id, record.metadata.query));
    }
    Ok(queries)
}

/// Read the judgement TSV. The first line is a header and is skipped.
pub fn read_judgements(path: impl AsRef<Path>) -> io::Result<Vec<EvalEntry>> {
    let file = File::open(path)?;
    let mut entries = Vec::new();
    for (offset, line) in BufReader::new(file).lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(query_id), Some(doc_id), Some(relevance)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid(offset + 1, "judgements", "expected 3 fields"));
        };
        entries.push(EvalEntry {
            query_id: query_id
                .parse()
                .map_err(|err| invalid(offset + 1, "judgements", err))?,
            doc_id: doc_id.to_string(),
            relevance: relevance
                .parse()
                .map_err(|err| invalid(offset + 1, "judgements", err))?,
        });
    }
    Ok(entries)
}

/// Run every query and collect its result ids, keyed in file order.
pub fn run_queries(
    queries: &[(u64, String)],
    pipeline: &QueryPipeline,
    num_results: usize,
) -> Vec<(u64, Vec<String>)> {
    queries
        .iter()
        .map(|(query_id, query_string)| {
            (
                *query_id,
                pipeline.run(query_string, num_results).result_doc_ids,
            )
        })
        .collect()
}

/// Sum the relevance of every returned document. Unjudged documents are
/// worth zero; when a pair is judged more than once, the first row in the
/// file wins.
pub fn score_results(results: &[(u64, Vec<String>)], judgements: &[EvalEntry]) -> i64 {
    let mut reference: HashMap<(u64, &str), i64> = HashMap::new();
    for entry in judgements {
        reference
            .entry((entry.query_id, entry.doc_id.as_str()))
            .or_insert(entry.relevance);
    }

    results
        .iter()
        .flat_map(|(query_id, doc_ids)| {
            doc_ids
                .iter()
                .map(|doc_id| reference.get(&(*query_id, doc_id.as_str())).copied().unwrap_or(0))
        })
        .sum()
}

/// Whole evaluation in one call: load everything, run the queries, report
/// the total relevance score.
pub fn run_eval(
    index_path: impl AsRef<Path>,
    queries_path: impl AsRef<Path>,
    judgements_path: impl AsRef<Path>,
    thesaurus_path: Option<&Path>,
    num_results: usize,
) -> io::Result<i64> {
    let pipeline = QueryPipeline::load(index_path, thesaurus_path)?;
    let queries = read_queries(queries_path)?;
    let judgements = read_judgements(judgements_path)?;
    let results = run_queries(&queries, &pipeline, num_results);
    Ok(score_results(&results, &judgements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::index_corpus;
    use crate::corpus::Corpus;
    use crate::types::InputDocument;

    #[test]
    fn reads_queries_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queries.jsonl");
        std::fs::write(
            &path,
            "{\"_id\": \"7\", \"metadata\": {\"query\": \"alpha beta\"}}\n\
             {\"_id\": \"2\", \"metadata\": {\"query\": \"gamma\"}}\n",
        )
        .unwrap();
        let queries = read_queries(&path).unwrap();
        assert_eq!(
            queries,
            [(7, "alpha beta".to_string()), (2, "gamma".to_string())]
        );
    }

    #[test]
    fn reads_judgements_skipping_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qrels.tsv");
        std::fs::write(
            &path,
            "query-id\tcorpus-id\tscore\n7\tA\t2\n7\tB\t1\n2\tC\t1\n",
        )
        .unwrap();
        let judgements = read_judgements(&path).unwrap();
        assert_eq!(judgements.len(), 3);
        assert_eq!(
            judgements[0],
            EvalEntry {
                query_id: 7,
                doc_id: "A".to_string(),
                relevance: 2,
            }
        );
    }

    #[test]
    fn scores_sum_relevance_of_returned_docs() {
        let judgements = vec![
            EvalEntry {
                query_id: 1,
                doc_id: "A".to_string(),
                relevance: 2,
            },
            EvalEntry {
                query_id: 1,
                doc_id: "B".to_string(),
                relevance: 1,
            },
            EvalEntry {
                query_id: 2,
                doc_id: "A".to_string(),
                relevance: 1,
            },
        ];
        // Query 1 returned a judged and an unjudged doc; query 2 returned
        // a doc judged only under query 1.
        let results = vec![
            (1, vec!["A".to_string(), "X".to_string()]),
            (2, vec!["B".to_string()]),
        ];
        assert_eq!(score_results(&results, &judgements), 2);
    }

    #[test]
    fn duplicate_judgement_rows_keep_the_first() {
        let judgements = vec![
            EvalEntry {
                query_id: 1,
                doc_id: "A".to_string(),
                relevance: 2,
            },
            EvalEntry {
                query_id: 1,
                doc_id: "A".to_string(),
                relevance: 1,
            },
        ];
        let results = vec![(1, vec!["A".to_string()])];
        assert_eq!(score_results(&results, &judgements), 2);
    }

    #[test]
    fn end_to_end_eval_scores_matching_docs() {
        let dir = tempfile::tempdir().unwrap();

        let mut corpus = Corpus::new();
        corpus.insert(InputDocument::new("A", "alpha beta beta"));
        corpus.insert(InputDocument::new("B", "gamma delta"));
        let index = index_corpus(&corpus);
        let index_path = dir.path().join("index.jsonl");
        crate::jsonl::write_index(&index, &index_path).unwrap();

        let queries_path = dir.path().join("queries.jsonl");
        std::fs::write(
            &queries_path,
            "{\"_id\": \"1\", \"metadata\": {\"query\": \"alpha beta\"}}\n",
        )
        .unwrap();

        let judgements_path = dir.path().join("qrels.tsv");
        std::fs::write(&judgements_path, "query-id\tcorpus-id\tscore\n1\tA\t2\n").unwrap();

        let score = run_eval(&index_path, &queries_path, &judgements_path, None, 10).unwrap();
        assert_eq!(score, 2);
    }
}
