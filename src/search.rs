//! Query matching and ranking.
//!
//! The matching rule is *conjunctive with alternatives*: every query term
//! must be present in a result document, but any synonym listed for a term
//! can stand in for it. Candidate selection therefore intersects, across
//! terms, the union of posting keys over each term's group (the term plus
//! its alternatives). The moment one group matches nothing the whole query
//! matches nothing, and we return early.
//!
//! Scoring then sums `tf * idf` over the surviving candidates for every
//! surface form in the query. Original terms always contribute, once per
//! occurrence in the query. Alternatives contribute at most once across the
//! entire query: when two different terms list the same synonym, a single
//! "already scored" set keeps it from being counted twice.

use crate::index::InvertedIndex;
use crate::scoring::inverse_document_frequency;
use crate::types::{Query, SearchResults};
use std::collections::{HashMap, HashSet};

/// Run `query` against a frozen index and return ranked doc ids.
///
/// Degenerate queries (no terms, zero results requested, a group that
/// matches nothing anywhere) produce empty results, never errors.
pub fn search(index: &InvertedIndex, query: &Query) -> SearchResults {
    if query.terms.is_empty() || query.num_results == 0 {
        return SearchResults::empty();
    }

    // Candidate selection. One group per term position; alternatives are
    // looked up per position, so a repeated term tightens nothing but still
    // intersects.
    let mut candidates: Option<HashSet<&str>> = None;
    for term in &query.terms {
        let mut group_matches: HashSet<&str> = HashSet::new();
        collect_doc_ids(index, term, &mut group_matches);
        for alternative in query.alternatives_for(term) {
            collect_doc_ids(index, alternative, &mut group_matches);
        }

        let narrowed = match candidates {
            None => group_matches,
            Some(previous) => previous.intersection(&group_matches).copied().collect(),
        };
        if narrowed.is_empty() {
            return SearchResults::empty();
        }
        candidates = Some(narrowed);
    }
    let candidates = candidates.unwrap_or_default();

    // Accumulate TF-IDF contributions per candidate.
    let mut scores: HashMap<&str, f64> = candidates.iter().map(|&id| (id, 0.0)).collect();
    let mut scored_alternatives: HashSet<&str> = HashSet::new();
    for term in &query.terms {
        score_term(index, term, &candidates, &mut scores);
        for alternative in query.alternatives_for(term) {
            // One contribution per surface form across the whole query.
            if scored_alternatives.insert(alternative.as_str()) {
                score_term(index, alternative, &candidates, &mut scores);
            }
        }
    }

    // Rank by score descending; doc id ascending breaks ties so output is
    // deterministic.
    let mut ranked: Vec<(&str, f64)> = scores.into_iter().collect();
    ranked.sort_by(|(id_a, score_a), (id_b, score_b)| {
        score_b.total_cmp(score_a).then_with(|| id_a.cmp(id_b))
    });
    ranked.truncate(query.num_results);

    SearchResults {
        result_doc_ids: ranked.into_iter().map(|(id, _)| id.to_string()).collect(),
    }
}

/// Union the doc ids containing `term` into `into`. Unknown terms add
/// nothing.
fn collect_doc_ids<'index>(
    index: &'index InvertedIndex,
    term: &str,
    into: &mut HashSet<&'index str>,
) {
    if let Some(postings) = index.postings_for(term) {
        into.extend(postings.keys().map(String::as_str));
    }
}

/// Add `term`'s TF-IDF contribution to every candidate containing it.
///
/// Terms that occur nowhere are skipped before IDF is computed, so the
/// `ln(N / df)` ratio never sees a zero denominator.
fn score_term<'a>(
    index: &InvertedIndex,
    term: &str,
    candidates: &HashSet<&'a str>,
    scores: &mut HashMap<&'a str, f64>,
) {
    let df = index.doc_frequency_of(term);
    if df == 0 {
        return;
    }
    let idf = inverse_document_frequency(df, index.num_documents());
    let Some(postings) = index.postings_for(term) else {
        return;
    };
    for doc_id in candidates {
        if let (Some(tf), Some(score)) = (postings.get(*doc_id), scores.get_mut(doc_id)) {
            *score += tf * idf;
        }
    }
}
