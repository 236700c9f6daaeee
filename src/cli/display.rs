// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sift CLI.
//!
//! Minimal ANSI styling with the usual escape hatches: colors only go out
//! when stdout is a TTY and `NO_COLOR` is unset, so piping results into
//! another tool yields clean text.

use sift::corpus::Corpus;
use sift::types::SearchResults;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const CYAN: &str = "\x1b[36m";

static USE_COLOR: OnceLock<bool> = OnceLock::new();

/// Whether to emit ANSI codes at all.
fn use_color() -> bool {
    *USE_COLOR
        .get_or_init(|| atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none())
}

/// Wrap `text` in style codes when the terminal wants them.
pub fn styled(text: &str, codes: &str) -> String {
    if use_color() {
        format!("{}{}{}", codes, text, RESET)
    } else {
        text.to_string()
    }
}

/// Render ranked results, one line per document. With a corpus at hand the
/// doc id is followed by the document's title (or a text prefix when the
/// record has no title).
pub fn format_results(results: &SearchResults, corpus: Option<&Corpus>) -> String {
    if results.is_empty() {
        return format!("{}\n", styled("no matches", DIM));
    }

    let mut out = String::new();
    for (rank, doc_id) in results.result_doc_ids.iter().enumerate() {
        out.push_str(&styled(&format!("{:>3}.", rank + 1), DIM));
        out.push(' ');
        out.push_str(&styled(doc_id, CYAN));
        if let Some(doc) = corpus.and_then(|corpus| corpus.get(doc_id)) {
            let title = match &doc.title {
                Some(title) => title.clone(),
                None => excerpt(&doc.text),
            };
            out.push_str("  ");
            out.push_str(&title);
        }
        out.push('\n');
    }
    out
}

/// First few words of a document, for corpora without titles.
fn excerpt(text: &str) -> String {
    const MAX_CHARS: usize = 60;
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(MAX_CHARS).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift::types::InputDocument;

    #[test]
    fn formats_plain_id_list() {
        let results = SearchResults {
            result_doc_ids: vec!["B".to_string(), "A".to_string()],
        };
        let rendered = format_results(&results, None);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1.") && lines[0].contains('B'));
        assert!(lines[1].contains("2.") && lines[1].contains('A'));
    }

    #[test]
    fn formats_titles_when_corpus_present() {
        let mut corpus = Corpus::new();
        corpus.insert(InputDocument {
            doc_id: "A".to_string(),
            text: "body".to_string(),
            title: Some("A Title".to_string()),
        });
        let results = SearchResults {
            result_doc_ids: vec!["A".to_string()],
        };
        let rendered = format_results(&results, Some(&corpus));
        assert!(rendered.contains("A Title"));
    }

    #[test]
    fn empty_results_say_so() {
        let rendered = format_results(&SearchResults::empty(), None);
        assert!(rendered.contains("no matches"));
    }

    #[test]
    fn excerpt_truncates_long_text() {
        let long = "word ".repeat(40);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert!(cut.chars().count() <= 64);
    }
}
