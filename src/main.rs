// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sift CLI: build, inspect, search, and evaluate text search indexes.
//!
//! ```bash
//! # Build an index from a JSON Lines corpus
//! sift index --corpus corpus.jsonl --output index.jsonl
//!
//! # Poke at what was built
//! sift inspect index.jsonl
//!
//! # Interactive search, with synonym expansion and titles
//! sift search index.jsonl corpus.jsonl --synonyms thesaurus.jsonl
//!
//! # Score against human relevance judgements
//! sift eval index.jsonl queries.jsonl qrels.tsv --synonyms thesaurus.jsonl
//! ```

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;

use sift::build::run_build;
use sift::corpus::{read_jsonl, read_wiki_json, Corpus};
use sift::eval::run_eval;
use sift::jsonl::read_index;
use sift::query::QueryPipeline;

mod cli;
use cli::display::{format_results, styled, BOLD, DIM};
use cli::{Cli, Commands, CorpusFormat};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Index {
            corpus,
            format,
            output,
        } => build_command(&corpus, format, &output),
        Commands::Inspect { file } => inspect_command(&file),
        Commands::Search {
            index,
            corpus,
            format,
            synonyms,
            limit,
        } => search_command(&index, corpus.as_deref(), format, synonyms.as_deref(), limit),
        Commands::Eval {
            index,
            queries,
            judgements,
            synonyms,
            limit,
        } => eval_command(&index, &queries, &judgements, synonyms.as_deref(), limit),
    };

    if let Err(err) = outcome {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn read_corpus(path: &str, format: CorpusFormat) -> io::Result<Corpus> {
    match format {
        CorpusFormat::Wiki => read_wiki_json(path),
        CorpusFormat::Jsonl => read_jsonl(path),
    }
}

fn build_command(corpus_path: &str, format: CorpusFormat, output: &str) -> io::Result<()> {
    let corpus = read_corpus(corpus_path, format)?;
    if corpus.is_empty() {
        eprintln!("warning: corpus is empty; writing a header-only index");
    }
    let index = run_build(&corpus, output)?;
    println!(
        "wrote {} ({} documents, {} terms)",
        output,
        index.num_documents(),
        index.term_count()
    );
    Ok(())
}

fn inspect_command(path: &str) -> io::Result<()> {
    let index = read_index(path)?;
    println!("{}", styled(path, BOLD));
    println!("  documents  {}", index.num_documents());
    println!("  terms      {}", index.term_count());
    println!("  postings   {}", index.posting_count());
    Ok(())
}

fn search_command(
    index_path: &str,
    corpus_path: Option<&str>,
    format: CorpusFormat,
    synonyms: Option<&str>,
    limit: usize,
) -> io::Result<()> {
    let pipeline = QueryPipeline::load(index_path, synonyms.map(Path::new))?;
    let corpus = corpus_path
        .map(|path| read_corpus(path, format))
        .transpose()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", styled("query> ", DIM));
        io::stdout().flush()?;

        // EOF and a blank line both end the session.
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        let results = pipeline.run(query, limit);
        print!("{}", format_results(&results, corpus.as_ref()));
    }
    Ok(())
}

fn eval_command(
    index_path: &str,
    queries_path: &str,
    judgements_path: &str,
    synonyms: Option<&str>,
    limit: usize,
) -> io::Result<()> {
    let score = run_eval(
        index_path,
        queries_path,
        judgements_path,
        synonyms.map(Path::new),
        limit,
    )?;
    println!("total relevance score: {}", score);
    Ok(())
}
