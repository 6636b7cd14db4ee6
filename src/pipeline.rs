// Extraction pipeline: folder of documents -> frequency tables -> TF-IDF -> term list.
//
// Everything is held in memory for the duration of the run. Any I/O or
// decoding failure aborts the whole run before the term list is written.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::config::Config;
use crate::corpus::{discover, document};
use crate::output::term_list;
use crate::terms::frequency::{self, CorpusIndex};
use crate::terms::tfidf::{self, ScoreReport};
use crate::terms::tokenizer::{self, Tokenizer};

/// Counts and paths describing a finished run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub documents: usize,
    pub distinct_ngrams: usize,
    pub resolved_terms: usize,
    pub retries: usize,
    pub output_path: PathBuf,
}

/// Everything a run produced.
#[derive(Debug)]
pub struct Extraction {
    pub summary: RunSummary,
    pub report: ScoreReport,
    /// Document names in scoring order; `ResolvedTerm::home` indexes into this.
    pub documents: Vec<String>,
}

impl Extraction {
    pub fn document_names(&self) -> Vec<&str> {
        self.documents.iter().map(String::as_str).collect()
    }
}

/// Run the extraction described by `config`, using the tokenizer it selects.
pub fn run(config: &Config) -> Result<Extraction> {
    let tokenizer = tokenizer::from_pattern(config.token_pattern.as_deref())?;
    run_with(config, tokenizer.as_ref())
}

/// Run the extraction with an explicit tokenizer.
pub fn run_with(config: &Config, tokenizer: &dyn Tokenizer) -> Result<Extraction> {
    config.validate()?;
    let band = config.band()?;

    // Step 1: Find the documents
    let paths = discover::find_documents(&config.input_dir)?;
    info!(
        folder = %config.input_dir.display(),
        documents = paths.len(),
        "Discovered documents"
    );

    // Step 2: Build one frequency table per document
    let index = build_index(&paths, config.max_ngram, tokenizer)?;
    let distinct_ngrams = index.distinct_ngrams();
    info!(distinct_ngrams, "Built frequency tables");

    // Step 3: Score
    let pb = progress_bar(index.len(), "  Scoring   [{bar:30}] {pos}/{len} ({eta})")?;
    let report = tfidf::score_detailed(&index, band, |_, _| pb.inc(1));
    pb.finish_and_clear();

    // Step 4: Write the term list (and optionally the scores)
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output folder {}",
            config.output_dir.display()
        )
    })?;
    let output_path = config
        .output_dir
        .join(term_list::output_file_name(&config.domain, band));
    let table: tfidf::TfIdfTable = report
        .terms
        .iter()
        .map(|(term, resolved)| (term.clone(), resolved.score))
        .collect();
    term_list::write_term_list(&output_path, &table)?;
    info!(path = %output_path.display(), terms = table.len(), "Wrote term list");

    let documents: Vec<String> = index.iter().map(|(name, _)| name.to_string()).collect();

    if let Some(scores_path) = &config.scores_json {
        let names: Vec<&str> = documents.iter().map(String::as_str).collect();
        term_list::write_scores_json(scores_path, &names, &report)?;
        info!(path = %scores_path.display(), "Wrote scores");
    }

    Ok(Extraction {
        summary: RunSummary {
            documents: index.len(),
            distinct_ngrams,
            resolved_terms: report.terms.len(),
            retries: report.retries,
            output_path,
        },
        report,
        documents,
    })
}

/// Read every document and count its n-grams, in the order given.
///
/// Two paths that map to the same document name (non-UTF-8 file names that
/// differ only in their invalid bytes) are an error.
pub fn build_index(
    paths: &[PathBuf],
    max_ngram: usize,
    tokenizer: &dyn Tokenizer,
) -> Result<CorpusIndex> {
    let mut index = CorpusIndex::new();

    let pb = progress_bar(paths.len(), "  Counting  [{bar:30}] {pos}/{len} ({eta})")?;
    for path in paths {
        let doc = document::read_document(path)?;
        if index.get(&doc.name).is_some() {
            anyhow::bail!(
                "Document {} has the same name as an earlier document ({:?}); \
                 rename one of them so both are scored",
                path.display(),
                doc.name
            );
        }
        let table = frequency::build(&doc.text, max_ngram, tokenizer);
        debug!(document = %doc.name, ngrams = table.len(), "Counted document");
        index.insert(doc.name, table);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(index)
}

fn progress_bar(len: usize, template: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(ProgressStyle::default_bar().template(template)?);
    Ok(pb)
}
