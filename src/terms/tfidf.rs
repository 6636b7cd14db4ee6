// Corpus TF-IDF scoring over per-document n-gram frequency tables.
//
// Resolution policy: documents are walked in index order and each document's
// n-grams in first-occurrence order. The first time an n-gram passes the
// document-frequency band it is scored relative to that "home" document and
// never revisited. An n-gram that fails the band is not marked, so it is
// rescanned from scratch whenever a later document contains it. Scores
// therefore depend on document order; the caller fixes that order.
//
//   tf  = count in home document / total count across the corpus
//   idf = ln(document count / (1 + document frequency))

use std::collections::HashSet;

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use super::frequency::CorpusIndex;

/// Term to score, in resolution order.
pub type TfIdfTable = IndexMap<String, f64>;

/// Inclusive document-frequency range an n-gram must fall in to be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocFreqBand {
    pub min: usize,
    pub max: usize,
}

impl DocFreqBand {
    /// Both bounds must be positive and `min <= max`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 {
            anyhow::bail!("Minimum document frequency must be at least 1");
        }
        if min > max {
            anyhow::bail!("Minimum document frequency ({min}) exceeds maximum ({max})");
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, doc_freq: usize) -> bool {
        self.min <= doc_freq && doc_freq <= self.max
    }
}

/// How an n-gram's score was derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTerm {
    /// Position of the home document in the corpus index.
    pub home: usize,
    /// Count in the home document.
    pub term_freq: u64,
    /// Count across all documents.
    pub total_freq: u64,
    /// Number of documents containing the n-gram.
    pub doc_freq: usize,
    pub tf: f64,
    pub idf: f64,
    pub score: f64,
}

/// Detailed scoring output.
#[derive(Debug, Clone, Default)]
pub struct ScoreReport {
    /// Resolved n-grams in resolution order.
    pub terms: IndexMap<String, ResolvedTerm>,
    /// Cross-document scans performed.
    pub attempts: usize,
    /// Scans of n-grams that had already failed the band on an earlier home.
    pub retries: usize,
}

impl ScoreReport {
    /// Collapse to the plain term-to-score table.
    pub fn into_table(self) -> TfIdfTable {
        self.terms
            .into_iter()
            .map(|(term, resolved)| (term, resolved.score))
            .collect()
    }
}

/// Score every n-gram in the corpus under `band`.
pub fn score(index: &CorpusIndex, band: DocFreqBand) -> TfIdfTable {
    score_detailed(index, band, |_, _| {}).into_table()
}

/// Score every n-gram in the corpus under `band`, keeping the derivation of
/// each score. `on_document` is called with each document's position and name
/// before its n-grams are processed.
pub fn score_detailed<F>(
    index: &CorpusIndex,
    band: DocFreqBand,
    mut on_document: F,
) -> ScoreReport
where
    F: FnMut(usize, &str),
{
    let total_documents = index.len();
    let mut report = ScoreReport::default();
    // N-grams that failed the band at least once. Feeds the `retries` count
    // only; resolution never consults it.
    let mut rejected: HashSet<&str> = HashSet::new();

    for (home, (name, table)) in index.iter().enumerate() {
        on_document(home, name);
        let resolved_before = report.terms.len();

        for (ngram, term_freq) in table.iter() {
            if report.terms.contains_key(ngram) {
                continue;
            }

            report.attempts += 1;
            if rejected.contains(ngram) {
                report.retries += 1;
            }

            let mut total_freq = term_freq;
            let mut doc_freq = 1usize;
            for (other, (_, other_table)) in index.iter().enumerate() {
                if other == home {
                    continue;
                }
                if let Some(count) = other_table.get(ngram) {
                    doc_freq += 1;
                    total_freq += count;
                }
            }

            if !band.contains(doc_freq) {
                rejected.insert(ngram);
                continue;
            }

            let tf = term_freq as f64 / total_freq as f64;
            let idf = (total_documents as f64 / (1 + doc_freq) as f64).ln();
            report.terms.insert(
                ngram.to_string(),
                ResolvedTerm {
                    home,
                    term_freq,
                    total_freq,
                    doc_freq,
                    tf,
                    idf,
                    score: tf * idf,
                },
            );
        }

        debug!(
            document = name,
            resolved = report.terms.len() - resolved_before,
            "Scored document"
        );
    }

    info!(
        documents = total_documents,
        resolved = report.terms.len(),
        attempts = report.attempts,
        retries = report.retries,
        "TF-IDF scoring complete"
    );

    report
}
