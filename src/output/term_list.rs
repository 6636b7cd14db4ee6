// Term list serialization.
//
// The term list holds the resolved n-grams only, one per line, in resolution
// order. Lines are joined with '\n' and no trailing newline is added.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;

use crate::terms::tfidf::{DocFreqBand, ResolvedTerm, ScoreReport, TfIdfTable};

/// File name for a domain's term list: `<domain>tf-idf-max-df-<max>-min-df-<min>.txt`.
pub fn output_file_name(domain: &str, band: DocFreqBand) -> String {
    format!("{domain}tf-idf-max-df-{}-min-df-{}.txt", band.max, band.min)
}

/// Render the term list contents.
pub fn render_term_list(table: &TfIdfTable) -> String {
    table.keys().map(String::as_str).collect::<Vec<_>>().join("\n")
}

/// Write the term list for `table` to `path`, replacing any existing file.
pub fn write_term_list(path: &Path, table: &TfIdfTable) -> Result<()> {
    fs::write(path, render_term_list(table))
        .with_context(|| format!("Failed to write term list {}", path.display()))
}

#[derive(Serialize)]
struct ScoresExport<'a> {
    documents: Vec<&'a str>,
    terms: &'a IndexMap<String, ResolvedTerm>,
}

/// Write every resolved term with its score derivation as pretty JSON.
///
/// `documents` maps the `home` index of each term back to a document name.
pub fn write_scores_json(path: &Path, documents: &[&str], report: &ScoreReport) -> Result<()> {
    let export = ScoresExport {
        documents: documents.to_vec(),
        terms: &report.terms,
    };
    let json = serde_json::to_string_pretty(&export)
        .with_context(|| format!("Failed to serialize scores for {}", path.display()))?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write scores file {}", path.display()))
}
