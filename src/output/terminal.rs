// Colored terminal output for run summaries and top-scoring terms.
//
// The term list file is the real output; this is what a person reads to sanity
// check whether the extracted vocabulary looks like the domain.

use colored::Colorize;

use super::truncate_chars;
use crate::pipeline::RunSummary;
use crate::terms::tfidf::{ResolvedTerm, ScoreReport};

/// Display counts for a finished run.
pub fn display_summary(summary: &RunSummary) {
    println!("\n{}", "=== Term Extraction Summary ===".bold());
    println!("  Documents:          {}", summary.documents);
    println!("  Distinct n-grams:   {}", summary.distinct_ngrams);
    println!("  Resolved terms:     {}", summary.resolved_terms);
    if summary.retries > 0 {
        println!(
            "  Band re-scans:      {}",
            summary.retries.to_string().dimmed()
        );
    }
    println!(
        "\n{}",
        format!("Term list saved to: {}", summary.output_path.display()).bold()
    );
}

/// Display the `limit` highest-scoring terms, highest first.
///
/// `documents` maps each term's home index back to a document name.
pub fn display_top_terms(report: &ScoreReport, documents: &[&str], limit: usize) {
    if report.terms.is_empty() {
        println!("No terms fell inside the document-frequency band.");
        return;
    }

    let mut ranked: Vec<(&String, &ResolvedTerm)> = report.terms.iter().collect();
    ranked.sort_by(|a, b| {
        b.1.score
            .partial_cmp(&a.1.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    println!(
        "\n{}",
        format!("=== Top {} Terms ===", limit.min(ranked.len())).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<36} {:>8}  {:>3}  {:<24}",
        "Rank".dimmed(),
        "Term".dimmed(),
        "Score".dimmed(),
        "DF".dimmed(),
        "Home".dimmed(),
    );
    println!("  {}", "-".repeat(80).dimmed());

    for (i, (term, resolved)) in ranked.into_iter().take(limit).enumerate() {
        let home = documents.get(resolved.home).copied().unwrap_or("?");
        let score = format!("{:>8.4}", resolved.score);
        let colored_score = if resolved.score > 0.0 {
            score.green()
        } else if resolved.score < 0.0 {
            score.red()
        } else {
            score.normal()
        };

        println!(
            "  {:>4}. {:<36} {}  {:>3}  {:<24}",
            i + 1,
            truncate_chars(term, 33),
            colored_score,
            resolved.doc_freq,
            truncate_chars(home, 21).dimmed(),
        );
    }

    println!();
}
