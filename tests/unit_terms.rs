// Unit tests for n-gram counting and TF-IDF scoring.
//
// Exercises the library API on in-memory corpora: n-gram counts, count
// conservation, the first-seen-wins resolution policy, the document-frequency
// band, and score bounds.

use domterm::terms::frequency::{build, CorpusIndex};
use domterm::terms::ngrams::ngram_count;
use domterm::terms::tfidf::{score, score_detailed, DocFreqBand};
use domterm::terms::tokenizer::{PatternTokenizer, Tokenizer, WordTokenizer};

fn corpus(docs: &[(&str, &str)], max_n: usize) -> CorpusIndex {
    let mut index = CorpusIndex::new();
    for (name, text) in docs {
        index.insert(*name, build(text, max_n, &WordTokenizer));
    }
    index
}

fn band(min: usize, max: usize) -> DocFreqBand {
    DocFreqBand::new(min, max).unwrap()
}

// ============================================================
// Frequency tables
// ============================================================

#[test]
fn ngram_total_matches_formula_per_line() {
    let line = "acute kidney injury after cardiac surgery";
    let tokens = WordTokenizer.tokenize(line);
    assert_eq!(tokens.len(), 6);

    for max_n in 1..=4 {
        let table = build(line, max_n, &WordTokenizer);
        assert_eq!(
            table.total() as usize,
            ngram_count(tokens.len(), max_n),
            "max_n={max_n}"
        );
    }
}

#[test]
fn unigram_counts_sum_to_token_count() {
    let text = "the court held that the appeal failed\n\nthe appeal was dismissed\n";
    let table = build(text, 3, &WordTokenizer);

    let unigram_total: u64 = table
        .iter()
        .filter(|(ngram, _)| !ngram.contains(' '))
        .map(|(_, count)| count)
        .sum();
    let token_total: usize = text
        .lines()
        .map(|line| WordTokenizer.tokenize(line.trim()).len())
        .sum();

    assert_eq!(unigram_total as usize, token_total);
    assert_eq!(table.get("the"), Some(3));
    assert_eq!(table.get("the appeal"), Some(2));
}

#[test]
fn every_count_is_positive() {
    let table = build("x y z\nx y\n\nz", 3, &WordTokenizer);
    assert!(!table.is_empty());
    assert!(table.iter().all(|(_, count)| count >= 1));
}

#[test]
fn short_line_still_contributes_lower_orders() {
    let table = build("one two", 3, &WordTokenizer);
    assert_eq!(table.len(), 3);
    assert!(table.contains("one two"));
}

#[test]
fn custom_tokenizer_is_used_per_line() {
    let tokenizer = PatternTokenizer::new(r"[a-z]+").unwrap();
    let table = build("a1b c\nc", 2, &tokenizer);
    assert_eq!(table.get("c"), Some(2));
    assert_eq!(table.get("a b"), Some(1));
    assert_eq!(table.get("b c"), Some(1));
}

// ============================================================
// Scoring scenarios
// ============================================================

#[test]
fn two_document_scenario() {
    let index = corpus(&[("A", "the cat sat"), ("B", "the dog sat")], 2);
    let report = score_detailed(&index, band(1, 2), |_, _| {});

    let the = &report.terms["the"];
    assert_eq!(the.home, 0);
    assert_eq!(the.doc_freq, 2);
    assert_eq!(the.term_freq, 1);
    assert_eq!(the.total_freq, 2);
    assert!((the.tf - 0.5).abs() < 1e-12);
    assert!((the.idf - (2.0f64 / 3.0).ln()).abs() < 1e-12);
    assert!((the.score - (-0.2027)).abs() < 1e-4);

    let cat = &report.terms["cat"];
    assert_eq!(cat.home, 0);
    assert_eq!(cat.doc_freq, 1);
    assert_eq!(cat.total_freq, 1);
    assert_eq!(cat.tf, 1.0);
    assert_eq!(cat.idf, 0.0);
    assert_eq!(cat.score, 0.0);

    let order: Vec<&str> = report.terms.keys().map(String::as_str).collect();
    assert_eq!(
        order,
        vec!["the", "cat", "sat", "the cat", "cat sat", "dog", "the dog", "dog sat"]
    );
}

#[test]
fn empty_corpus_scores_nothing() {
    assert!(score(&CorpusIndex::new(), band(1, 5)).is_empty());
}

#[test]
fn empty_documents_score_nothing() {
    let index = corpus(&[("a", ""), ("b", "\n\n")], 3);
    assert!(score(&index, band(1, 5)).is_empty());
}

#[test]
fn first_document_wins_for_shared_terms() {
    // "term" is twice as frequent in b, but a comes first, so a is its home.
    let index = corpus(&[("a", "term"), ("b", "term term")], 1);
    let report = score_detailed(&index, band(1, 5), |_, _| {});
    let term = &report.terms["term"];
    assert_eq!(term.home, 0);
    assert!((term.tf - 1.0 / 3.0).abs() < 1e-12);

    // Reversing document order changes the home and the score.
    let reversed = corpus(&[("b", "term term"), ("a", "term")], 1);
    let report = score_detailed(&reversed, band(1, 5), |_, _| {});
    assert!((report.terms["term"].tf - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn rescoring_the_same_index_is_stable() {
    let index = corpus(
        &[
            ("a", "renal failure\nacute renal failure"),
            ("b", "renal biopsy"),
            ("c", "acute care"),
        ],
        3,
    );
    let first = score(&index, band(1, 2));
    let second = score(&index, band(1, 2));
    assert_eq!(first, second);
    assert_eq!(
        first.keys().collect::<Vec<_>>(),
        second.keys().collect::<Vec<_>>()
    );
}

#[test]
fn resolved_terms_fall_inside_band() {
    let docs = [
        ("1", "alpha beta gamma"),
        ("2", "alpha beta"),
        ("3", "alpha delta"),
        ("4", "alpha gamma"),
        ("5", "epsilon"),
    ];
    let index = corpus(&docs, 2);
    let band = band(2, 3);
    let report = score_detailed(&index, band, |_, _| {});

    assert!(!report.terms.is_empty());
    for (term, resolved) in &report.terms {
        let actual_df = index.iter().filter(|(_, t)| t.contains(term)).count();
        assert_eq!(resolved.doc_freq, actual_df, "{term}");
        assert!(band.contains(resolved.doc_freq), "{term}");
    }
    // In all four of the first documents: above the band.
    assert!(!report.terms.contains_key("alpha"));
    // Only one document: below the band.
    assert!(!report.terms.contains_key("epsilon"));
    assert!(report.terms.contains_key("beta"));
}

#[test]
fn out_of_band_terms_are_rescanned_per_document() {
    let index = corpus(&[("a", "shared"), ("b", "shared"), ("c", "shared")], 1);
    let report = score_detailed(&index, band(1, 2), |_, _| {});
    assert!(report.terms.is_empty());
    assert_eq!(report.attempts, 3);
    assert_eq!(report.retries, 2);
}

#[test]
fn scores_are_bounded_for_rare_terms() {
    let docs: Vec<(String, String)> = (0..6)
        .map(|i| (format!("doc{i}"), format!("common unique{i} unique{i}")))
        .collect();
    let refs: Vec<(&str, &str)> = docs.iter().map(|(n, t)| (n.as_str(), t.as_str())).collect();
    let index = corpus(&refs, 1);
    let report = score_detailed(&index, band(1, 5), |_, _| {});

    for (term, resolved) in &report.terms {
        assert!(resolved.tf > 0.0 && resolved.tf <= 1.0, "{term}");
        if index.len() > resolved.doc_freq + 1 {
            assert!(resolved.idf > 0.0, "{term}");
            assert!(resolved.score > 0.0, "{term}");
        }
    }
    // Present in every document, so above the band.
    assert!(!report.terms.contains_key("common"));
    assert!((report.terms["unique3"].score - (6.0f64 / 2.0).ln()).abs() < 1e-12);
}
