// Term extraction: tokenization, n-gram counting, and TF-IDF scoring.

pub mod frequency;
pub mod ngrams;
pub mod tfidf;
pub mod tokenizer;
