// Per-document n-gram frequency tables and the corpus-wide index over them.
//
// A FrequencyTable counts every n-gram of order 1..=N found in one document.
// Keys keep first-occurrence order, which is the order the scorer walks them
// in. The CorpusIndex keeps documents in insertion order for the same reason:
// scoring results depend on both orders.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::ngrams::ngrams_up_to;
use super::tokenizer::Tokenizer;

/// Occurrence counts of n-grams within a single document.
///
/// Every stored count is at least 1. The table is only populated by
/// [`build`], so it cannot be changed once handed out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
}

impl FrequencyTable {
    /// Occurrence count of `ngram`, or `None` if it never occurs.
    pub fn get(&self, ngram: &str) -> Option<u64> {
        self.counts.get(ngram).copied()
    }

    pub fn contains(&self, ngram: &str) -> bool {
        self.counts.contains_key(ngram)
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    fn add(&mut self, ngram: String) {
        *self.counts.entry(ngram).or_insert(0) += 1;
    }
}

/// Build the frequency table for one document.
///
/// Each line is trimmed and tokenized on its own, so n-grams never span a line
/// break. `\n`, `\r\n` and a lone `\r` all end a line. All orders from 1 to
/// `max_n` are counted into the same table.
pub fn build<T>(text: &str, max_n: usize, tokenizer: &T) -> FrequencyTable
where
    T: Tokenizer + ?Sized,
{
    let mut table = FrequencyTable::default();
    // A \r\n pair leaves an empty piece between the two, which is skipped below.
    for line in text.split(['\n', '\r']) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let tokens = tokenizer.tokenize(line);
        for ngram in ngrams_up_to(&tokens, max_n) {
            table.add(ngram);
        }
    }
    table
}

/// Frequency tables for the whole corpus, keyed by document name.
///
/// Iteration order is insertion order, i.e. the order documents were read.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    documents: IndexMap<String, FrequencyTable>,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document's table. A second document with the same name replaces
    /// the first table but keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, table: FrequencyTable) {
        self.documents.insert(name.into(), table);
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FrequencyTable> {
        self.documents.get(name)
    }

    /// Name of the document at `index` in iteration order.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.documents.get_index(index).map(|(name, _)| name.as_str())
    }

    /// Documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyTable)> + '_ {
        self.documents.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct n-grams across every document.
    pub fn distinct_ngrams(&self) -> usize {
        let mut seen: HashSet<&str> = HashSet::new();
        for table in self.documents.values() {
            seen.extend(table.counts.keys().map(String::as_str));
        }
        seen.len()
    }
}
