// domterm: domain terminology extraction
//
// This is the library root. A run reads every document in a folder, counts
// n-grams per document, scores them corpus-wide with TF-IDF under a
// document-frequency band, and writes the resolved terms as a term list.

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod terms;
