// Corpus input: finding documents in a folder and reading them as text.

pub mod discover;
pub mod document;
