// Tokenizer trait: swap-ready abstraction over word splitting.
//
// The frequency builder only needs "a line in, a sequence of word-level
// tokens out". The default splits on Unicode word boundaries and keeps
// punctuation marks as their own tokens; a regex-driven tokenizer is available
// for corpora where a custom token shape works better.

use anyhow::{Context, Result};
use regex_lite::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Trait for turning one line of text into word-level tokens.
pub trait Tokenizer {
    /// Split a single (already trimmed) line into tokens, in reading order.
    fn tokenize(&self, line: &str) -> Vec<String>;
}

/// Default tokenizer: Unicode word-boundary segmentation (UAX #29).
///
/// Words such as `don't` or `3.14` stay whole, punctuation becomes a separate
/// token, and whitespace is discarded. Case is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        line.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Tokenizer that treats every match of a regular expression as a token.
#[derive(Debug, Clone)]
pub struct PatternTokenizer {
    pattern: Regex,
}

impl PatternTokenizer {
    /// Compile `pattern` into a tokenizer.
    ///
    /// Patterns that can match the empty string are rejected, since they would
    /// produce empty tokens between every character.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid token pattern: {pattern:?}"))?;
        if regex.is_match("") {
            anyhow::bail!("Token pattern {pattern:?} matches the empty string");
        }
        Ok(Self { pattern: regex })
    }
}

impl Tokenizer for PatternTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        self.pattern
            .find_iter(line)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Build the tokenizer selected by configuration: the pattern tokenizer when a
/// pattern is set, the word tokenizer otherwise.
pub fn from_pattern(pattern: Option<&str>) -> Result<Box<dyn Tokenizer>> {
    match pattern {
        Some(p) => Ok(Box::new(PatternTokenizer::new(p)?)),
        None => Ok(Box::new(WordTokenizer)),
    }
}
