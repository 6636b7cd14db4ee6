use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::terms::tfidf::DocFreqBand;

/// Default maximum n-gram order.
pub const DEFAULT_MAX_NGRAM: usize = 3;
/// Default document-frequency band.
pub const DEFAULT_MIN_DF: usize = 1;
pub const DEFAULT_MAX_DF: usize = 5;

/// Run configuration.
///
/// Tuning values come from environment variables (a .env file is loaded at
/// startup via dotenvy) and may then be overridden from the command line.
/// With nothing set, the defaults reproduce the fixed parameters of the
/// classic run: trigrams and a [1, 5] document-frequency band.
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder whose top-level files are the documents
    pub input_dir: PathBuf,
    /// Domain label, used as the output file name prefix
    pub domain: String,
    /// Highest n-gram order to count (DOMTERM_MAX_NGRAM)
    pub max_ngram: usize,
    /// Inclusive document-frequency band bounds (DOMTERM_MIN_DF, DOMTERM_MAX_DF)
    pub min_df: usize,
    pub max_df: usize,
    /// Regex tokenizer pattern; word tokenizer when unset (DOMTERM_TOKEN_PATTERN)
    pub token_pattern: Option<String>,
    /// Where the term list is written (DOMTERM_OUTPUT_DIR, defaults to ".")
    pub output_dir: PathBuf,
    /// Optional JSON export of every resolved term's score
    pub scores_json: Option<PathBuf>,
    /// How many top terms to print after the run
    pub top_terms: usize,
}

impl Config {
    /// Load configuration from environment variables for the given input
    /// folder and domain.
    pub fn load(input_dir: impl Into<PathBuf>, domain: impl Into<String>) -> Result<Self> {
        Ok(Self {
            input_dir: input_dir.into(),
            domain: domain.into(),
            max_ngram: env_usize("DOMTERM_MAX_NGRAM")?.unwrap_or(DEFAULT_MAX_NGRAM),
            min_df: env_usize("DOMTERM_MIN_DF")?.unwrap_or(DEFAULT_MIN_DF),
            max_df: env_usize("DOMTERM_MAX_DF")?.unwrap_or(DEFAULT_MAX_DF),
            token_pattern: env::var("DOMTERM_TOKEN_PATTERN")
                .ok()
                .filter(|p| !p.is_empty()),
            output_dir: env::var("DOMTERM_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            scores_json: None,
            top_terms: 20,
        })
    }

    /// Check that the tuning values describe a runnable configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_ngram == 0 {
            anyhow::bail!("Maximum n-gram order must be at least 1");
        }
        self.band()?;
        Ok(())
    }

    /// The document-frequency band.
    pub fn band(&self) -> Result<DocFreqBand> {
        DocFreqBand::new(self.min_df, self.max_df)
    }
}

/// Parse an optional numeric environment variable. Unset or empty is `None`;
/// anything else must be a non-negative integer.
fn env_usize(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a non-negative integer, got {raw:?}")),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{name} is not valid unicode")),
    }
}
