use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use domterm::config::Config;

/// domterm: extract a domain's characteristic terms from a folder of documents.
///
/// Counts 1..N-grams in every top-level file of INPUT_DIR, scores them with
/// TF-IDF under a document-frequency band, and writes the resolved terms to
/// `<DOMAIN>tf-idf-max-df-<MAX>-min-df-<MIN>.txt`.
#[derive(Parser)]
#[command(name = "domterm", version, about)]
struct Cli {
    /// Folder containing the documents (subfolders are ignored)
    input_dir: PathBuf,

    /// Domain label, used as the output file name prefix
    domain: String,

    /// Highest n-gram order to count (default: 3)
    #[arg(long)]
    max_ngram: Option<usize>,

    /// Minimum document frequency for a term to be scored (default: 1)
    #[arg(long)]
    min_df: Option<usize>,

    /// Maximum document frequency for a term to be scored (default: 5)
    #[arg(long)]
    max_df: Option<usize>,

    /// Tokenize with this regular expression instead of word boundaries
    #[arg(long)]
    token_pattern: Option<String>,

    /// Folder to write the term list into (default: current folder)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Also write every resolved term's score derivation to this JSON file
    #[arg(long)]
    scores_json: Option<PathBuf>,

    /// Number of top-scoring terms to print (default: 20)
    #[arg(long, default_value = "20")]
    top: usize,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("domterm=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.input_dir, cli.domain)?;
    if let Some(max_ngram) = cli.max_ngram {
        config.max_ngram = max_ngram;
    }
    if let Some(min_df) = cli.min_df {
        config.min_df = min_df;
    }
    if let Some(max_df) = cli.max_df {
        config.max_df = max_df;
    }
    if cli.token_pattern.is_some() {
        config.token_pattern = cli.token_pattern;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    config.scores_json = cli.scores_json;
    config.top_terms = cli.top;

    info!(
        max_ngram = config.max_ngram,
        min_df = config.min_df,
        max_df = config.max_df,
        "Extracting {} terms from {}",
        config.domain,
        config.input_dir.display()
    );

    let extraction = domterm::pipeline::run(&config)?;

    if config.top_terms > 0 {
        domterm::output::terminal::display_top_terms(
            &extraction.report,
            &extraction.document_names(),
            config.top_terms,
        );
    }
    domterm::output::terminal::display_summary(&extraction.summary);

    if extraction.summary.documents == 0 {
        println!(
            "{}",
            "No documents found; the term list is empty.".yellow()
        );
    }

    Ok(())
}
