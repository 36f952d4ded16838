//! Classify every chapter of a corpus as war- or peace-related.
//!
//! Usage:
//!   cargo run --bin warpeace -- --corpus book.txt --war-terms war.txt \
//!       --peace-terms peace.txt --expected expected.txt
//!
//! Output (stdout and --output file): one line per chapter,
//! "Chapter <n>: <war|peace>-related", then "Similarity: NN.NN%" when
//! --expected is given.
//! Logs (stderr): controlled by RUST_LOG, or --debug.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use warpeace::{Config, RunOptions, DEFAULT_MARKER};

#[derive(Parser, Debug)]
#[command(name = "warpeace")]
#[command(about = "Classify corpus chapters as war- or peace-related by term density", long_about = None)]
#[command(version)]
struct Args {
    /// Corpus text file
    #[arg(long, default_value = "files/war_and_peace.txt")]
    corpus: PathBuf,

    /// War term list (one term per line or whitespace-separated; built-in list if omitted)
    #[arg(long)]
    war_terms: Option<PathBuf>,

    /// Peace term list (one term per line or whitespace-separated; built-in list if omitted)
    #[arg(long)]
    peace_terms: Option<PathBuf>,

    /// Report file to write
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Reference report to compare the written report against
    #[arg(long)]
    expected: Option<PathBuf>,

    /// Token that opens a new chapter
    #[arg(long, default_value = DEFAULT_MARKER)]
    marker: String,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::new(if debug { "debug" } else { "warn" }),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut options = RunOptions::new(args.corpus, args.output)
        .with_config(Config::default().with_marker(args.marker));
    options.war_terms = args.war_terms;
    options.peace_terms = args.peace_terms;
    options.expected = args.expected;

    let summary = warpeace::run(&options, io::stdout().lock()).context("classification failed")?;

    match summary.comparison {
        Some(Ok(similarity)) => match similarity.percent() {
            Some(percent) => println!("Similarity: {percent:.2}%"),
            None => println!("Similarity: no lines to compare"),
        },
        // Diagnostic only; the report is already persisted.
        Some(Err(e)) => tracing::warn!("{e}"),
        None => {}
    }

    Ok(())
}
