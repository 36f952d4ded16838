//! Chapter-level war/peace classification by term density.
//!
//! `warpeace` splits a corpus into chapters at a marker token, measures how
//! densely each chapter uses a list of war terms and a list of peace terms,
//! and labels every chapter by whichever density is higher.
//!
//! # Quick start
//!
//! ```rust
//! use warpeace::{analyze, parse_terms, render_report, Config};
//!
//! let corpus = "CHAPTER one. war war peace. CHAPTER two. peace peace peace.";
//! let war = parse_terms("war");
//! let peace = parse_terms("peace");
//! let chapters = analyze(corpus, &war, &peace, &Config::default());
//! assert_eq!(
//!     render_report(&chapters),
//!     "Chapter 1: war-related\nChapter 2: peace-related\n"
//! );
//! ```

mod chapter;
mod chapter_maker;
mod classify;
mod error;
mod report;
mod run;
mod source;
pub mod termlists;
mod tokenize;

pub use chapter::{density, Category, Chapter};
pub use chapter_maker::{split_chapters, DEFAULT_MARKER};
pub use classify::classify;
pub use error::WarPeaceError;
pub use report::{
    compare_files, compare_lines, render_report, write_report, write_report_file, Similarity,
};
pub use run::{run, RunOptions, RunSummary};
pub use source::read_text;
pub use termlists::{available_termlists, get_termlist, load_terms, parse_terms};
pub use tokenize::{is_punctuation, tokenize};

use std::collections::HashSet;
use std::path::Path;

/// Configuration for chapter splitting.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Token that opens a new chapter.
    pub marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl Config {
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// The marker as it appears in the token stream.
    ///
    /// Tokens are punctuation-stripped, so the marker is too: `"BOOK."`
    /// matches the token `BOOK`. Fails with [`WarPeaceError::InvalidMarker`]
    /// if the result is empty or contains whitespace.
    pub fn marker_token(&self) -> Result<String, WarPeaceError> {
        let token = self.stripped_marker();
        if token.is_empty() || token.contains(char::is_whitespace) {
            Err(WarPeaceError::InvalidMarker(self.marker.clone()))
        } else {
            Ok(token)
        }
    }

    fn stripped_marker(&self) -> String {
        tokenize::strip_punctuation(self.marker.trim())
    }
}

/// Split a corpus into chapters and classify each one.
///
/// The marker is punctuation-stripped before matching; a marker that
/// cannot match any token (see [`Config::marker_token`]) leaves the whole
/// corpus as one chapter.
pub fn analyze(
    text: &str,
    war_terms: &HashSet<String>,
    peace_terms: &HashSet<String>,
    config: &Config,
) -> Vec<Chapter> {
    let tokens = tokenize::tokenize(text);

    #[cfg(feature = "tracing")]
    tracing::debug!(tokens = tokens.len(), "tokenized corpus");

    let marker = config.stripped_marker();
    let mut chapters = chapter_maker::make_chapters(tokens, &marker);

    #[cfg(feature = "tracing")]
    tracing::debug!(chapters = chapters.len(), marker = %marker, "split chapters");

    classify::classify_chapters(&mut chapters, war_terms, peace_terms);
    chapters
}

/// Load the corpus and both term lists from disk, then [`analyze`].
///
/// All three inputs are read before any processing; the first one that
/// cannot be read aborts with [`WarPeaceError::ResourceUnavailable`]. An
/// unusable marker is rejected before anything is read.
pub fn analyze_files(
    corpus: impl AsRef<Path>,
    war_terms: impl AsRef<Path>,
    peace_terms: impl AsRef<Path>,
    config: &Config,
) -> Result<Vec<Chapter>, WarPeaceError> {
    config.marker_token()?;
    let text = read_text(corpus)?;
    let war_terms = load_terms(war_terms)?;
    let peace_terms = load_terms(peace_terms)?;
    Ok(analyze(&text, &war_terms, &peace_terms, config))
}
