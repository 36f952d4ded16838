use std::borrow::Cow;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::chapter::Chapter;
use crate::error::WarPeaceError;
use crate::report::{compare_files, write_report, write_report_file, Similarity};
use crate::source::read_text;
use crate::termlists::{get_termlist, load_terms};
use crate::{analyze, Config};

/// Inputs and outputs of one classification run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RunOptions {
    /// Corpus text file.
    pub corpus: PathBuf,
    /// War term list; the built-in list when `None`.
    pub war_terms: Option<PathBuf>,
    /// Peace term list; the built-in list when `None`.
    pub peace_terms: Option<PathBuf>,
    /// Report file, created or truncated.
    pub output: PathBuf,
    /// Reference report compared against `output` once it is written.
    pub expected: Option<PathBuf>,
    pub config: Config,
}

impl RunOptions {
    pub fn new(corpus: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            corpus: corpus.into(),
            war_terms: None,
            peace_terms: None,
            output: output.into(),
            expected: None,
            config: Config::default(),
        }
    }
    pub fn with_war_terms(mut self, path: impl Into<PathBuf>) -> Self {
        self.war_terms = Some(path.into());
        self
    }
    pub fn with_peace_terms(mut self, path: impl Into<PathBuf>) -> Self {
        self.peace_terms = Some(path.into());
        self
    }
    pub fn with_expected(mut self, path: impl Into<PathBuf>) -> Self {
        self.expected = Some(path.into());
        self
    }
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

/// What a completed run produced.
#[derive(Debug)]
#[non_exhaustive]
pub struct RunSummary {
    pub chapters: Vec<Chapter>,
    /// `None` when no expected report was given. A comparison error is
    /// carried here instead of failing the run.
    pub comparison: Option<Result<Similarity, WarPeaceError>>,
}

/// Load every input, classify, write the report to `console` and to
/// `options.output`, then compare against `options.expected`.
///
/// Any input failure returns `Err` before the output file is created.
pub fn run<W: Write>(options: &RunOptions, console: W) -> Result<RunSummary, WarPeaceError> {
    options.config.marker_token()?;

    let text = read_text(&options.corpus)?;
    let war_terms = category_terms(options.war_terms.as_deref(), "war")?;
    let peace_terms = category_terms(options.peace_terms.as_deref(), "peace")?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        corpus = %options.corpus.display(),
        war_terms = war_terms.len(),
        peace_terms = peace_terms.len(),
        "read files successfully"
    );

    let chapters = analyze(&text, &war_terms, &peace_terms, &options.config);

    write_report(&chapters, console).map_err(WarPeaceError::Console)?;
    write_report_file(&chapters, &options.output)?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        chapters = chapters.len(),
        output = %options.output.display(),
        "report written"
    );

    let comparison = options
        .expected
        .as_ref()
        .map(|expected| compare_files(&options.output, expected));

    Ok(RunSummary {
        chapters,
        comparison,
    })
}

fn category_terms(
    path: Option<&Path>,
    category: &str,
) -> Result<Cow<'static, HashSet<String>>, WarPeaceError> {
    match path {
        Some(path) => load_terms(path).map(Cow::Owned),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(category, "using built-in term list");

            get_termlist(category).map(Cow::Borrowed)
        }
    }
}
