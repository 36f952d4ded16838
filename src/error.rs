use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WarPeaceError {
    /// An input resource (corpus or term list) could not be read. Fatal.
    #[error("could not open file: {}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// One side of the report comparison could not be read. Diagnostic only.
    #[error("could not open file for comparison: {}", path.display())]
    ComparisonResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write report: {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not print report")]
    Console(#[source] io::Error),
    /// The chapter marker has no characters left once punctuation is
    /// stripped, or contains whitespace, so it could never match a token.
    #[error("invalid chapter marker: {0:?}")]
    InvalidMarker(String),
    #[error("unknown term list: {0}")]
    UnknownTermList(String),
}
