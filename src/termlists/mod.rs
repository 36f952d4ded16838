use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::WarPeaceError;
use crate::source::read_text;
use crate::tokenize::tokenize;

/// All embedded term lists: (category_name, file_contents).
const TERMLISTS: &[(&str, &str)] = &[
    ("war", include_str!("war.txt")),
    ("peace", include_str!("peace.txt")),
];

/// Embedded term lists parsed once, in `TERMLISTS` order.
static PARSED_TERMLISTS: LazyLock<Vec<(&'static str, HashSet<String>)>> = LazyLock::new(|| {
    TERMLISTS
        .iter()
        .map(|(name, contents)| (*name, parse_terms(contents)))
        .collect()
});

/// Parse a term list: tokens separated by newlines or any whitespace.
///
/// Terms go through the same tokenizer as the corpus, so punctuation is
/// stripped but case is kept as written.
pub fn parse_terms(contents: &str) -> HashSet<String> {
    tokenize(contents).into_iter().collect()
}

/// Load a term list from a file.
///
/// Fails with [`WarPeaceError::ResourceUnavailable`] if the file cannot be read.
pub fn load_terms(path: impl AsRef<Path>) -> Result<HashSet<String>, WarPeaceError> {
    let terms = parse_terms(&read_text(path)?);

    #[cfg(feature = "tracing")]
    tracing::debug!(terms = terms.len(), "loaded term list");

    Ok(terms)
}

/// Return the built-in term list for a category (case-insensitive match).
///
/// Lists are parsed on first use and cached. Returns `Err` if the category
/// is not recognized.
pub fn get_termlist(category: &str) -> Result<&'static HashSet<String>, WarPeaceError> {
    let category_lower = category.to_lowercase();
    PARSED_TERMLISTS
        .iter()
        .find(|(name, _)| *name == category_lower)
        .map(|(_, terms)| terms)
        .ok_or_else(|| WarPeaceError::UnknownTermList(category.to_string()))
}

/// Return the names of the built-in term lists.
pub fn available_termlists() -> Vec<&'static str> {
    TERMLISTS.iter().map(|(name, _)| *name).collect()
}
