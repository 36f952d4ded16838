use std::collections::HashSet;
use std::fmt;

/// Classification label for a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    War,
    Peace,
}

impl Category {
    /// Lowercase label used in reports: `"war"` or `"peace"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::War => "war",
            Category::Peace => "peace",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored and classified chapter of the corpus.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Chapter {
    /// 1-based position of the chapter in the corpus.
    pub index: usize,
    /// Chapter tokens, starting with the marker when one opened the chapter.
    pub tokens: Vec<String>,
    /// Fraction of tokens found in the war term set (set by scoring stage).
    pub war_density: f64,
    /// Fraction of tokens found in the peace term set (set by scoring stage).
    pub peace_density: f64,
    /// Final classification (set by classification stage).
    pub category: Category,
}

impl Chapter {
    /// Create an unscored chapter.
    pub(crate) fn new(index: usize, tokens: Vec<String>) -> Self {
        Self {
            index,
            tokens,
            war_density: 0.0,
            peace_density: 0.0,
            category: Category::Peace,
        }
    }

    /// Number of tokens in the chapter.
    pub fn words_count(&self) -> usize {
        self.tokens.len()
    }

    /// Count of tokens present in `terms`, duplicates included.
    pub fn terms_count(&self, terms: &HashSet<String>) -> usize {
        terms_count(&self.tokens, terms)
    }

    /// Term density: terms_count / words_count. Returns 0.0 if no tokens.
    pub fn terms_density(&self, terms: &HashSet<String>) -> f64 {
        density(&self.tokens, terms)
    }

    /// Report line, e.g. `"Chapter 3: war-related"`.
    pub fn report_line(&self) -> String {
        format!("Chapter {}: {}-related", self.index, self.category)
    }
}

fn terms_count(tokens: &[String], terms: &HashSet<String>) -> usize {
    tokens.iter().filter(|token| terms.contains(*token)).count()
}

/// Fraction of `tokens` that are members of `terms`.
///
/// Every occurrence counts, so a term appearing five times contributes five.
/// Returns exactly 0.0 for an empty token slice.
pub fn density(tokens: &[String], terms: &HashSet<String>) -> f64 {
    if tokens.is_empty() {
        0.0
    } else {
        terms_count(tokens, terms) as f64 / tokens.len() as f64
    }
}
