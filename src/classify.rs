use std::collections::HashSet;

use crate::chapter::{Category, Chapter};

/// War wins only on a strictly greater density; ties (including 0 vs 0) are Peace.
pub fn classify(war_density: f64, peace_density: f64) -> Category {
    if war_density > peace_density {
        Category::War
    } else {
        Category::Peace
    }
}

/// Score every chapter against both term sets and set its category.
pub fn classify_chapters(
    chapters: &mut [Chapter],
    war_terms: &HashSet<String>,
    peace_terms: &HashSet<String>,
) {
    for chapter in chapters.iter_mut() {
        chapter.war_density = chapter.terms_density(war_terms);
        chapter.peace_density = chapter.terms_density(peace_terms);
        chapter.category = classify(chapter.war_density, chapter.peace_density);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            index = chapter.index,
            words = chapter.words_count(),
            war = chapter.war_density,
            peace = chapter.peace_density,
            category = chapter.category.as_str(),
            "scored chapter"
        );
    }
}
