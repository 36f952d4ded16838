use crate::chapter::Chapter;

/// Default chapter marker token.
pub const DEFAULT_MARKER: &str = "CHAPTER";

/// Partition `tokens` into chapters at every `marker` token.
///
/// The marker stays as the first token of the chapter it opens. A marker
/// seen while the current chapter has no content yet (input start, or
/// nothing but markers so far) is appended instead, so a run of markers
/// opens a single chapter. Input without a marker yields one chapter.
pub fn split_chapters(tokens: Vec<String>, marker: &str) -> Vec<Vec<String>> {
    let mut chapters = Vec::new();
    let mut current: Vec<String> = Vec::new();
    // Whether `current` holds anything besides markers.
    let mut has_content = false;

    for token in tokens {
        if token == marker {
            if has_content {
                chapters.push(std::mem::take(&mut current));
                has_content = false;
            }
        } else {
            has_content = true;
        }
        current.push(token);
    }

    if !current.is_empty() {
        chapters.push(current);
    }
    chapters
}

/// Split `tokens` into unscored [`Chapter`]s numbered from 1.
pub fn make_chapters(tokens: Vec<String>, marker: &str) -> Vec<Chapter> {
    split_chapters(tokens, marker)
        .into_iter()
        .enumerate()
        .map(|(i, tokens)| Chapter::new(i + 1, tokens))
        .collect()
}
