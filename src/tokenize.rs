/// Typographic marks treated as punctuation in addition to ASCII punctuation.
const EXTRA_PUNCTUATION: &[char] = &[
    '\u{2018}', // ‘
    '\u{2019}', // ’
    '\u{201C}', // “
    '\u{201D}', // ”
    '\u{2013}', // –
    '\u{2014}', // —
    '\u{2026}', // …
    '\u{00AB}', // «
    '\u{00BB}', // »
    '\u{00A1}', // ¡
    '\u{00BF}', // ¿
];

/// Returns true if `c` is stripped from tokens.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c)
}

/// Split `text` on whitespace and strip punctuation from every fragment.
///
/// Fragments that are pure punctuation (e.g. a lone `"--"`) become empty
/// and are dropped, so every returned token is non-empty.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(strip_punctuation)
        .filter(|token| !token.is_empty())
        .collect()
}

pub(crate) fn strip_punctuation(fragment: &str) -> String {
    fragment.chars().filter(|&c| !is_punctuation(c)).collect()
}
