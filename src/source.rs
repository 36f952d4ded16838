use std::fs;
use std::path::Path;

use crate::error::WarPeaceError;

const BOM: char = '\u{FEFF}';

/// Windows-1252 characters for bytes 0x80..=0x9F. Bytes cp1252 leaves
/// undefined keep their Latin-1 code point.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

/// Read a whole text resource and join its lines with `\n`.
///
/// Bytes that are not valid UTF-8 are decoded as Windows-1252 (Latin-1
/// with typographic marks in 0x80..=0x9F). A leading byte-order mark is
/// removed.
pub fn read_text(path: impl AsRef<Path>) -> Result<String, WarPeaceError> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|source| WarPeaceError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let text = decode(raw);

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input");

    Ok(join_lines(&text))
}

pub(crate) fn decode(raw: Vec<u8>) -> String {
    match String::from_utf8(raw) {
        Ok(s) => s,
        Err(e) => e.into_bytes().iter().map(|&b| cp1252_char(b)).collect(),
    }
}

fn cp1252_char(b: u8) -> char {
    match b {
        0x80..=0x9F => CP1252_HIGH[usize::from(b - 0x80)],
        _ => char::from(b),
    }
}

pub(crate) fn join_lines(text: &str) -> String {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    text.lines().collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_crlf_lines_are_normalized() {
        assert_eq!(join_lines("a\r\nb\r\n"), "a\nb");
    }

    #[test]
    fn test_bom_is_stripped() {
        assert_eq!(join_lines("\u{FEFF}CHAPTER I"), "CHAPTER I");
    }

    #[test]
    fn test_latin1_fallback() {
        // 0xE9 alone is invalid UTF-8; Latin-1 maps it to 'é'.
        assert_eq!(decode(vec![b'B', 0xE9, b'b', b'e']), "Bébe");
    }

    #[test]
    fn test_cp1252_quotes_become_typographic_marks() {
        assert_eq!(
            decode(vec![0x93, b'w', b'a', b'r', 0x94, b' ', 0x97]),
            "\u{201C}war\u{201D} \u{2014}"
        );
    }

    #[test]
    fn test_cp1252_quoted_word_tokenizes_clean() {
        let text = decode(vec![0x93, b'w', b'a', b'r', 0x94, b' ', 0xE9, b't', 0xE9]);
        assert_eq!(crate::tokenize::tokenize(&text), vec!["war", "été"]);
    }

    #[test]
    fn test_cp1252_undefined_bytes_pass_through() {
        assert_eq!(decode(vec![0x81, 0x9D, 0xFF]), "\u{0081}\u{009D}\u{FF}");
    }

    #[test]
    fn test_read_text_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "line one\nline two\n").unwrap();
        assert_eq!(read_text(file.path()).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        match read_text(&missing) {
            Err(WarPeaceError::ResourceUnavailable { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected ResourceUnavailable, got {other:?}"),
        }
    }
}
