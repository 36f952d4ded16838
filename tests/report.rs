// Report emission and reference comparison

use std::fs;

use warpeace::{
    analyze, compare_files, parse_terms, write_report, write_report_file, Config, Similarity,
    WarPeaceError,
};

const CORPUS: &str = "CHAPTER one. war war peace. CHAPTER two. peace peace peace.";
const EXPECTED: &str = "Chapter 1: war-related\nChapter 2: peace-related\n";

fn chapters() -> Vec<warpeace::Chapter> {
    analyze(
        CORPUS,
        &parse_terms("war"),
        &parse_terms("peace"),
        &Config::default(),
    )
}

#[test]
fn test_write_report_to_buffer() {
    let mut out = Vec::new();
    write_report(&chapters(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
}

#[test]
fn test_console_and_file_sinks_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.txt");
    let chapters = chapters();

    let mut console = Vec::new();
    write_report(&chapters, &mut console).unwrap();
    write_report_file(&chapters, &path).unwrap();

    assert_eq!(fs::read(&path).unwrap(), console);
}

#[test]
fn test_write_report_file_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.txt");
    fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();
    write_report_file(&chapters(), &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), EXPECTED);
}

#[test]
fn test_write_report_file_unwritable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("output.txt");
    let err = write_report_file(&chapters(), &path).unwrap_err();
    assert!(matches!(err, WarPeaceError::Output { .. }));
}

#[test]
fn test_compare_files_identical() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");
    let expected = dir.path().join("expected.txt");
    write_report_file(&chapters(), &output).unwrap();
    fs::write(&expected, EXPECTED).unwrap();

    let similarity = compare_files(&output, &expected).unwrap();
    assert_eq!(similarity, Similarity { matching: 2, compared: 2 });
    assert_eq!(similarity.percent(), Some(100.0));
}

#[test]
fn test_compare_files_partial_match() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");
    let expected = dir.path().join("expected.txt");
    write_report_file(&chapters(), &output).unwrap();
    fs::write(
        &expected,
        "Chapter 1: war-related\nChapter 2: war-related\nChapter 3: war-related\n",
    )
    .unwrap();

    let similarity = compare_files(&output, &expected).unwrap();
    assert_eq!(similarity, Similarity { matching: 1, compared: 2 });
    assert_eq!(similarity.percent(), Some(50.0));
}

#[test]
fn test_compare_files_non_utf8_expected() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");
    let expected = dir.path().join("expected.txt");
    write_report_file(&chapters(), &output).unwrap();
    // Second line ends in a lone 0xE9, which is not valid UTF-8.
    let mut bytes = b"Chapter 1: war-related\nChapter 2: peace-related".to_vec();
    bytes.extend_from_slice(&[0xE9, b'\n']);
    fs::write(&expected, bytes).unwrap();

    let similarity = compare_files(&output, &expected).unwrap();
    assert_eq!(similarity, Similarity { matching: 1, compared: 2 });
}

#[test]
fn test_compare_files_ignores_bom_and_crlf() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");
    let expected = dir.path().join("expected.txt");
    write_report_file(&chapters(), &output).unwrap();
    fs::write(
        &expected,
        "\u{FEFF}Chapter 1: war-related\r\nChapter 2: peace-related\r\n",
    )
    .unwrap();

    let similarity = compare_files(&output, &expected).unwrap();
    assert_eq!(similarity.percent(), Some(100.0));
}

#[test]
fn test_compare_files_missing_expected() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");
    let expected = dir.path().join("expected.txt");
    write_report_file(&chapters(), &output).unwrap();

    match compare_files(&output, &expected) {
        Err(WarPeaceError::ComparisonResourceUnavailable { path, .. }) => {
            assert_eq!(path, expected)
        }
        other => panic!("expected ComparisonResourceUnavailable, got {other:?}"),
    }
}
