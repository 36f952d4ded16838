use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::chapter::Chapter;
use crate::error::WarPeaceError;
use crate::source::{decode, join_lines};

/// Write one `Chapter <n>: <label>-related` line per chapter.
pub fn write_report<W: Write>(chapters: &[Chapter], mut writer: W) -> io::Result<()> {
    for chapter in chapters {
        writeln!(writer, "{}", chapter.report_line())?;
    }
    writer.flush()
}

/// Create (or truncate) `path` and write the report into it.
///
/// The file is closed on every exit path; after an error its content is partial.
pub fn write_report_file(
    chapters: &[Chapter],
    path: impl AsRef<Path>,
) -> Result<(), WarPeaceError> {
    let path = path.as_ref();
    let failed = |source| WarPeaceError::Output {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(failed)?;
    write_report(chapters, BufWriter::new(file)).map_err(failed)
}

/// Render the report into a string, lines terminated by `\n`.
pub fn render_report(chapters: &[Chapter]) -> String {
    let mut out = String::new();
    for chapter in chapters {
        out.push_str(&chapter.report_line());
        out.push('\n');
    }
    out
}

/// Result of a line-by-line comparison of two reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Similarity {
    /// Line pairs that are identical at the same position.
    pub matching: usize,
    /// Line pairs compared (the shorter input's line count).
    pub compared: usize,
}

impl Similarity {
    /// Percentage of identical line pairs, or `None` when nothing was compared.
    pub fn percent(&self) -> Option<f64> {
        if self.compared == 0 {
            None
        } else {
            Some(100.0 * self.matching as f64 / self.compared as f64)
        }
    }
}

/// Compare two line sequences position by position, up to the shorter length.
pub fn compare_lines<A, B>(actual: &[A], expected: &[B]) -> Similarity
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let compared = actual.len().min(expected.len());
    let matching = actual
        .iter()
        .zip(expected)
        .filter(|(a, e)| AsRef::<str>::as_ref(*a) == AsRef::<str>::as_ref(*e))
        .count();
    Similarity { matching, compared }
}

/// Compare a written report file against an expected reference file.
///
/// Both files are decoded like any other input, so content never fails
/// the comparison. Fails with [`WarPeaceError::ComparisonResourceUnavailable`]
/// only if either file cannot be read.
pub fn compare_files(
    actual: impl AsRef<Path>,
    expected: impl AsRef<Path>,
) -> Result<Similarity, WarPeaceError> {
    let actual = read_lines(actual.as_ref())?;
    let expected = read_lines(expected.as_ref())?;
    let similarity = compare_lines(&actual, &expected);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        actual = actual.len(),
        expected = expected.len(),
        matching = similarity.matching,
        "compared report"
    );

    Ok(similarity)
}

fn read_lines(path: &Path) -> Result<Vec<String>, WarPeaceError> {
    let raw = fs::read(path).map_err(|source| WarPeaceError::ComparisonResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(join_lines(&decode(raw)).lines().map(str::to_string).collect())
}
