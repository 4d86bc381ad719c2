//src/writer.rs

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::errors::SubsError;
use crate::types::{HMMSEARCH_HEADER, SUBSTRATE_HEADER};

/// Where annotated rows go. A directory target owns its file name, which is
/// decided (together with the header) by the width of the first row; stdout
/// receives rows only, no header.
pub enum OutputTarget {
    Stdout,
    Dir(PathBuf),
}

/// Picks the header and output file name matching a row width. A width that
/// matches neither known schema is a fatal configuration error.
fn select_header(width: usize) -> Result<(&'static [&'static str], &'static str), SubsError> {
    if width == HMMSEARCH_HEADER.len() {
        Ok((&HMMSEARCH_HEADER, "cazymes.tsv"))
    } else if width == SUBSTRATE_HEADER.len() {
        Ok((&SUBSTRATE_HEADER, "substrates.tsv"))
    } else {
        Err(SubsError::SchemaMismatch { found: width })
    }
}

/// Streams result rows to the target, one tab-joined line per row, as they
/// are produced. The first row fixes the schema; any later row of a
/// different width aborts the run. Returns the number of rows written.
pub fn write_results<I>(mut results: I, target: &OutputTarget) -> Result<u64, SubsError>
where
    I: Iterator<Item = Result<Vec<String>, SubsError>>,
{
    let first = match results.next() {
        Some(row) => row?,
        None => return Ok(0),
    };
    let width = first.len();
    let (header, file_name) = select_header(width)?;

    let mut sink: Box<dyn Write> = match target {
        OutputTarget::Stdout => Box::new(io::stdout().lock()),
        OutputTarget::Dir(dir) => {
            fs::create_dir_all(dir)?;
            let path = dir.join(file_name);
            log::info!("Write output to {}", path.display());
            let mut w = BufWriter::new(File::create(&path)?);
            writeln!(w, "{}", header.join("\t"))?;
            Box::new(w)
        }
    };

    stream_rows(first, results, width, &mut sink)
}

fn stream_rows<W, I>(
    first: Vec<String>,
    results: I,
    width: usize,
    sink: &mut W,
) -> Result<u64, SubsError>
where
    W: Write + ?Sized,
    I: Iterator<Item = Result<Vec<String>, SubsError>>,
{
    writeln!(sink, "{}", first.join("\t"))?;
    let mut count = 1u64;

    for row_result in results {
        let row = row_result?;
        if row.len() != width {
            return Err(SubsError::SchemaMismatch { found: row.len() });
        }
        writeln!(sink, "{}", row.join("\t"))?;
        count += 1;
    }

    sink.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Result<Vec<String>, SubsError> {
        Ok(fields.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn header_selection_by_width() {
        assert_eq!(select_header(10).unwrap().1, "cazymes.tsv");
        assert_eq!(select_header(13).unwrap().1, "substrates.tsv");
        assert!(matches!(
            select_header(7),
            Err(SubsError::SchemaMismatch { found: 7 })
        ));
    }

    #[test]
    fn rows_stream_as_tab_joined_lines() {
        let mut sink = Vec::new();
        let rest = vec![row(&["c", "d"])].into_iter();
        let n = stream_rows(
            vec!["a".to_string(), "b".to_string()],
            rest,
            2,
            &mut sink,
        )
        .unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(sink).unwrap(), "a\tb\nc\td\n");
    }

    #[test]
    fn mixed_widths_are_fatal() {
        let mut sink = Vec::new();
        let rest = vec![row(&["x", "y", "z"])].into_iter();
        let err = stream_rows(
            vec!["a".to_string(), "b".to_string()],
            rest,
            2,
            &mut sink,
        )
        .unwrap_err();
        assert!(matches!(err, SubsError::SchemaMismatch { found: 3 }));
    }

    #[test]
    fn directory_target_writes_header_and_file() {
        let dir = std::env::temp_dir().join("dbcanlight_writer_test");
        let _ = fs::remove_dir_all(&dir);

        let results = vec![row(&[
            "GH5_2", "-", "EC:3.2.1.4", "cellulose", "300", "gene1", "500",
            "1.5e-30", "1", "300", "10", "480", "0.958",
        ])];
        let n = write_results(results.into_iter(), &OutputTarget::Dir(dir.clone())).unwrap();
        assert_eq!(n, 1);

        let text = fs::read_to_string(dir.join("substrates.tsv")).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), SUBSTRATE_HEADER.join("\t"));
        assert!(lines.next().unwrap().starts_with("GH5_2\t-\tEC:3.2.1.4\tcellulose"));

        let _ = fs::remove_dir_all(&dir);
    }
}
