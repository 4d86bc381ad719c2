//src/reader.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Opens a tab-delimited file for reading, transparently decompressing when
/// the path ends with ".gz".
pub fn open_tsv<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let f = File::open(path)?;

    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    Ok(reader)
}

/// Lazily yields tab-split rows from a reader, one `Vec<String>` per line.
/// Blank lines produce nothing. I/O errors surface through the item type and
/// are fatal to the caller.
pub fn read_tsv_rows<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = io::Result<Vec<String>>> {
    reader.lines().filter_map(|line_result| match line_result {
        Ok(line) => {
            if line.is_empty() {
                None
            } else {
                Some(Ok(line.split('\t').map(str::to_string).collect()))
            }
        }
        Err(e) => Some(Err(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_rows_on_tabs_and_skips_blank_lines() {
        let rows: Vec<Vec<String>> = read_tsv_rows(Cursor::new("a\tb\tc\n\nd\te\n"))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e"]]);
    }

    #[test]
    fn gz_and_plain_inputs_yield_identical_rows() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let text = "x\ty\n1\t2\n";
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        let gz_bytes = encoder.finish().unwrap();

        let plain: Vec<Vec<String>> = read_tsv_rows(Cursor::new(text))
            .collect::<io::Result<_>>()
            .unwrap();
        let unzipped: Vec<Vec<String>> = read_tsv_rows(BufReader::new(
            MultiGzDecoder::new(Cursor::new(gz_bytes)),
        ))
        .collect::<io::Result<_>>()
        .unwrap();
        assert_eq!(plain, unzipped);
    }
}
