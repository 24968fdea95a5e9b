//! Line sources feeding the drawer.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Reads every line of the file at `path`.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("can't open file: {}", path.display()))?;
    let lines = lines_from_reader(BufReader::new(file))
        .with_context(|| format!("failed to read file: {}", path.display()))?;
    log::debug!("read {} line(s) from {}", lines.len(), path.display());
    Ok(lines)
}

/// Splits a reader into lines on `\n`, dropping one `\r` before each break so
/// CRLF input keeps its fixed widths.
///
/// Bytes that are not UTF-8 become U+FFFD, so a damaged line still reaches
/// the decoder and is rejected on its own.
pub fn lines_from_reader<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| -> Result<String> {
            let mut bytes = line.context("failed to read input")?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            Ok(match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
            })
        })
        .collect()
}
