//! CSV row source: yields data rows (header skipped) as `Result<Row>` for the dispatcher.

use anyhow::{Context, Result};
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::Row;

/// Data rows of a CSV input. The header record is consumed on construction.
///
/// Rows may have differing field counts. Fields are decoded lossily, so a non-UTF-8 byte in
/// any column never fails the read; an invalid email field simply fails validation later.
/// Only I/O and CSV structure errors are yielded as `Err`. After the first one the iterator
/// is fused, so the dispatcher sees exactly one `Err`.
pub struct CsvRows<R> {
    reader: csv::Reader<R>,
    record: ByteRecord,
    done: bool,
}

impl CsvRows<File> {
    /// Open `path` and read its header. Fails before any pipeline thread exists.
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("open input file {}", path.display()))?;
        Self::from_reader(file).with_context(|| path.display().to_string())
    }
}

impl<R: Read> CsvRows<R> {
    /// Wrap `rdr` and read its header. An input with no header row at all is an error.
    pub fn from_reader(rdr: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);
        let header = reader.byte_headers().context("read header row")?;
        if header.is_empty() {
            anyhow::bail!("input has no header row");
        }
        Ok(Self {
            reader,
            record: ByteRecord::new(),
            done: false,
        })
    }
}

impl<R: Read> Iterator for CsvRows<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_byte_record(&mut self.record) {
            Ok(true) => Some(Ok(self
                .record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect())),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                let line = e.position().map(|p| p.line());
                Some(Err(anyhow::Error::new(e).context(match line {
                    Some(l) => format!("read row at line {l}"),
                    None => "read row".to_string(),
                })))
            }
        }
    }
}
