//! Append-only CSV output for one export run.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::Context;
use scrapify_scraper::OutputSchema;

/// CSV writer opened once per run.
///
/// `csv::Writer` is not flexible, so a row whose width differs from the
/// header is rejected instead of silently misaligning columns.
pub(crate) struct CsvSink<W: io::Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Creates (or truncates) the file at `path`.
    pub(crate) fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create output file {}", path.display()))?;
        Ok(Self::from_writer(file))
    }
}

impl<W: io::Write> CsvSink<W> {
    pub(crate) fn from_writer(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
        }
    }

    pub(crate) fn write_header(&mut self, schema: OutputSchema) -> anyhow::Result<()> {
        self.writer
            .write_record(schema.header())
            .context("failed to write CSV header")
    }

    pub(crate) fn write_row(&mut self, row: &[String]) -> anyhow::Result<()> {
        self.writer
            .write_record(row)
            .context("failed to write CSV row")
    }

    /// Flushes buffered rows and returns the underlying writer.
    pub(crate) fn finish(self) -> anyhow::Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {}", e.error()))
    }
}
