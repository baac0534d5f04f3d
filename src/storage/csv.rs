use std::io::Write;

use anyhow::{Context, Result};

use crate::models::{OutputRow, HEADER};

/// CSV writer for listing rows. Writes the fixed header on construction
/// and streams rows in the order they are handed in.
pub struct ListingCsvWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> ListingCsvWriter<W> {
    pub fn new(writer: W) -> Result<Self> {
        let mut inner = csv::Writer::from_writer(writer);
        inner
            .write_record(HEADER)
            .context("Failed to write CSV header")?;
        Ok(Self { inner })
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.inner
            .write_record(row.cells())
            .context("Failed to write CSV row")
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().context("Failed to flush CSV output")
    }

    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to finish CSV output: {}", e.error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingRecord, ListingSummary};

    #[test]
    fn writes_header_then_rows() {
        let summary = ListingSummary {
            url: "https://example.com/a/".to_string(),
            rent: "$1,000".to_string(),
            contact: "(202) 555-0100".to_string(),
        };
        let record = ListingRecord {
            name: "A Place".to_string(),
            ..ListingRecord::default()
        };

        let mut writer = ListingCsvWriter::new(Vec::new()).unwrap();
        writer
            .write_row(&OutputRow::assemble(&summary, &record, "2026-08-04"))
            .unwrap();
        writer
            .write_row(&OutputRow::assemble(&summary, &record, "2026-08-04"))
            .unwrap();

        let bytes = writer.into_inner().unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let headers = reader.headers().unwrap();
        assert_eq!(headers.len(), HEADER.len());
        assert_eq!(&headers[0], "Option Name");
        assert_eq!(&headers[21], "ds");

        let rows: Vec<_> = reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "[A Place](https://example.com/a/)");
    }
}
