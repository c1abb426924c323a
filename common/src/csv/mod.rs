//! CSV input contract of the uploader.
//!
//! The first non-blank line is the header. Every following line is split on
//! commas and mapped positionally onto the header names, with names and values
//! trimmed. Quotes carry no meaning. Blank lines are skipped. Rows with a
//! missing or blank value are dropped silently; only their count is reported
//! back so the caller can log it. Extra trailing values are ignored.

use crate::error::CsvError;
use crate::model::record::{Record, RecordSet};
use ::csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

/// Result of parsing one CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCsv {
    pub records: RecordSet,
    /// Data rows discarded because at least one field was blank.
    pub dropped: usize,
}

/// Parses CSV text into a validated `RecordSet`.
pub fn parse_records(text: &str) -> Result<ParsedCsv, CsvError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .quoting(false)
        .from_reader(text.trim_start().as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(CsvError::MissingHeader);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let values = result?;
        if is_blank_line(&values) {
            continue;
        }
        let record: Record = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name, values.get(i).unwrap_or("")))
            .collect();
        rows.push(record);
    }

    let (records, dropped) = RecordSet::validated(rows);
    if dropped > 0 {
        debug!("dropped {dropped} CSV rows with a blank field");
    }
    Ok(ParsedCsv { records, dropped })
}

/// A whitespace-only line comes back as a single empty field once trimmed.
fn is_blank_line(values: &StringRecord) -> bool {
    values.len() == 1 && values.get(0).is_some_and(str::is_empty)
}
