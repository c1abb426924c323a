//! Records parsed from an uploaded CSV file.
//!
//! A `Record` is one data row keyed by the header names of the file. Records
//! are collected into a `RecordSet`, the immutable input of one upload run.
//! Values are kept as strings; the remote API performs its own typing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One CSV row mapped onto the header row: field name -> value.
///
/// Serialized as a flat JSON object, which is the shape the upload endpoint
/// expects inside its `data` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// True when any value is empty or whitespace only. Such records never
    /// reach the uploader.
    pub fn has_blank_field(&self) -> bool {
        self.0.values().any(|value| value.trim().is_empty())
    }
}

/// A repeated header name keeps the last value.
impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Ordered, immutable sequence of validated records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Wraps records the caller has already validated.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Builds a set from raw records, discarding every record with a blank
    /// field. Returns the set and the number of discarded records.
    pub fn validated(records: impl IntoIterator<Item = Record>) -> (Self, usize) {
        let mut dropped = 0;
        let records = records
            .into_iter()
            .filter(|record| {
                let keep = !record.has_blank_field();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();
        (Self { records }, dropped)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Records in the inclusive range `start..=end`.
    ///
    /// Returns `None` when `start > end` or `end` is out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> Option<&[Record]> {
        if start > end || end >= self.records.len() {
            return None;
        }
        Some(&self.records[start..=end])
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, region: &str) -> Record {
        [("ID", id), ("region", region)].into_iter().collect()
    }

    #[test]
    fn blank_values_are_detected() {
        assert!(!record("IA3", "Alaska").has_blank_field());
        assert!(record("IA3", "  ").has_blank_field());
        assert!(record("", "Alaska").has_blank_field());
    }

    #[test]
    fn validated_drops_records_with_blank_fields() {
        let (set, dropped) = RecordSet::validated(vec![
            record("IA1", "Iowa"),
            record("IA2", ""),
            record("IA3", "Iowa"),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(dropped, 1);
        assert_eq!(set.get(1).and_then(|r| r.get("ID")), Some("IA3"));
    }

    #[test]
    fn slice_is_inclusive_and_bounded() {
        let set: RecordSet = (0..5)
            .map(|i| record(&format!("S{i}"), "Iowa"))
            .collect::<Vec<_>>()
            .into();

        let slice = set.slice(1, 3).unwrap_or_default();
        assert_eq!(slice.len(), 3);
        assert_eq!(slice[0].get("ID"), Some("S1"));
        assert_eq!(slice[2].get("ID"), Some("S3"));

        assert!(set.slice(4, 4).is_some());
        assert!(set.slice(3, 5).is_none());
        assert!(set.slice(3, 2).is_none());
    }

    #[test]
    fn record_serializes_as_flat_object() {
        let json = serde_json::to_value(record("IA3", "Alaska")).unwrap();
        assert_eq!(json, serde_json::json!({ "ID": "IA3", "region": "Alaska" }));
    }
}
