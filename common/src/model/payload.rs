use crate::model::record::Record;
use serde::Serialize;

/// Request body of `POST <upload_url>`: `{ "range": "0 to 9", "data": [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct UploadPayload<'a> {
    /// Inclusive zero-based index range of `data` within the record set.
    pub range: String,
    pub data: &'a [Record],
}

impl<'a> UploadPayload<'a> {
    pub fn new(range: impl Into<String>, data: &'a [Record]) -> Self {
        Self {
            range: range.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_matches_upload_endpoint_shape() {
        let records: Vec<Record> = vec![[("FM", "12.5"), ("ID", "IA3")].into_iter().collect()];
        let payload = UploadPayload::new("0 to 0", &records);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "range": "0 to 0",
                "data": [{ "FM": "12.5", "ID": "IA3" }]
            })
        );
    }
}
