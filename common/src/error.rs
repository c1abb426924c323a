use thiserror::Error;

/// Failures while turning CSV text into a record set.
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV input has no header row")]
    MissingHeader,

    #[error("CSV read error: {0}")]
    Read(#[from] ::csv::Error),
}

/// Failures of a single upload attempt that never produced an HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("attempt timed out after {0} ms")]
    Timeout(u32),

    #[error("could not encode request body: {0}")]
    Encode(String),
}

/// Precondition failures of an upload run. Per-batch failures are never
/// reported through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("nothing to upload: the record set is empty")]
    EmptyRecordSet,

    #[error("max_retries must allow at least one attempt")]
    NoAttemptsAllowed,
}

pub type Result<T> = std::result::Result<T, UploadError>;
