//! Shared library of the SensorMetrics dashboard.
//!
//! Both the browser frontend and the native host depend on this crate. It owns
//! the wire model exchanged with the remote sensor API, the CSV input contract
//! and the batch uploader that drives a parsed record set to the API one batch
//! at a time.

pub mod csv;
pub mod error;
pub mod model;
pub mod upload;

pub use error::{CsvError, Result, TransportError, UploadError};
