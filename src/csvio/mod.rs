//! CSV intake and delivery around the cleaning core.
//!
//! Intake parses delimited text with a header row into a
//! [`crate::types::Table`]; delivery serializes a cleaned table back to
//! bytes. Malformed input (ragged rows, invalid UTF-8) surfaces here as
//! [`crate::error::ServiceError`] before the cleaner ever runs.

pub mod read;
pub mod write;

pub use read::{read_csv_from_bytes, read_csv_from_path, read_csv_from_reader};
pub use write::{write_csv_to_bytes, write_csv_to_writer};
