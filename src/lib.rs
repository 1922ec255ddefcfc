//! `csvwash` is a small CSV cleaning service: upload a delimited dataset
//! with a header row, get back a normalized, de-duplicated, type-inferred
//! copy plus a summary of what changed.
//!
//! The core is the [`cleaning`] module, a pure and deterministic pipeline
//! over an in-memory [`types::Table`]:
//!
//! 1. column names are trimmed, lowercased, and de-spaced
//! 2. values in non-numeric columns are stringified, trimmed, and lowercased
//! 3. columns are classified numeric or categorical, once per run
//! 4. sentinel tokens (`nan`, `none`, `""`, `error`, `unknown`, `n/a`)
//!    become the missing marker
//! 5. missing values in numeric columns are filled with `0`
//! 6. rows with missing values in categorical columns are dropped
//! 7. exact duplicate rows are dropped, first occurrence wins
//! 8. each column is coerced to its narrowest consistent type
//!    (integer, float, boolean, or text)
//!
//! Everything else is a thin collaborator around that core: CSV intake and
//! delivery ([`csvio`]), a session-keyed store for cleaned payloads awaiting
//! download ([`store`]), the actix-web surface ([`http`]), and environment
//! configuration ([`config`]).
//!
//! ## Quick example: clean a table
//!
//! ```rust
//! use csvwash::cleaning::clean;
//! use csvwash::types::{Table, Value};
//!
//! let table = Table::new(
//!     vec!["Name ".to_string(), "Age".to_string()],
//!     vec![
//!         vec![Value::Text("Alice".to_string()), Value::Int64(30)],
//!         vec![Value::Text("alice".to_string()), Value::Int64(30)],
//!     ],
//! );
//!
//! let (cleaned, summary) = clean(&table);
//! assert_eq!(cleaned.columns, vec!["name", "age"]);
//! assert_eq!(cleaned.row_count(), 1);
//! assert_eq!(summary.rows_removed, 1);
//! ```
//!
//! ## Quick example: bytes in, bytes out
//!
//! ```rust
//! use csvwash::cleaning::clean;
//! use csvwash::csvio::{read_csv_from_bytes, write_csv_to_bytes};
//!
//! # fn main() -> Result<(), csvwash::ServiceError> {
//! let table = read_csv_from_bytes(b"Name ,Age\nAlice,30\nBob,unknown\n")?;
//! let (cleaned, summary) = clean(&table);
//! let bytes = write_csv_to_bytes(&cleaned)?;
//!
//! assert_eq!(String::from_utf8_lossy(&bytes), "name,age\nalice,30\n");
//! assert_eq!(summary.rows_removed, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`cleaning`]: the fixed cleanup pipeline and its summary
//! - [`types`]: the in-memory table model
//! - [`csvio`]: CSV intake and delivery
//! - [`store`]: session-keyed cleaned-payload store
//! - [`http`]: actix-web handlers and server bootstrap
//! - [`config`]: environment-driven settings
//! - [`error`]: error types shared by the collaborators

pub mod cleaning;
pub mod config;
pub mod csvio;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use error::{ServiceError, ServiceResult};
