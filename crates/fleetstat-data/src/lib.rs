//! fleetstat-data: ingestion of fleet placement snapshots.
//!
//! Reads the two delimited-text datasets that describe a placement snapshot
//! (compute hosts and the VM instances placed on them), validates every row
//! against its fixed field schema, and produces a typed [`Snapshot`] for the
//! reporting layer.
//!
//! # Architecture
//!
//! ```text
//! loader::load
//!   ├── source::read_rows   (one RawRow per line, extras under "extra")
//!   ├── validate::validate_row  (every violation per row, never fails)
//!   ├── ValidationReport    (violations grouped by source file)
//!   └── Snapshot            (typed records, built only after validation)
//! ```
//!
//! Rows stay untyped (`RawRow`) until validation has run over both files, so
//! extra/missing/wrong-type defects can all be described in one aggregated
//! failure instead of the first one encountered.

pub mod error;
pub mod loader;
pub mod row;
pub mod schema;
pub mod source;
pub mod types;
pub mod validate;

pub use error::{IngestError, IngestResult, ValidationReport};
pub use loader::load;
pub use row::{OVERFLOW_KEY, RawRow, RawValue};
pub use schema::{FieldKind, Schema};
pub use types::*;
pub use validate::{Violation, validate_row};
