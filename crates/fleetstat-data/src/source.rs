//! Delimited-text source reader.
//!
//! Reads one input file into raw rows. Cells are matched to schema fields
//! positionally: short rows simply omit their trailing fields, and surplus
//! cells are kept together under the overflow key so the validator can name
//! them. No validation happens here.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{IngestError, IngestResult};
use crate::row::{OVERFLOW_KEY, RawRow, RawValue};
use crate::schema::Schema;

/// Read every row of a delimited-text source.
///
/// Open failures are classified before any row is read: a missing file is
/// [`IngestError::MissingSource`], any other I/O failure is
/// [`IngestError::Read`]. Structural parse failures mid-file surface as
/// [`IngestError::MalformedSource`].
pub fn read_rows(path: &Path, schema: &Schema) -> IngestResult<Vec<RawRow>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => IngestError::MissingSource(path.to_path_buf()),
        _ => IngestError::Read {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| classify_csv_error(path, err))?;
        rows.push(row_from_record(&record, schema));
    }

    debug!(rows = rows.len(), path = %path.display(), "read source file");
    Ok(rows)
}

fn row_from_record(record: &StringRecord, schema: &Schema) -> RawRow {
    let mut row = RawRow::new();
    let mut cells = record.iter();
    for name in schema.field_names() {
        match cells.next() {
            Some(cell) => {
                row.insert(name.to_string(), RawValue::Text(cell.to_string()));
            }
            None => break,
        }
    }
    let extra: Vec<String> = cells.map(str::to_string).collect();
    if !extra.is_empty() {
        row.insert(OVERFLOW_KEY.to_string(), RawValue::Overflow(extra));
    }
    row
}

fn classify_csv_error(path: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::Read {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::MalformedSource {
            path: path.to_path_buf(),
            message,
        },
    }
}
