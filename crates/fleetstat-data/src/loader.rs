//! Snapshot loader.
//!
//! Reads both input files, validates every row, and either returns the
//! typed [`Snapshot`] or fails once with every violation found across both
//! sources. Rows are materialized before their violations are inspected;
//! nothing is dropped on the way in, and the aggregate decision is made
//! only after both files have been read in full.

use std::path::Path;

use tracing::info;

use crate::error::{IngestError, IngestResult, ValidationReport};
use crate::row::RawRow;
use crate::schema::{self, Schema};
use crate::source;
use crate::types::{HostRecord, InstanceRecord, Snapshot};
use crate::validate::{Violation, validate_row};

/// Load a placement snapshot from the host and instance datasets.
///
/// A source that fails to open aborts immediately; row validation of an
/// already-read source always completes before the aggregated
/// [`IngestError::Validation`] is raised.
pub fn load(hosts_path: &Path, instances_path: &Path) -> IngestResult<Snapshot> {
    let mut report = ValidationReport::new();

    let hosts = read_source(hosts_path, &schema::hosts(), HostRecord::from_raw, &mut report)?;
    let instances = read_source(
        instances_path,
        &schema::instances(),
        InstanceRecord::from_raw,
        &mut report,
    )?;

    report.into_result()?;

    info!(
        hosts = hosts.len(),
        instances = instances.len(),
        "loaded placement snapshot"
    );
    Ok(Snapshot { hosts, instances })
}

fn read_source<R>(
    path: &Path,
    schema: &Schema,
    convert: impl Fn(&RawRow) -> Result<R, Violation>,
    report: &mut ValidationReport,
) -> IngestResult<Vec<R>> {
    let rows = source::read_rows(path, schema)?;
    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        let violations = validate_row(row, schema);
        if violations.is_empty() {
            match convert(row) {
                Ok(record) => records.push(record),
                Err(violation) => report.record(path, vec![violation]),
            }
        } else {
            report.record(path, violations);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_a_clean_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let hosts = write_file(&dir, "HostState.txt", "host1,10,dcA\nhost2,5,dcB\n");
        let instances = write_file(
            &dir,
            "InstanceState.txt",
            "i1,custX,host1\ni2,custX,host1\ni3,custX,host2\n",
        );

        let snapshot = load(&hosts, &instances).unwrap();
        assert_eq!(snapshot.hosts.len(), 2);
        assert_eq!(snapshot.instances.len(), 3);
        assert_eq!(snapshot.hosts[0].slots, 10);
        assert_eq!(snapshot.instances[2].host, "host2");
    }

    #[test]
    fn aggregates_violations_across_both_sources() {
        let dir = tempfile::tempdir().unwrap();
        // One over-long host row, one short instance row.
        let hosts = write_file(&dir, "hosts.txt", "host1,10,dcA,extra_value\nhost2,5,dcB\n");
        let instances = write_file(&dir, "instances.txt", "i1,custX,host1\ni2,custX\n");

        let err = load(&hosts, &instances).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("data validation errors"), "{message}");
        assert!(message.contains("hosts.txt: Too many values [\"extra_value\"]"), "{message}");
        assert!(message.contains("instances.txt: Missing fields [\"hostID\"]"), "{message}");
    }

    #[test]
    fn every_broken_row_is_reported_not_just_the_first() {
        let dir = tempfile::tempdir().unwrap();
        let hosts = write_file(
            &dir,
            "hosts.txt",
            "host1,not_a_number,dcA\nhost2\nhost3,5,dcC\n",
        );
        let instances = write_file(&dir, "instances.txt", "i1,custX,host3\n");

        let err = load(&hosts, &instances).unwrap_err();
        let IngestError::Validation(report) = err else {
            panic!("expected validation error, got {err}");
        };
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn missing_instances_file_wins_over_host_violations() {
        let dir = tempfile::tempdir().unwrap();
        let hosts = write_file(&dir, "hosts.txt", "host1\n");
        let instances = dir.path().join("absent.txt");

        let err = load(&hosts, &instances).unwrap_err();
        assert!(matches!(err, IngestError::MissingSource(path) if path == instances));
    }
}
