//! Reporting error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use fleetstat_data::{HostId, InstanceId};

/// Result type alias for reporting operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while deriving or writing statistics.
///
/// All variants are fatal; computations fail on the first violation they
/// detect and never return partial results.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An instance references a host that is not in the host dataset.
    #[error("no datacentre found for instance [{instance}] on host [{host}]")]
    UnresolvedHost { instance: InstanceId, host: HostId },

    /// A host has more instances placed on it than it has slots.
    #[error("host [{host}] slots {used}/{total}")]
    SlotOverflow { host: HostId, used: u32, total: u32 },

    /// The rendered report could not be written.
    #[error("unable to write report to [{}]: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
