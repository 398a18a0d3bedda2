//! Ingestion error types.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::validate::Violation;

/// Result type alias for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that can occur while loading a placement snapshot.
///
/// All variants are fatal to the run; none are retried.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source file does not exist.
    #[error("source file not found [{}]", .0.display())]
    MissingSource(PathBuf),

    /// The source file exists but could not be read.
    #[error("error reading source file [{}]: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source file is not parseable as delimited text.
    #[error("malformed source file [{}]: {message}", path.display())]
    MalformedSource { path: PathBuf, message: String },

    /// One or more rows failed schema validation, across either source.
    #[error("{0}")]
    Validation(ValidationReport),
}

/// Every row-level violation found in one run, grouped by source file.
///
/// The report is only raised once both sources have been fully read, so an
/// operator can fix every broken row in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    sources: Vec<(PathBuf, Vec<Violation>)>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append violations for a source, keeping encounter order.
    pub fn record(&mut self, source: &Path, violations: Vec<Violation>) {
        if violations.is_empty() {
            return;
        }
        match self.sources.iter_mut().find(|(path, _)| path == source) {
            Some((_, existing)) => existing.extend(violations),
            None => self.sources.push((source.to_path_buf(), violations)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Total number of recorded violations across all sources.
    pub fn len(&self) -> usize {
        self.sources.iter().map(|(_, v)| v.len()).sum()
    }

    /// Fails with the aggregated error if anything was recorded.
    pub fn into_result(self) -> IngestResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(IngestError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data validation errors")?;
        for (path, violations) in &self.sources {
            for violation in violations {
                write!(f, "\n{}: {}", path.display(), violation)?;
            }
        }
        Ok(())
    }
}
