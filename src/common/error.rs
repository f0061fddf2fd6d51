// Errors that end a listing, a scan or the whole run
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::time::Duration;
use thiserror::Error;

/// Errors raised while producing bucket reports.
#[derive(Debug, Error)]
pub enum Error {
    /// The storage backend failed: listing buckets, looking up a bucket
    /// location or listing objects.
    #[error("backend error: {0:#}")]
    Backend(anyhow::Error),

    /// The global deadline elapsed before every bucket was reported.
    #[error("timeout after {timeout:?}: {received} of {expected} buckets reported")]
    Timeout {
        received: usize,
        expected: usize,
        timeout:  Duration,
    },

    /// Filtering left no buckets to scan.
    #[error("no buckets found")]
    NoBuckets,

    /// Every scan task went away before all results were collected.
    #[error("result channel closed: {received} of {expected} buckets reported")]
    Incomplete {
        received: usize,
        expected: usize,
    },
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Self::Backend(error)
    }
}
