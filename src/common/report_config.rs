// ReportConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::time::Duration;
use super::{
    OutputFormat,
    Region,
};

/// Default number of objects shown per bucket. Negative shows the oldest.
pub const DEFAULT_DISPLAY_COUNT: i64 = -5;

/// Default time allowed for every bucket to be reported.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Report configuration.
#[derive(Debug)]
pub struct ReportConfig {
    /// How many objects to display per bucket.
    ///
    /// Positive values show the newest `n` objects, negative values show the
    /// oldest `n`.
    pub display_count: i64,

    /// Time allowed for all bucket reports to arrive.
    pub timeout: Duration,

    /// Only buckets whose name contains this are reported.
    ///
    /// Empty matches every bucket.
    pub include: String,

    /// Buckets whose name contains this are skipped.
    ///
    /// Empty skips nothing.
    pub exclude: String,

    /// How each report is printed.
    pub output: OutputFormat,

    /// The region that the default client should be created in.
    ///
    /// Bucket listing happens here, scans move to each bucket's own region.
    pub region: Region,

    /// Maximum number of buckets scanned at once. `None` scans them all at
    /// once.
    pub concurrency: Option<usize>,
}

impl Default for ReportConfig {
    /// Returns a default `ReportConfig`.
    ///
    /// ```rust
    /// ReportConfig {
    ///     display_count: -5,
    ///     timeout:       Duration::from_secs(600),
    ///     include:       String::new(),
    ///     exclude:       String::new(),
    ///     output:        OutputFormat::Human,
    ///     region:        Region::new(),
    ///     concurrency:   None,
    /// }
    /// ```
    fn default() -> Self {
        Self {
            display_count: DEFAULT_DISPLAY_COUNT,
            timeout:       DEFAULT_TIMEOUT,
            include:       String::new(),
            exclude:       String::new(),
            output:        OutputFormat::Human,
            region:        Region::new(),
            concurrency:   None,
        }
    }
}
