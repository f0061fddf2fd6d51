// Definition of a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::{
    DateTime,
    Utc,
};

/// Represents an S3 bucket.
///
/// This will always have a `name`. The `creation_date` falls back to the Unix
/// epoch if the backend didn't report one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Bucket {
    pub name:          String,
    pub creation_date: DateTime<Utc>,
}

impl Bucket {
    /// Return a new `Bucket` with the given `name` and `creation_date`.
    pub fn new<S: Into<String>>(name: S, creation_date: DateTime<Utc>) -> Self {
        Self {
            name:          name.into(),
            creation_date: creation_date,
        }
    }
}

/// Convenience type for a list of `Bucket`.
pub type Buckets = Vec<Bucket>;
