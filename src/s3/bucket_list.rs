// Easily handle converting from a ListBucketsOutput into our own BucketList
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::{
    Bucket,
    Buckets,
};
use tracing::debug;

/// Holds the discovered S3 `Buckets`.
pub struct BucketList(Buckets);

/// Implement a conversion from `ListBucketsOutput` to `BucketList`.
///
/// Buckets without a name are skipped. A missing or unrepresentable creation
/// date becomes the Unix epoch.
impl From<ListBucketsOutput> for BucketList {
    fn from(output: ListBucketsOutput) -> Self {
        let buckets = output.buckets()
            .iter()
            .filter_map(|b| {
                let name = b.name()?;

                let creation_date = b.creation_date()
                    .and_then(|d| d.to_chrono_utc().ok())
                    .unwrap_or_default();

                debug!("Found bucket '{}' created {}", name, creation_date);

                Some(Bucket::new(name, creation_date))
            })
            .collect();

        BucketList(buckets)
    }
}

impl BucketList {
    /// Consume the `BucketList`, returning the `Buckets`.
    pub fn into_buckets(self) -> Buckets {
        self.0
    }
}
