// Bucket listing and filtering
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    Buckets,
    Error,
    StorageBackend,
};
use super::resolver::resolve_client;
use tracing::debug;

/// Return the buckets visible to the account, filtered by `include` and
/// `exclude`.
pub async fn list_buckets<B: StorageBackend>(
    backend: &B,
    include: &str,
    exclude: &str,
) -> Result<Buckets, Error> {
    debug!("list_buckets: Listing...");

    let client  = resolve_client(backend, "").await?;
    let buckets = client.list_all_buckets().await?;

    debug!("list_buckets: backend returned {} buckets", buckets.len());

    Ok(filter_buckets(buckets, include, exclude))
}

/// Keep buckets whose name contains `include` and, if `exclude` isn't empty,
/// doesn't contain `exclude`.
///
/// An empty `include` matches every bucket.
pub fn filter_buckets(buckets: Buckets, include: &str, exclude: &str) -> Buckets {
    buckets.into_iter()
        .filter(|b| {
            let included = b.name.contains(include);
            let excluded = !exclude.is_empty() && b.name.contains(exclude);

            if !included || excluded {
                debug!("Filtering out bucket '{}'", b.name);
            }

            included && !excluded
        })
        .collect()
}
