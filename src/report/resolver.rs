// Region resolution for bucket scans
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    Error,
    StorageBackend,
};
use tracing::debug;

/// Return a backend suitable for talking to `bucket_name`.
///
/// An empty `bucket_name` returns the default backend, which is what bucket
/// listing uses. Otherwise the bucket's location constraint is looked up and,
/// if it has one, a backend bound to that region is returned. Some backends
/// only accept object listings from the bucket's own region.
pub async fn resolve_client<B: StorageBackend>(
    backend:     &B,
    bucket_name: &str,
) -> Result<B, Error> {
    if bucket_name.is_empty() {
        return Ok(backend.clone());
    }

    debug!("resolve_client: Retrieving location for '{}'", bucket_name);

    let client = match backend.location_constraint(bucket_name).await? {
        Some(region) => {
            debug!("resolve_client: '{}' is in '{}'", bucket_name, region);

            backend.in_region(&region)
        },
        None => backend.clone(),
    };

    Ok(client)
}
